pub mod error;
pub mod models;
pub mod provider;

// Re-export commonly used types
pub use error::{ResolveError, ResolveResult};
pub use models::*;
pub use provider::TypeProvider;
