pub mod descriptor;
pub mod member;
pub mod resolved;
pub mod type_use;

pub use descriptor::*;
pub use member::*;
pub use resolved::*;
pub use type_use::*;
