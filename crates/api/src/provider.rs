//! Lookup seam between the hierarchy loader and the resolver.

use crate::error::{ResolveError, ResolveResult};
use crate::models::TypeDescriptor;

/// Provides type descriptors by qualified name.
///
/// Implementations hold an immutable, already-loaded hierarchy; the resolver
/// never mutates it.
pub trait TypeProvider: Send + Sync {
    /// Get the descriptor for a qualified name.
    ///
    /// Returns `None` if the type was never loaded.
    fn get_type(&self, name: &str) -> Option<&TypeDescriptor>;

    /// All loaded type names.
    fn type_names(&self) -> Box<dyn Iterator<Item = &str> + '_>;

    /// Like [`get_type`](Self::get_type), but a miss is a hard error.
    fn require(&self, name: &str) -> ResolveResult<&TypeDescriptor> {
        self.get_type(name)
            .ok_or_else(|| ResolveError::TypeNotFound(name.to_string()))
    }

    fn contains(&self, name: &str) -> bool {
        self.get_type(name).is_some()
    }
}
