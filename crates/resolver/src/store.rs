//! In-memory type store.
//!
//! The reference [`TypeProvider`] implementation: a name → descriptor map
//! that is validated once at build time and read-only afterwards.

use crate::hierarchy;
use indexmap::IndexMap;
use std::sync::Arc;
use typebind_api::{ResolveError, ResolveResult, TypeDescriptor, TypeProvider};

#[derive(Debug, Clone, Default)]
pub struct TypeStore {
    types: Arc<IndexMap<String, TypeDescriptor>>,
}

impl TypeStore {
    pub fn builder() -> TypeStoreBuilder {
        TypeStoreBuilder::default()
    }

    /// Build a store from descriptors, validating the hierarchy.
    pub fn from_descriptors(
        descriptors: impl IntoIterator<Item = TypeDescriptor>,
    ) -> ResolveResult<Self> {
        descriptors
            .into_iter()
            .fold(Self::builder(), TypeStoreBuilder::add)
            .build()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }
}

impl TypeProvider for TypeStore {
    fn get_type(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    fn type_names(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        Box::new(self.types.keys().map(String::as_str))
    }
}

/// Collects descriptors; [`build`](Self::build) checks them.
#[derive(Debug, Default)]
pub struct TypeStoreBuilder {
    descriptors: Vec<TypeDescriptor>,
}

impl TypeStoreBuilder {
    pub fn add(mut self, descriptor: TypeDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Validate and freeze the hierarchy.
    ///
    /// Fails on duplicate names, on supertype or interface references to
    /// types that were never added, and on inheritance cycles.
    pub fn build(self) -> ResolveResult<TypeStore> {
        let mut types = IndexMap::with_capacity(self.descriptors.len());
        for descriptor in self.descriptors {
            if types.contains_key(&descriptor.name) {
                return Err(ResolveError::DuplicateType(descriptor.name));
            }
            types.insert(descriptor.name.clone(), descriptor);
        }

        let store = TypeStore {
            types: Arc::new(types),
        };

        for descriptor in store.iter() {
            for parent in descriptor.direct_supertypes() {
                if let Some(name) = parent.type_name() {
                    store.require(name)?;
                }
            }
        }
        hierarchy::validate_acyclic(&store)?;

        tracing::debug!("type store built with {} types", store.len());
        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typebind_api::TypeUse;

    #[test]
    fn test_duplicate_names_rejected() {
        let err = TypeStore::builder()
            .add(TypeDescriptor::class("A"))
            .add(TypeDescriptor::interface("A"))
            .build()
            .unwrap_err();
        assert_eq!(err, ResolveError::DuplicateType("A".into()));
    }

    #[test]
    fn test_missing_supertype_rejected() {
        let err = TypeStore::from_descriptors([
            TypeDescriptor::class("A").implements(TypeUse::concrete("Missing"))
        ])
        .unwrap_err();
        assert_eq!(err, ResolveError::TypeNotFound("Missing".into()));
    }

    #[test]
    fn test_lookup() {
        let store = TypeStore::from_descriptors([
            TypeDescriptor::interface("I"),
            TypeDescriptor::class("A").implements(TypeUse::concrete("I")),
        ])
        .unwrap();
        assert_eq!(store.len(), 2);
        assert!(store.contains("I"));
        assert!(store.get_type("B").is_none());
        assert_eq!(store.type_names().collect::<Vec<_>>(), vec!["I", "A"]);
    }
}
