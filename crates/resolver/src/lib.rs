//! Generic type-parameter resolution.
//!
//! Given a read-only type hierarchy ([`TypeProvider`]), a
//! [`SubstitutionResolver`] answers two questions:
//!
//! - what does an ancestor's type parameter resolve to when seen from a
//!   more specific type ([`SubstitutionResolver::resolve_parameter_at`]);
//! - what does a field, method return or method parameter resolve to when
//!   observed through a type that inherits it
//!   ([`SubstitutionResolver::resolve_member`]).
//!
//! # Usage
//!
//! ```ignore
//! use typebind_resolver::{SubstitutionResolver, TypeStore};
//!
//! let store = TypeStore::from_descriptors(descriptors)?;
//! let resolver = SubstitutionResolver::new(&store);
//! let element = resolver.resolve_parameter_at("com.acme.Orders", "com.acme.Repository", 0)?;
//! ```

pub mod cache;
pub mod config;
pub mod container;
pub mod hierarchy;
pub mod logging;
pub mod resolver;
pub mod store;
pub mod substitution;

// Re-export public API
pub use cache::PathCache;
pub use config::ResolverConfig;
pub use container::ContainerShapes;
pub use hierarchy::PathEdge;
pub use resolver::{ResolvedMember, SubstitutionResolver};
pub use store::{TypeStore, TypeStoreBuilder};
pub use substitution::{Frame, Substitution};

pub use typebind_api::{
    ContainerKind, MemberKind, MemberSignature, ResolveError, ResolveResult, ResolvedType,
    TypeDescriptor, TypeKind, TypeParameterDeclaration, TypeProvider, TypeUse, WildcardBound,
};
