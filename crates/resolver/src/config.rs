use crate::container::ContainerShapes;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_TYPE: &str = "java.lang.Object";
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for a [`SubstitutionResolver`](crate::SubstitutionResolver).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Type an unbounded parameter erases to
    pub top_type: String,
    /// Guard for hierarchy walks and bound recursion
    pub max_depth: usize,
    pub containers: ContainerShapes,
    /// Classify loaded subtypes of container types: one-parameter generic uses
    /// (`Names<E> implements List<E>` as `Names<Foo>`) and non-generic types
    /// (`Names implements List<Foo>`). Raw uses of generic types are not classified.
    pub infer_container_subtypes: bool,
    /// Memoize `(context, target)` paths across calls
    pub cache_paths: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            top_type: DEFAULT_TOP_TYPE.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            containers: ContainerShapes::default(),
            infer_container_subtypes: true,
            cache_paths: false,
        }
    }
}

impl ResolverConfig {
    pub fn with_top_type(mut self, top_type: impl Into<String>) -> Self {
        self.top_type = top_type.into();
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn with_containers(mut self, containers: ContainerShapes) -> Self {
        self.containers = containers;
        self
    }

    pub fn with_container_subtypes(mut self, enabled: bool) -> Self {
        self.infer_container_subtypes = enabled;
        self
    }

    pub fn with_path_cache(mut self, enabled: bool) -> Self {
        self.cache_paths = enabled;
        self
    }
}
