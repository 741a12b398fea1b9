use crate::hierarchy::PathEdge;
use dashmap::DashMap;
use std::sync::Arc;

/// Memoized inheritance paths keyed by `(context, target)`.
///
/// Only found paths are stored. The hierarchy behind a resolver never
/// changes, so entries never go stale.
#[derive(Debug, Default)]
pub struct PathCache {
    paths: DashMap<(String, String), Arc<[PathEdge]>>,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, context: &str, target: &str) -> Option<Arc<[PathEdge]>> {
        self.paths
            .get(&(context.to_string(), target.to_string()))
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn insert(&self, context: &str, target: &str, path: Vec<PathEdge>) -> Arc<[PathEdge]> {
        let path: Arc<[PathEdge]> = path.into();
        self.paths
            .insert((context.to_string(), target.to_string()), Arc::clone(&path));
        path
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
