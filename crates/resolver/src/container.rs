//! Recognized single-element wrapper types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use typebind_api::ContainerKind;

/// Maps container type names to the wrapper kind they represent.
///
/// Only one-argument uses of these names are classified as containers;
/// any other arity is an ordinary parameterized type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContainerShapes {
    shapes: IndexMap<String, ContainerKind>,
}

impl Default for ContainerShapes {
    fn default() -> Self {
        Self::empty()
            .with("java.util.Optional", ContainerKind::Optional)
            .with("java.lang.Iterable", ContainerKind::Collection)
            .with("java.util.Collection", ContainerKind::Collection)
            .with("java.util.List", ContainerKind::Collection)
            .with("java.util.Queue", ContainerKind::Collection)
            .with("java.util.Deque", ContainerKind::Collection)
            .with("java.util.Set", ContainerKind::Set)
            .with("java.util.SortedSet", ContainerKind::Set)
            .with("java.util.NavigableSet", ContainerKind::Set)
            .with("java.util.stream.Stream", ContainerKind::Stream)
    }
}

impl ContainerShapes {
    pub fn empty() -> Self {
        Self {
            shapes: IndexMap::new(),
        }
    }

    /// Register (or re-register) a container name.
    ///
    /// `ContainerKind::None` removes the name instead.
    pub fn with(mut self, name: impl Into<String>, kind: ContainerKind) -> Self {
        let name = name.into();
        if kind == ContainerKind::None {
            self.shapes.shift_remove(&name);
        } else {
            self.shapes.insert(name, kind);
        }
        self
    }

    pub fn kind_of(&self, name: &str) -> Option<ContainerKind> {
        self.shapes.get(name).copied()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = (&str, ContainerKind)> {
        self.shapes.iter().map(|(name, kind)| (name.as_str(), *kind))
    }
}
