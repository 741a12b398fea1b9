use super::type_use::WildcardBound;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Single-element wrapper shapes recognized around an element type
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    #[default]
    None,
    Optional,
    Collection,
    Set,
    Stream,
}

impl ContainerKind {
    /// Sets are collections too.
    pub fn is_collection(self) -> bool {
        matches!(self, ContainerKind::Collection | ContainerKind::Set)
    }
}

/// Fully resolved description of a type as seen from a context type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct ResolvedType {
    /// Base type name; the container's own name when `container` is set
    pub name: String,
    #[serde(default)]
    pub container: ContainerKind,
    /// Element type of a container
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<Box<ResolvedType>>,
    /// Number of array dimensions wrapped around this type
    #[serde(default)]
    pub array_dimensions: usize,
    /// Set when the resolution ended at a wildcard-bounded type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wildcard: Option<WildcardBound>,
    /// Resolved arguments of a non-container parameterized type
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub arguments: Vec<ResolvedType>,
}

impl ResolvedType {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            container: ContainerKind::None,
            element: None,
            array_dimensions: 0,
            wildcard: None,
            arguments: Vec::new(),
        }
    }

    pub fn container_of(name: impl Into<String>, kind: ContainerKind, element: ResolvedType) -> Self {
        Self {
            container: kind,
            element: Some(Box::new(element)),
            ..Self::named(name)
        }
    }

    pub fn with_arguments(mut self, arguments: Vec<ResolvedType>) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn into_array(mut self) -> Self {
        self.array_dimensions += 1;
        self
    }

    pub fn bounded(mut self, bound: WildcardBound) -> Self {
        self.wildcard = Some(bound);
        self
    }

    pub fn is_array(&self) -> bool {
        self.array_dimensions > 0
    }

    pub fn is_container(&self) -> bool {
        self.container != ContainerKind::None
    }

    pub fn is_collection(&self) -> bool {
        self.container.is_collection()
    }

    /// True when the type is exactly `name`: no wrapping, no arrays, no wildcard.
    pub fn is_exactly(&self, name: &str) -> bool {
        self.name == name
            && !self.is_container()
            && !self.is_array()
            && self.wildcard.is_none()
            && self.arguments.is_empty()
    }

    pub fn element(&self) -> Option<&ResolvedType> {
        self.element.as_deref()
    }

    /// The innermost non-container type (the element of nested containers).
    pub fn innermost(&self) -> &ResolvedType {
        match &self.element {
            Some(element) => element.innermost(),
            None => self,
        }
    }
}

impl fmt::Display for ResolvedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(bound) = self.wildcard {
            write!(f, "? {} ", bound.keyword())?;
        }
        write!(f, "{}", self.name)?;
        if let Some(element) = &self.element {
            write!(f, "<{}>", element)?;
        } else if !self.arguments.is_empty() {
            write!(f, "<")?;
            for (i, arg) in self.arguments.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", arg)?;
            }
            write!(f, ">")?;
        }
        for _ in 0..self.array_dimensions {
            write!(f, "[]")?;
        }
        Ok(())
    }
}
