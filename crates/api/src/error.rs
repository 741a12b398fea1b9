#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("Type not found: {0}")]
    TypeNotFound(String),
    #[error("Type {target} is not reachable from {context}")]
    UnreachableType { context: String, target: String },
    #[error("Parameter index {index} out of range for {target} (declares {arity})")]
    InvalidParameterIndex {
        target: String,
        index: usize,
        arity: usize,
    },
    #[error("Cyclic type hierarchy: {}", cycle.join(" -> "))]
    CyclicHierarchy { cycle: Vec<String> },
    #[error("Unknown type variable {variable} in {scope}")]
    UnknownTypeVariable { variable: String, scope: String },
    #[error("Duplicate type: {0}")]
    DuplicateType(String),
    #[error("Type hierarchy deeper than {limit} levels")]
    HierarchyTooDeep { limit: usize },
}

pub type ResolveResult<T> = std::result::Result<T, ResolveError>;
