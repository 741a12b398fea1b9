use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of a wildcard bound (`? extends X` vs `? super X`).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum WildcardBound {
    Upper,
    Lower,
}

impl WildcardBound {
    pub fn keyword(self) -> &'static str {
        match self {
            WildcardBound::Upper => "extends",
            WildcardBound::Lower => "super",
        }
    }
}

/// A reference to a type as it appears in a signature.
///
/// A `TypeUse` is only meaningful relative to the type that declares the
/// signature: `Variable` names one of that type's parameters (or a
/// method-level parameter of the member owning the signature).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "kind", content = "data")]
pub enum TypeUse {
    /// Fully resolved, non-generic type name (e.g., "java.lang.String")
    Concrete(String),

    /// Generic type applied to arguments (e.g., `List<T>`)
    Parameterized { name: String, args: Vec<TypeUse> },

    /// Reference to a type parameter (e.g., `T`)
    Variable(String),

    /// Wildcard type (e.g., `? extends Number`)
    Wildcard {
        bound: WildcardBound,
        bound_use: Box<TypeUse>,
    },

    /// Array of the element use (e.g., `String[]`)
    Array(Box<TypeUse>),
}

impl TypeUse {
    pub fn concrete(name: impl Into<String>) -> Self {
        TypeUse::Concrete(name.into())
    }

    pub fn parameterized(name: impl Into<String>, args: impl IntoIterator<Item = TypeUse>) -> Self {
        TypeUse::Parameterized {
            name: name.into(),
            args: args.into_iter().collect(),
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        TypeUse::Variable(name.into())
    }

    /// `? extends bound`
    pub fn extends(bound: TypeUse) -> Self {
        TypeUse::Wildcard {
            bound: WildcardBound::Upper,
            bound_use: Box::new(bound),
        }
    }

    /// `? super bound`
    pub fn super_of(bound: TypeUse) -> Self {
        TypeUse::Wildcard {
            bound: WildcardBound::Lower,
            bound_use: Box::new(bound),
        }
    }

    pub fn array_of(element: TypeUse) -> Self {
        TypeUse::Array(Box::new(element))
    }

    /// Name of the referenced type for class-like uses.
    ///
    /// Returns `None` for variables, wildcards and arrays, which cannot appear
    /// in a supertype or interface slot.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            TypeUse::Concrete(name) | TypeUse::Parameterized { name, .. } => Some(name),
            _ => None,
        }
    }

    /// Arguments supplied by a class-like use; empty for raw or concrete uses.
    pub fn type_arguments(&self) -> &[TypeUse] {
        match self {
            TypeUse::Parameterized { args, .. } => args,
            _ => &[],
        }
    }

    /// True when no `Variable` occurs anywhere inside this use.
    pub fn is_closed(&self) -> bool {
        match self {
            TypeUse::Concrete(_) => true,
            TypeUse::Variable(_) => false,
            TypeUse::Parameterized { args, .. } => args.iter().all(TypeUse::is_closed),
            TypeUse::Wildcard { bound_use, .. } => bound_use.is_closed(),
            TypeUse::Array(element) => element.is_closed(),
        }
    }
}

impl fmt::Display for TypeUse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeUse::Concrete(name) | TypeUse::Variable(name) => write!(f, "{}", name),
            TypeUse::Parameterized { name, args } => {
                write!(f, "{}<", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")
            }
            TypeUse::Wildcard { bound, bound_use } => {
                write!(f, "? {} {}", bound.keyword(), bound_use)
            }
            TypeUse::Array(element) => write!(f, "{}[]", element),
        }
    }
}

impl From<&str> for TypeUse {
    fn from(s: &str) -> Self {
        TypeUse::Concrete(s.to_string())
    }
}
