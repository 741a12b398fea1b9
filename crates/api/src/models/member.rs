use super::descriptor::TypeParameterDeclaration;
use super::type_use::TypeUse;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Which part of a member a signature describes
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MemberKind {
    Field,
    MethodReturn,
    MethodParameter {
        /// Name of the owning method
        method: String,
        /// Zero-based parameter position
        position: usize,
    },
}

/// The raw generic type of a field, method return or method parameter,
/// tagged with the type that declares it.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct MemberSignature {
    /// Field name, or method name for returns and parameters
    pub name: String,
    pub kind: MemberKind,
    pub declaring_type: String,
    pub type_use: TypeUse,
    /// Method-level type parameters (e.g. `<E> E first()`); empty for fields
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDeclaration>,
}

impl MemberSignature {
    pub fn new(
        name: impl Into<String>,
        kind: MemberKind,
        declaring_type: impl Into<String>,
        type_use: TypeUse,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            declaring_type: declaring_type.into(),
            type_use,
            type_parameters: Vec::new(),
        }
    }

    pub fn field(name: impl Into<String>, declaring_type: impl Into<String>, type_use: TypeUse) -> Self {
        Self::new(name, MemberKind::Field, declaring_type, type_use)
    }

    pub fn method_return(
        name: impl Into<String>,
        declaring_type: impl Into<String>,
        type_use: TypeUse,
    ) -> Self {
        Self::new(name, MemberKind::MethodReturn, declaring_type, type_use)
    }

    pub fn method_parameter(
        method: impl Into<String>,
        position: usize,
        declaring_type: impl Into<String>,
        type_use: TypeUse,
    ) -> Self {
        let method = method.into();
        Self::new(
            method.clone(),
            MemberKind::MethodParameter { method, position },
            declaring_type,
            type_use,
        )
    }

    pub fn with_type_parameter(mut self, parameter: TypeParameterDeclaration) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn type_parameter(&self, name: &str) -> Option<&TypeParameterDeclaration> {
        self.type_parameters.iter().find(|p| p.name == name)
    }
}
