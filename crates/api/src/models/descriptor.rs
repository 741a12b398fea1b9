use super::member::{MemberKind, MemberSignature};
use super::type_use::TypeUse;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Kind of a named type
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Class,
    Interface,
}

/// A generic type parameter declaration, e.g. `R extends ReadModel`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct TypeParameterDeclaration {
    /// Parameter name, unique within the declaring type
    pub name: String,
    /// Declared upper bounds; empty means the top type
    #[serde(default)]
    pub bounds: Vec<TypeUse>,
}

impl TypeParameterDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bounds: Vec::new(),
        }
    }

    pub fn bounded_by(mut self, bound: TypeUse) -> Self {
        self.bounds.push(bound);
        self
    }

    /// The bound used when nothing binds this parameter (erasure picks the first one).
    pub fn primary_bound(&self) -> Option<&TypeUse> {
        self.bounds.first()
    }
}

/// A named class or interface together with its generic shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, JsonSchema)]
pub struct TypeDescriptor {
    /// Fully qualified name, e.g. "com.acme.Order"
    pub name: String,
    pub kind: TypeKind,
    #[serde(default)]
    pub type_parameters: Vec<TypeParameterDeclaration>,
    /// Direct superclass use; `None` for roots and interfaces
    #[serde(default)]
    pub supertype: Option<TypeUse>,
    /// Directly implemented (or, for interfaces, extended) interfaces in declaration order
    #[serde(default)]
    pub interfaces: Vec<TypeUse>,
    /// Fields and method signatures declared directly on this type
    #[serde(default)]
    pub members: Vec<MemberSignature>,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            type_parameters: Vec::new(),
            supertype: None,
            interfaces: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn class(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Class)
    }

    pub fn interface(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Interface)
    }

    pub fn with_type_parameter(mut self, parameter: TypeParameterDeclaration) -> Self {
        self.type_parameters.push(parameter);
        self
    }

    pub fn extends(mut self, supertype: TypeUse) -> Self {
        self.supertype = Some(supertype);
        self
    }

    pub fn implements(mut self, interface: TypeUse) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Attach a member; its declaring type is forced to this descriptor.
    pub fn with_member(mut self, mut member: MemberSignature) -> Self {
        member.declaring_type = self.name.clone();
        self.members.push(member);
        self
    }

    pub fn with_field(self, name: impl Into<String>, type_use: TypeUse) -> Self {
        let declaring = self.name.clone();
        self.with_member(MemberSignature::field(name, declaring, type_use))
    }

    pub fn type_parameter(&self, name: &str) -> Option<&TypeParameterDeclaration> {
        self.type_parameters.iter().find(|p| p.name == name)
    }

    pub fn parameter_index(&self, name: &str) -> Option<usize> {
        self.type_parameters.iter().position(|p| p.name == name)
    }

    /// Supertype first, then interfaces in declaration order.
    pub fn direct_supertypes(&self) -> impl Iterator<Item = &TypeUse> {
        self.supertype.iter().chain(self.interfaces.iter())
    }

    /// Members declared here with the given name.
    pub fn members_named<'a, 'n>(
        &'a self,
        name: &'n str,
    ) -> impl Iterator<Item = &'a MemberSignature> + use<'a, 'n> {
        self.members.iter().filter(move |m| m.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&MemberSignature> {
        self.members_named(name)
            .find(|m| matches!(m.kind, MemberKind::Field))
    }
}
