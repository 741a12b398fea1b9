//! Type-parameter substitution.
//!
//! A [`Frame`] is one type on an inheritance path together with the
//! bindings for its own parameters. Substituting a use inside a frame yields
//! a closed use: every variable is replaced by its binding or, when nothing
//! binds it, by its declared bound.

use crate::config::ResolverConfig;
use std::collections::HashMap;
use typebind_api::{
    MemberSignature, ResolveError, ResolveResult, TypeDescriptor, TypeParameterDeclaration,
    TypeUse,
};

/// A map from a type's own parameter names to closed type uses.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Substitution {
    map: HashMap<String, TypeUse>,
}

impl Substitution {
    /// Create a new empty substitution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a mapping.
    pub fn insert(&mut self, var: String, ty: TypeUse) {
        self.map.insert(var, ty);
    }

    pub fn get(&self, var: &str) -> Option<&TypeUse> {
        self.map.get(var)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    Member,
    Type,
}

/// A type on the path plus the bindings supplied for its parameters.
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    owner: &'a TypeDescriptor,
    bindings: Substitution,
    member: Option<&'a MemberSignature>,
}

impl<'a> Frame<'a> {
    /// The starting frame of a fold: nothing is bound yet.
    pub fn root(owner: &'a TypeDescriptor) -> Self {
        Self {
            owner,
            bindings: Substitution::new(),
            member: None,
        }
    }

    pub fn owner(&self) -> &'a TypeDescriptor {
        self.owner
    }

    pub fn bindings(&self) -> &Substitution {
        &self.bindings
    }

    /// Bind one of the owner's parameters to an already closed use.
    pub fn bind(mut self, var: impl Into<String>, ty: TypeUse) -> Self {
        self.bindings.insert(var.into(), ty);
        self
    }

    /// Make method-level type parameters of `member` visible.
    pub fn with_member(mut self, member: &'a MemberSignature) -> Self {
        self.member = Some(member);
        self
    }

    /// Step to `next`, which this frame's owner names with `arguments`.
    ///
    /// Each argument is substituted here, in the current frame, before it is
    /// installed as the binding of `next`'s matching parameter. Raw uses
    /// (no arguments) leave `next` unbound.
    pub fn advance(
        &self,
        next: &'a TypeDescriptor,
        arguments: &[TypeUse],
        config: &ResolverConfig,
    ) -> ResolveResult<Frame<'a>> {
        if !arguments.is_empty() && arguments.len() != next.type_parameters.len() {
            tracing::warn!(
                "{} supplies {} type arguments to {}, which declares {}",
                self.owner.name,
                arguments.len(),
                next.name,
                next.type_parameters.len()
            );
        }

        let mut bindings = Substitution::new();
        for (param, arg) in next.type_parameters.iter().zip(arguments) {
            let closed = self.substitute(arg, config)?;
            tracing::trace!("{}.{} := {}", next.name, param.name, closed);
            bindings.insert(param.name.clone(), closed);
        }

        Ok(Frame {
            owner: next,
            bindings,
            member: None,
        })
    }

    /// Replace every variable in `ty`.
    pub fn substitute(&self, ty: &TypeUse, config: &ResolverConfig) -> ResolveResult<TypeUse> {
        let mut walk = Walk {
            config,
            in_progress: Vec::new(),
        };
        self.substitute_inner(ty, self.member, &mut walk, 0)
    }

    /// `member` is the method whose type parameters are in scope; bounds of
    /// the owner's own parameters are substituted without it.
    fn substitute_inner(
        &self,
        ty: &TypeUse,
        member: Option<&MemberSignature>,
        walk: &mut Walk<'_>,
        depth: usize,
    ) -> ResolveResult<TypeUse> {
        if depth > walk.config.max_depth {
            return Err(ResolveError::HierarchyTooDeep {
                limit: walk.config.max_depth,
            });
        }

        match ty {
            TypeUse::Concrete(_) => Ok(ty.clone()),
            TypeUse::Variable(name) => self.substitute_variable(name, member, walk, depth),
            TypeUse::Parameterized { name, args } => Ok(TypeUse::Parameterized {
                name: name.clone(),
                args: args
                    .iter()
                    .map(|arg| self.substitute_inner(arg, member, walk, depth + 1))
                    .collect::<ResolveResult<Vec<_>>>()?,
            }),
            TypeUse::Wildcard { bound, bound_use } => Ok(TypeUse::Wildcard {
                bound: *bound,
                bound_use: Box::new(self.substitute_inner(bound_use, member, walk, depth + 1)?),
            }),
            TypeUse::Array(element) => Ok(TypeUse::Array(Box::new(
                self.substitute_inner(element, member, walk, depth + 1)?,
            ))),
        }
    }

    fn substitute_variable(
        &self,
        name: &str,
        member: Option<&MemberSignature>,
        walk: &mut Walk<'_>,
        depth: usize,
    ) -> ResolveResult<TypeUse> {
        // Method-level parameters shadow the owner's; no call site binds them.
        if let Some(param) = member.and_then(|m| m.type_parameter(name)) {
            return self.substitute_bound(Scope::Member, param, member, walk, depth);
        }
        if let Some(bound) = self.bindings.get(name) {
            return Ok(bound.clone());
        }
        if let Some(param) = self.owner.type_parameter(name) {
            tracing::trace!("{}.{} unbound, using its bound", self.owner.name, name);
            return self.substitute_bound(Scope::Type, param, None, walk, depth);
        }

        let scope = match member {
            Some(member) => format!("{}#{}", self.owner.name, member.name),
            None => self.owner.name.clone(),
        };
        Err(ResolveError::UnknownTypeVariable {
            variable: name.to_string(),
            scope,
        })
    }

    fn substitute_bound(
        &self,
        scope: Scope,
        param: &TypeParameterDeclaration,
        member: Option<&MemberSignature>,
        walk: &mut Walk<'_>,
        depth: usize,
    ) -> ResolveResult<TypeUse> {
        let key = (scope, param.name.clone());
        // Re-entry means a self-referencing bound such as `T extends Comparable<T>`.
        if walk.in_progress.contains(&key) {
            return Ok(TypeUse::Concrete(walk.config.top_type.clone()));
        }
        let Some(bound) = param.primary_bound() else {
            return Ok(TypeUse::Concrete(walk.config.top_type.clone()));
        };

        walk.in_progress.push(key);
        let result = self.substitute_inner(bound, member, walk, depth + 1);
        walk.in_progress.pop();
        result
    }
}

/// State of one `substitute` call.
struct Walk<'c> {
    config: &'c ResolverConfig,
    in_progress: Vec<(Scope, String)>,
}
