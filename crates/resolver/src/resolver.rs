//! The substitution resolver.
//!
//! # Architecture
//!
//! ```text
//! find_path   context ──supertype/interface edges──▶ target
//!      │
//!      ▼
//! fold        Frame(context) ─advance─▶ Frame(..) ─advance─▶ Frame(target)
//!      │
//!      ▼
//! substitute  closed TypeUse (no variables left)
//!      │
//!      ▼
//! shape       ResolvedType (containers, arrays, wildcards)
//! ```

use crate::cache::PathCache;
use crate::config::ResolverConfig;
use crate::hierarchy::{self, PathEdge};
use crate::substitution::Frame;
use std::sync::Arc;
use typebind_api::{
    ContainerKind, MemberSignature, ResolveError, ResolveResult, ResolvedType, TypeDescriptor,
    TypeProvider, TypeUse,
};

/// A member together with its resolution from some context type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMember<'a> {
    pub signature: &'a MemberSignature,
    pub resolved: ResolvedType,
}

/// Resolves generic signatures against a read-only type hierarchy.
pub struct SubstitutionResolver<'a> {
    types: &'a dyn TypeProvider,
    config: ResolverConfig,
    cache: Option<PathCache>,
}

impl<'a> SubstitutionResolver<'a> {
    pub fn new(types: &'a dyn TypeProvider) -> Self {
        Self::with_config(types, ResolverConfig::default())
    }

    pub fn with_config(types: &'a dyn TypeProvider, config: ResolverConfig) -> Self {
        let cache = config.cache_paths.then(PathCache::new);
        Self {
            types,
            config,
            cache,
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Number of memoized paths; always 0 when caching is off.
    pub fn cached_paths(&self) -> usize {
        self.cache.as_ref().map_or(0, PathCache::len)
    }

    /// The inheritance path `context` → `target` the resolver folds over.
    pub fn find_path(&self, context: &str, target: &str) -> ResolveResult<Option<Arc<[PathEdge]>>> {
        if let Some(path) = self.cache.as_ref().and_then(|c| c.get(context, target)) {
            return Ok(Some(path));
        }

        let found = hierarchy::find_path(self.types, context, target, self.config.max_depth)?;
        Ok(found.map(|path| match &self.cache {
            Some(cache) => cache.insert(context, target, path),
            None => path.into(),
        }))
    }

    /// Whether `target` is `context` or one of its ancestors.
    pub fn is_subtype(&self, context: &str, target: &str) -> ResolveResult<bool> {
        self.types.require(target)?;
        Ok(self.find_path(context, target)?.is_some())
    }

    /// Resolve `target`'s type parameter at `index` as seen from `context`.
    ///
    /// When no argument along the path binds the parameter, its declared
    /// bound is resolved instead.
    pub fn resolve_parameter_at(
        &self,
        context: &str,
        target: &str,
        index: usize,
    ) -> ResolveResult<ResolvedType> {
        self.types.require(context)?;
        let target_ty = self.types.require(target)?;
        let Some(param) = target_ty.type_parameters.get(index) else {
            return Err(ResolveError::InvalidParameterIndex {
                target: target.to_string(),
                index,
                arity: target_ty.type_parameters.len(),
            });
        };

        let frame = self.fold_to(context, target)?;
        let closed = frame.substitute(&TypeUse::Variable(param.name.clone()), &self.config)?;
        tracing::debug!("{} sees {}.{} as {}", context, target, param.name, closed);
        self.shape(&closed)
    }

    /// Resolve every type parameter of `target` as seen from `context`, in declaration order.
    pub fn resolve_parameters(&self, context: &str, target: &str) -> ResolveResult<Vec<ResolvedType>> {
        self.types.require(context)?;
        let target_ty = self.types.require(target)?;
        let frame = self.fold_to(context, target)?;

        target_ty
            .type_parameters
            .iter()
            .map(|param| {
                let closed = frame.substitute(&TypeUse::Variable(param.name.clone()), &self.config)?;
                self.shape(&closed)
            })
            .collect()
    }

    /// Resolve a field type, method return or method parameter observed through `context`.
    ///
    /// The member is resolved relative to its own declaring type, so members
    /// hiding each other by name never share bindings.
    pub fn resolve_member(
        &self,
        context: &str,
        member: &MemberSignature,
    ) -> ResolveResult<ResolvedType> {
        self.types.require(context)?;
        self.types.require(&member.declaring_type)?;

        let frame = self.fold_to(context, &member.declaring_type)?.with_member(member);
        let closed = frame.substitute(&member.type_use, &self.config)?;
        tracing::debug!(
            "{} sees {}#{} as {}",
            context,
            member.declaring_type,
            member.name,
            closed
        );
        self.shape(&closed)
    }

    /// Resolve every member declared on `context` or any of its ancestors.
    ///
    /// Members come in walk order (the context's own first). A member hidden
    /// by a same-named one further down still appears, resolved on its own.
    pub fn resolve_members(&self, context: &str) -> ResolveResult<Vec<ResolvedMember<'a>>> {
        let mut out = Vec::new();
        for declaring in hierarchy::ancestors(self.types, context, self.config.max_depth)? {
            for member in &declaring.members {
                out.push(ResolvedMember {
                    signature: member,
                    resolved: self.resolve_member(context, member)?,
                });
            }
        }
        Ok(out)
    }

    fn fold_to(&self, context: &str, target: &str) -> ResolveResult<Frame<'a>> {
        let path = self
            .find_path(context, target)?
            .ok_or_else(|| ResolveError::UnreachableType {
                context: context.to_string(),
                target: target.to_string(),
            })?;
        self.fold(Frame::root(self.types.require(context)?), &path)
    }

    fn fold(&self, start: Frame<'a>, path: &[PathEdge]) -> ResolveResult<Frame<'a>> {
        let mut frame = start;
        for edge in path {
            let next = self.types.require(&edge.to)?;
            frame = frame.advance(next, &edge.arguments, &self.config)?;
        }
        Ok(frame)
    }

    /// Turn a closed use into its resolved description.
    fn shape(&self, ty: &TypeUse) -> ResolveResult<ResolvedType> {
        self.shape_inner(ty, 0)
    }

    fn shape_inner(&self, ty: &TypeUse, depth: usize) -> ResolveResult<ResolvedType> {
        if depth > self.config.max_depth {
            return Err(ResolveError::HierarchyTooDeep {
                limit: self.config.max_depth,
            });
        }

        match ty {
            TypeUse::Concrete(name) => {
                if self.config.infer_container_subtypes {
                    if let Some(shaped) = self.shape_container_subtype(name, None, depth)? {
                        return Ok(shaped);
                    }
                }
                Ok(ResolvedType::named(name.as_str()))
            }
            TypeUse::Parameterized { name, args } => {
                if let [arg] = args.as_slice() {
                    if let Some(kind) = self.config.containers.kind_of(name) {
                        let element = self.shape_inner(arg, depth + 1)?;
                        return Ok(ResolvedType::container_of(name.as_str(), kind, element));
                    }
                    if self.config.infer_container_subtypes {
                        if let Some(shaped) = self.shape_container_subtype(name, Some(arg), depth)? {
                            return Ok(shaped);
                        }
                    }
                }

                let arguments = args
                    .iter()
                    .map(|arg| self.shape_inner(arg, depth + 1))
                    .collect::<ResolveResult<Vec<_>>>()?;
                Ok(ResolvedType::named(name.as_str()).with_arguments(arguments))
            }
            TypeUse::Wildcard { bound, bound_use } => {
                Ok(self.shape_inner(bound_use, depth + 1)?.bounded(*bound))
            }
            TypeUse::Array(element) => Ok(self.shape_inner(element, depth + 1)?.into_array()),
            TypeUse::Variable(name) => Err(ResolveError::UnknownTypeVariable {
                variable: name.clone(),
                scope: "resolved type".to_string(),
            }),
        }
    }

    /// Classify a loaded type that reaches a container type.
    ///
    /// Covers `Names<E> implements java.util.List<E>` used as `Names<Foo>`
    /// (`arg` is `Foo`) and non-generic `Names implements java.util.List<Foo>`
    /// used as `Names` (`arg` is `None`). Raw uses of generic types are left
    /// alone. The element is the container's parameter as seen from the use.
    fn shape_container_subtype(
        &self,
        name: &str,
        arg: Option<&TypeUse>,
        depth: usize,
    ) -> ResolveResult<Option<ResolvedType>> {
        let Some(descriptor) = self.types.get_type(name) else {
            return Ok(None);
        };
        let seeded = match (arg, descriptor.type_parameters.as_slice()) {
            (Some(arg), [own_param]) => {
                Frame::root(descriptor).bind(own_param.name.as_str(), arg.clone())
            }
            (None, []) => Frame::root(descriptor),
            _ => return Ok(None),
        };

        let mut reachable: Vec<(Arc<[PathEdge]>, &TypeDescriptor, ContainerKind)> = Vec::new();
        for (container, kind) in self.config.containers.names() {
            let Some(container_ty) = self.types.get_type(container) else {
                continue;
            };
            if container_ty.type_parameters.is_empty() {
                continue;
            }
            if let Some(path) = self.find_path(name, container)? {
                reachable.push((path, container_ty, kind));
            }
        }
        let Some(chosen) = self.most_specific(&reachable)? else {
            return Ok(None);
        };
        let (path, container_ty, kind) = &reachable[chosen];

        let frame = self.fold(seeded, path)?;
        let element_param = &container_ty.type_parameters[0];
        let element =
            frame.substitute(&TypeUse::Variable(element_param.name.clone()), &self.config)?;
        tracing::debug!("{} is a {:?} of {}", name, kind, element);

        let element = self.shape_inner(&element, depth + 1)?;
        Ok(Some(ResolvedType::container_of(name, *kind, element)))
    }

    /// Index of the most specific reachable container.
    ///
    /// A container that another reachable container inherits from is never
    /// chosen, so `Set` wins over `Collection` however the paths are shaped.
    /// Remaining ties go to the shortest path, then registration order.
    fn most_specific(
        &self,
        reachable: &[(Arc<[PathEdge]>, &TypeDescriptor, ContainerKind)],
    ) -> ResolveResult<Option<usize>> {
        let mut best: Option<usize> = None;
        for (i, (path, candidate, _)) in reachable.iter().enumerate() {
            let mut inherited = false;
            for (j, (_, other, _)) in reachable.iter().enumerate() {
                if i != j && self.find_path(&other.name, &candidate.name)?.is_some() {
                    inherited = true;
                    break;
                }
            }
            if !inherited && best.is_none_or(|b| path.len() < reachable[b].0.len()) {
                best = Some(i);
            }
        }
        Ok(best)
    }
}
