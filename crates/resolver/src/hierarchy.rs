//! Walking the supertype/interface graph.
//!
//! Every walk visits the supertype edge before interface edges, and
//! interfaces in declaration order. That order is also the tie-break when a
//! type is reachable along several paths (diamonds): the first path found
//! wins.

use std::collections::{HashMap, HashSet};
use typebind_api::{ResolveError, ResolveResult, TypeDescriptor, TypeProvider, TypeUse};

/// One hop of an inheritance path: `from` names `to` as a supertype or
/// interface, supplying `arguments` for `to`'s type parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathEdge {
    pub from: String,
    pub to: String,
    /// Empty for raw uses
    pub arguments: Vec<TypeUse>,
}

/// Find the path from `context` up to `target`.
///
/// Returns `Ok(None)` when `target` is not an ancestor. `context == target`
/// yields the empty path.
pub fn find_path(
    types: &dyn TypeProvider,
    context: &str,
    target: &str,
    max_depth: usize,
) -> ResolveResult<Option<Vec<PathEdge>>> {
    let start = types.require(context)?;
    let mut visited = HashSet::from([start.name.clone()]);
    let mut path = Vec::new();

    if search(types, start, target, 0, max_depth, &mut visited, &mut path)? {
        tracing::debug!(
            "path {} -> {}: [{}]",
            context,
            target,
            path.iter().map(|e| e.to.as_str()).collect::<Vec<_>>().join(", ")
        );
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

fn search(
    types: &dyn TypeProvider,
    current: &TypeDescriptor,
    target: &str,
    depth: usize,
    max_depth: usize,
    visited: &mut HashSet<String>,
    path: &mut Vec<PathEdge>,
) -> ResolveResult<bool> {
    if current.name == target {
        return Ok(true);
    }
    if depth >= max_depth {
        return Err(ResolveError::HierarchyTooDeep { limit: max_depth });
    }

    for parent in current.direct_supertypes() {
        let Some(name) = parent.type_name() else {
            tracing::warn!("{} lists non-class supertype {}, skipping", current.name, parent);
            continue;
        };
        // A node that failed once fails again; a visited set also stops cycles.
        if !visited.insert(name.to_string()) {
            continue;
        }
        let next = types.require(name)?;

        path.push(PathEdge {
            from: current.name.clone(),
            to: next.name.clone(),
            arguments: parent.type_arguments().to_vec(),
        });
        if search(types, next, target, depth + 1, max_depth, visited, path)? {
            return Ok(true);
        }
        path.pop();
    }

    Ok(false)
}

/// `context` followed by all of its ancestors, each once, in walk order.
pub fn ancestors<'a>(
    types: &'a dyn TypeProvider,
    context: &str,
    max_depth: usize,
) -> ResolveResult<Vec<&'a TypeDescriptor>> {
    let start = types.require(context)?;
    let mut seen = HashSet::from([start.name.as_str()]);
    let mut out = vec![start];
    collect_ancestors(types, start, 0, max_depth, &mut seen, &mut out)?;
    Ok(out)
}

fn collect_ancestors<'a>(
    types: &'a dyn TypeProvider,
    current: &'a TypeDescriptor,
    depth: usize,
    max_depth: usize,
    seen: &mut HashSet<&'a str>,
    out: &mut Vec<&'a TypeDescriptor>,
) -> ResolveResult<()> {
    if depth >= max_depth {
        return Err(ResolveError::HierarchyTooDeep { limit: max_depth });
    }
    for parent in current.direct_supertypes() {
        let Some(name) = parent.type_name() else {
            continue;
        };
        let next = types.require(name)?;
        if !seen.insert(next.name.as_str()) {
            continue;
        }
        out.push(next);
        collect_ancestors(types, next, depth + 1, max_depth, seen, out)?;
    }
    Ok(())
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    InProgress,
    Done,
}

/// Reject hierarchies in which a type is its own ancestor.
///
/// References to names the provider does not know are ignored here; the
/// store build reports them as missing types.
pub fn validate_acyclic(types: &dyn TypeProvider) -> ResolveResult<()> {
    let mut marks: HashMap<&str, Mark> = HashMap::new();
    let mut stack: Vec<&str> = Vec::new();

    for name in types.type_names() {
        visit(types, name, &mut marks, &mut stack)?;
    }
    Ok(())
}

fn visit<'a>(
    types: &'a dyn TypeProvider,
    name: &'a str,
    marks: &mut HashMap<&'a str, Mark>,
    stack: &mut Vec<&'a str>,
) -> ResolveResult<()> {
    match marks.get(name) {
        Some(Mark::Done) => return Ok(()),
        Some(Mark::InProgress) => {
            let start = stack.iter().position(|n| *n == name).unwrap_or(0);
            let mut cycle: Vec<String> = stack[start..].iter().map(|n| n.to_string()).collect();
            cycle.push(name.to_string());
            return Err(ResolveError::CyclicHierarchy { cycle });
        }
        None => {}
    }

    let Some(descriptor) = types.get_type(name) else {
        return Ok(());
    };

    marks.insert(descriptor.name.as_str(), Mark::InProgress);
    stack.push(descriptor.name.as_str());
    for parent in descriptor.direct_supertypes() {
        if let Some(parent_name) = parent.type_name() {
            visit(types, parent_name, marks, stack)?;
        }
    }
    stack.pop();
    marks.insert(descriptor.name.as_str(), Mark::Done);
    Ok(())
}
