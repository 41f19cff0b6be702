//! Chain traversal: walking, flattening and shadowing queries.

use scoto_core::{AsScope, OwnEntries, Result, Scope};
use tracing::trace;

/// The scope itself followed by each ancestor, ending at the root.
pub fn walk<S: AsScope + ?Sized>(scope: &S) -> Result<Vec<Scope>> {
    let mut chain = Vec::new();
    let mut current = Some(scope.as_scope()?.clone());
    while let Some(scope) = current {
        current = scope.parent();
        chain.push(scope);
    }
    trace!(depth = chain.len(), "walked scope chain");
    Ok(chain)
}

/// Number of ancestors above `scope`. A root has depth 0.
pub fn depth<S: AsScope + ?Sized>(scope: &S) -> Result<usize> {
    Ok(walk(scope)?.len() - 1)
}

/// Collapse the resolved view of `scope` into a new, independent root.
///
/// Own entries are overlaid oldest ancestor first, so nearer scopes win.
pub fn flatten<S: AsScope + ?Sized>(scope: &S) -> Result<Scope> {
    let chain = walk(scope)?;
    let mut merged = OwnEntries::new();
    for scope in chain.iter().rev() {
        scope.with_own_entries(|entries| merged.overlay(entries));
    }
    trace!(depth = chain.len(), entries = merged.len(), "flattened scope chain");
    Ok(Scope::from_parts(None, merged))
}

/// Every scope in the chain of `scope` that owns `key`, nearest first.
///
/// The first element holds the visible value; the rest are shadowed.
pub fn definitions<S: AsScope + ?Sized>(scope: &S, key: &str) -> Result<Vec<Scope>> {
    Ok(walk(scope)?
        .into_iter()
        .filter(|scope| scope.has_own(key))
        .collect())
}
