//! Creating, linking and re-linking scopes.

use scoto_core::{AsScope, Result, Scope};
use tracing::trace;

/// Create a new root scope with no entries.
pub fn create() -> Scope {
    Scope::new()
}

/// Create an empty scope whose parent is `scope`.
pub fn child<S: AsScope + ?Sized>(scope: &S) -> Result<Scope> {
    let scope = scope.as_scope()?;
    trace!(parent_entries = scope.own_len(), "created child scope");
    Ok(scope.child())
}

/// The parent of `scope`, or `None` for a root.
pub fn parent<S: AsScope + ?Sized>(scope: &S) -> Result<Option<Scope>> {
    Ok(scope.as_scope()?.parent())
}

/// Detach `scope` from its ancestry, keeping only its own entries.
///
/// Keys visible purely through inheritance are dropped. The result is a new
/// root with independent storage.
pub fn isolate<S: AsScope + ?Sized>(scope: &S) -> Result<Scope> {
    let entries = scope.as_scope()?.own_entries();
    trace!(entries = entries.len(), "isolated scope");
    Ok(Scope::from_parts(None, entries))
}

/// Copy the own entries of `scope` onto a new scope parented to `new_parent`.
///
/// The result is always a new scope, even when `new_parent` is the current
/// parent of `scope`.
pub fn rebase<S, P>(scope: &S, new_parent: &P) -> Result<Scope>
where
    S: AsScope + ?Sized,
    P: AsScope + ?Sized,
{
    let scope = scope.as_scope()?;
    let new_parent = new_parent.as_scope()?;
    let entries = scope.own_entries();
    trace!(entries = entries.len(), "rebased scope");
    Ok(Scope::from_parts(Some(new_parent.clone()), entries))
}
