//! Error types shared by every scoto crate.

use miette::Diagnostic;
use thiserror::Error;

/// Errors raised by chain operations and bound functions.
///
/// `found` always carries [`Value::type_name`](crate::Value::type_name) of
/// the offending input.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum ScopeError {
    /// An operation received a non-scope value where a scope was required.
    #[error("expected a scope, found {found}")]
    #[diagnostic(
        code(scoto::invalid_scope),
        help("pass a scope created by `create`, `child`, `isolate`, `rebase` or `flatten`")
    )]
    InvalidScope { found: &'static str },

    /// A bound function was invoked against a context that is not a scope.
    #[error("cannot use {found} as an execution context")]
    #[diagnostic(
        code(scoto::context_binding),
        help("bind the function to a scope instead of a primitive value")
    )]
    ContextBinding { found: &'static str },
}

pub type Result<T> = std::result::Result<T, ScopeError>;
