//! The binder implementation.
//!
//! Rust functions have no implicit receiver, so a bindable function takes its
//! execution context as an explicit first argument: `Fn(&Scope, A) -> R`.
//! Binding fixes that argument. Handles:
//! - Direct binding to an existing scope
//! - Nested binding to a fresh child created once, at bind time
//! - Deferred rejection of contexts that are not scopes

use crate::options::BindOptions;
use scoto_core::{Result, Scope, ScopeError, Value};
use std::fmt;
use tracing::debug;

/// The execution context resolved when a function or binder is built.
#[derive(Debug, Clone)]
enum Context {
    Scope(Scope),
    /// Not a scope. Kept so the failure surfaces on every call.
    Unbindable(&'static str),
}

impl Context {
    fn resolve(target: Value, options: BindOptions) -> Self {
        let context = match target {
            Value::Scope(scope) if options.nest => Context::Scope(scope.child()),
            Value::Scope(scope) => Context::Scope(scope),
            other => Context::Unbindable(other.type_name()),
        };
        debug!(nest = options.nest, context = context.kind(), "resolved binding context");
        context
    }

    fn scope(&self) -> Result<&Scope> {
        match self {
            Context::Scope(scope) => Ok(scope),
            Context::Unbindable(found) => {
                debug!(found, "rejected call against unbindable context");
                Err(ScopeError::ContextBinding { found: *found })
            }
        }
    }

    fn as_scope(&self) -> Option<&Scope> {
        match self {
            Context::Scope(scope) => Some(scope),
            Context::Unbindable(_) => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Context::Scope(_) => "scope",
            Context::Unbindable(found) => *found,
        }
    }
}

/// A function with its execution context fixed.
pub struct Bound<F> {
    f: F,
    context: Context,
}

impl<F> Bound<F> {
    /// Invoke the function with the bound context.
    ///
    /// Fails with [`ScopeError::ContextBinding`] when the context is not a
    /// scope, without calling the function.
    pub fn call<A, R>(&self, args: A) -> Result<R>
    where
        F: Fn(&Scope, A) -> R,
    {
        let scope = self.context.scope()?;
        Ok((self.f)(scope, args))
    }

    /// Turn the bound function into a plain closure.
    pub fn into_fn<A, R>(self) -> impl Fn(A) -> Result<R>
    where
        F: Fn(&Scope, A) -> R,
    {
        move |args| self.call(args)
    }

    /// The fixed context, if it is a scope.
    pub fn context(&self) -> Option<&Scope> {
        self.context.as_scope()
    }
}

impl<F> fmt::Debug for Bound<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Bound")
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}

/// Bind `f` so that its context is `context`, or a new child of it when
/// `nest` is true.
///
/// The child is created here, once; every call of the returned function
/// shares it.
pub fn bind<F, A, R>(f: F, context: impl Into<Value>, nest: bool) -> Bound<F>
where
    F: Fn(&Scope, A) -> R,
{
    bind_with(f, context, BindOptions { nest })
}

pub fn bind_with<F, A, R>(f: F, context: impl Into<Value>, options: BindOptions) -> Bound<F>
where
    F: Fn(&Scope, A) -> R,
{
    Bound {
        f,
        context: Context::resolve(context.into(), options),
    }
}

/// A reusable factory binding many functions to one shared context.
///
/// With nesting enabled the child is created when the binder is built, so
/// every function bound through the same binder shares that child.
#[derive(Debug, Clone)]
pub struct Binder {
    context: Context,
}

impl Binder {
    pub fn bind<F, A, R>(&self, f: F) -> Bound<F>
    where
        F: Fn(&Scope, A) -> R,
    {
        Bound {
            f,
            context: self.context.clone(),
        }
    }

    /// The shared context, if it is a scope.
    pub fn context(&self) -> Option<&Scope> {
        self.context.as_scope()
    }
}

pub fn binder(context: impl Into<Value>, nest: bool) -> Binder {
    binder_with(context, BindOptions { nest })
}

pub fn binder_with(context: impl Into<Value>, options: BindOptions) -> Binder {
    Binder {
        context: Context::resolve(context.into(), options),
    }
}
