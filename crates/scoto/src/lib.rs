//! scoto: Nestable, isolable scopes built on explicit delegation chains.
//!
//! A [`Scope`] owns a set of entries and may delegate lookups for anything
//! else to a single parent. Children shadow their ancestors without ever
//! writing to them, and the chain can be detached ([`isolate`]), moved
//! ([`rebase`]) or collapsed ([`flatten`]) into new, independent scopes.
//!
//! ```
//! use scoto::{child, create, flatten, Value};
//!
//! let globals = create();
//! globals.set("answer", 42);
//!
//! let local = child(&globals)?;
//! local.set("answer", 7);
//! assert_eq!(globals.get("answer"), Some(Value::from(42)));
//! assert_eq!(local.get("answer"), Some(Value::from(7)));
//!
//! let frozen = flatten(&local)?;
//! globals.set("late", true);
//! assert!(!frozen.has("late"));
//! # Ok::<(), scoto::ScopeError>(())
//! ```
//!
//! Functions run against a scope through the binder:
//!
//! ```
//! use scoto::{binder, create, Scope, Value};
//!
//! let scope = create();
//! let shared = binder(&scope, true);
//! let set = shared.bind(|this: &Scope, n: i32| { this.set("n", n); });
//! let get = shared.bind(|this: &Scope, _: ()| this.get("n"));
//!
//! set.call(3)?;
//! assert_eq!(get.call(())?, Some(Value::from(3)));
//! assert!(!scope.has("n"));
//! # Ok::<(), scoto::ScopeError>(())
//! ```

pub use scoto_binder::{bind, bind_with, binder, binder_with, BindOptions, Binder, Bound};
pub use scoto_chain::{child, create, definitions, depth, flatten, isolate, parent, rebase, walk};
pub use scoto_core::{AsScope, Key, OwnEntries, Result, Scope, ScopeError, Value};
