//! scoto_binder: Running functions against a scope as their context.
//!
//! `bind` fixes the context of a single function; `binder` builds a reusable
//! factory so many functions share one context (or one nested child of it).

mod binder;
mod options;

pub use binder::{bind, bind_with, binder, binder_with, Binder, Bound};
pub use options::BindOptions;
