//! scoto_core: The data model for delegation-chain scopes.
//!
//! Provides the shared [`Scope`] handle, the dynamic [`Value`] type, own-entry
//! storage and the error type used by the chain and binder crates.

pub mod collections;
pub mod error;
pub mod scope;
pub mod value;

// Re-export commonly used types
pub use collections::{Key, OwnEntries};
pub use error::{Result, ScopeError};
pub use scope::{AsScope, Scope};
pub use value::Value;
