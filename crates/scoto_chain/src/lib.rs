//! scoto_chain: Structural operations on scope chains.
//!
//! Creation and linking (`create`, `child`, `parent`), traversal (`walk`,
//! `depth`, `definitions`) and the three chain-rewriting transforms
//! (`isolate`, `rebase`, `flatten`). Every transform returns a brand-new scope.

mod ops;
mod walk;

pub use ops::{child, create, isolate, parent, rebase};
pub use walk::{definitions, depth, flatten, walk};
