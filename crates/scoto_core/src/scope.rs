//! The scope record and its shared handle.
//!
//! A scope holds its own entries plus an optional parent. Lookups consult the
//! own entries first and then delegate up the parent chain; writes and
//! deletes only ever touch the scope they are made on.

use crate::collections::{Key, OwnEntries};
use crate::error::{Result, ScopeError};
use crate::value::Value;
use rustc_hash::FxHashSet;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct ScopeRecord {
    entries: OwnEntries,
    parent: Option<Scope>,
}

impl Drop for ScopeRecord {
    // Unlink uniquely owned ancestors in a loop so deep chains do not
    // recurse once per level.
    fn drop(&mut self) {
        let mut next = self.parent.take();
        while let Some(Scope(rc)) = next {
            next = match Rc::try_unwrap(rc) {
                Ok(cell) => cell.into_inner().parent.take(),
                Err(_) => None,
            };
        }
    }
}

/// A handle to a scope record.
///
/// Cloning the handle shares the record. Two handles are equal only when they
/// refer to the same record.
///
/// Records are reference counted. Storing a scope as a value in itself or in
/// one of its ancestors (`root.set("kid", &kid)` where `kid` descends from
/// `root`) forms a cycle that is never freed.
#[derive(Clone, Default)]
pub struct Scope(Rc<RefCell<ScopeRecord>>);

impl Scope {
    /// Create a new root scope with no entries.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope from a parent link and a set of own entries.
    pub fn from_parts(parent: Option<Scope>, entries: OwnEntries) -> Self {
        Self(Rc::new(RefCell::new(ScopeRecord { entries, parent })))
    }

    /// Create an empty scope that delegates to this one.
    pub fn child(&self) -> Scope {
        Self::from_parts(Some(self.clone()), OwnEntries::new())
    }

    pub fn parent(&self) -> Option<Scope> {
        self.0.borrow().parent.clone()
    }

    pub fn is_root(&self) -> bool {
        self.0.borrow().parent.is_none()
    }

    /// Resolve `key` against this scope and then its ancestors.
    pub fn get(&self, key: &str) -> Option<Value> {
        let mut current = Some(self.clone());
        while let Some(scope) = current.take() {
            let record = scope.0.borrow();
            if let Some(value) = record.entries.get(key) {
                return Some(value.clone());
            }
            current = record.parent.clone();
        }
        None
    }

    pub fn get_own(&self, key: &str) -> Option<Value> {
        self.0.borrow().entries.get(key).cloned()
    }

    /// Whether `key` is visible on this scope, either owned or inherited.
    pub fn has(&self, key: &str) -> bool {
        let mut current = Some(self.clone());
        while let Some(scope) = current.take() {
            let record = scope.0.borrow();
            if record.entries.contains_key(key) {
                return true;
            }
            current = record.parent.clone();
        }
        false
    }

    pub fn has_own(&self, key: &str) -> bool {
        self.0.borrow().entries.contains_key(key)
    }

    /// Create or overwrite an own entry. Ancestors are never written.
    ///
    /// A `Value::Scope` whose chain reaches back to this scope leaks both.
    pub fn set(&self, key: impl Into<Key>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().entries.insert(key, value.into())
    }

    /// Remove an own entry, uncovering any inherited value of the same key.
    pub fn delete(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().entries.remove(key)
    }

    pub fn own_keys(&self) -> Vec<Key> {
        self.0.borrow().entries.keys().cloned().collect()
    }

    /// A shallow copy of the own entries.
    pub fn own_entries(&self) -> OwnEntries {
        self.0.borrow().entries.clone()
    }

    pub fn own_len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    /// Run `f` against the own entries without copying them.
    ///
    /// The record is borrowed for the duration of `f`, so `f` must not write
    /// to this scope.
    pub fn with_own_entries<R>(&self, f: impl FnOnce(&OwnEntries) -> R) -> R {
        f(&self.0.borrow().entries)
    }

    /// Every key visible on this scope, nearest scope first, without duplicates.
    pub fn keys(&self) -> Vec<Key> {
        let mut seen = FxHashSet::default();
        let mut keys = Vec::new();
        let mut current = Some(self.clone());
        while let Some(scope) = current.take() {
            let record = scope.0.borrow();
            for key in record.entries.keys() {
                if seen.insert(key.clone()) {
                    keys.push(key.clone());
                }
            }
            current = record.parent.clone();
        }
        keys
    }

    pub fn ptr_eq(&self, other: &Scope) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Scope {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Scope {}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let record = self.0.borrow();
        f.debug_struct("Scope")
            .field("id", &Rc::as_ptr(&self.0))
            .field("own", &record.entries.keys().collect::<Vec<_>>())
            .field("root", &record.parent.is_none())
            .finish()
    }
}

/// Anything an operation may receive where a scope is expected.
///
/// Implemented for [`Scope`] itself, for [`Value`] (only `Value::Scope` is
/// valid) and for `Option<T>` (where `None` plays the null handle).
pub trait AsScope {
    fn as_scope(&self) -> Result<&Scope>;
}

impl AsScope for Scope {
    fn as_scope(&self) -> Result<&Scope> {
        Ok(self)
    }
}

impl AsScope for Value {
    fn as_scope(&self) -> Result<&Scope> {
        match self {
            Value::Scope(scope) => Ok(scope),
            other => Err(ScopeError::InvalidScope {
                found: other.type_name(),
            }),
        }
    }
}

impl<T: AsScope> AsScope for Option<T> {
    fn as_scope(&self) -> Result<&Scope> {
        match self {
            Some(inner) => inner.as_scope(),
            None => Err(ScopeError::InvalidScope { found: "null" }),
        }
    }
}

impl<T: AsScope + ?Sized> AsScope for &T {
    fn as_scope(&self) -> Result<&Scope> {
        (**self).as_scope()
    }
}
