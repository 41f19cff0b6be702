//! Binding options.

use serde::{Deserialize, Serialize};

/// How a function or binder resolves its context.
///
/// Deserializes from host configuration such as `{ "nest": true }`; missing
/// fields take their defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BindOptions {
    /// Bind to a fresh child of the context instead of the context itself.
    pub nest: bool,
}

impl BindOptions {
    pub fn nested() -> Self {
        Self { nest: true }
    }
}
