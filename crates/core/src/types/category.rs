//! Category types.

use serde::{Deserialize, Serialize};

/// A named product grouping.
///
/// The name acts as the category's identifier; the registry enforces
/// uniqueness on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category name.
    pub name: String,
}

impl Category {
    /// Create a new category with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
