//! Access roles for credential entries.

use serde::{Deserialize, Serialize};

/// Role attached to a registered credential.
///
/// Replaces a hardcoded admin username check with an explicit attribute
/// queried through [`Role::can_manage_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular shopper: browse, cart, checkout.
    #[default]
    Customer,
    /// May additionally mutate the catalog and category registry.
    Admin,
}

impl Role {
    /// Whether this role may create, edit, or delete products and categories.
    #[must_use]
    pub const fn can_manage_catalog(self) -> bool {
        matches!(self, Self::Admin)
    }
}
