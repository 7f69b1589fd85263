//! Session-related types.
//!
//! Everything scoped to one browser session lives under these keys: the
//! logged-in identity, the cart, and the pending checkout receipt. Sessions
//! are independent for identity and cart but share the one catalog.

use bodega_core::Role;
use serde::{Deserialize, Serialize};

/// Session-stored user identity.
///
/// Minimal data stored in the session to identify the logged-in user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Registered username.
    pub username: String,
    /// Role stamped from the credential entry at login time.
    pub role: Role,
}

/// Session keys for per-session state.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for storing this session's cart.
    pub const CART: &str = "cart";

    /// Key for the checkout receipt awaiting its one-time read.
    pub const PENDING_RECEIPT: &str = "pending_receipt";
}
