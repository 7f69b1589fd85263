//! Session-bound models.

pub mod cart;
pub mod session;

pub use cart::Cart;
pub use session::{CurrentUser, session_keys};
