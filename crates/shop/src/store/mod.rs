//! In-memory stores for shared shop state.
//!
//! Each store is a plain synchronous collection; `AppState` wraps them in
//! `RwLock`s. None of them survive a process restart - persistence is out
//! of scope for this demo.

pub mod catalog;
pub mod categories;
pub mod credentials;

pub use catalog::Catalog;
pub use categories::CategoryRegistry;
pub use credentials::CredentialStore;

use bodega_core::ProductId;
use thiserror::Error;

/// Errors surfaced by the in-memory stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Registration attempted with a username that already exists.
    #[error("username {0:?} is already taken")]
    UsernameTaken(String),

    /// No product with the given id.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// No category with the given name.
    #[error("category {0:?} not found")]
    CategoryNotFound(String),

    /// A category with the given name already exists.
    #[error("category {0:?} already exists")]
    CategoryTaken(String),

    /// Password hashing failed while creating a credential.
    #[error("credential hashing failed")]
    CredentialHash,
}
