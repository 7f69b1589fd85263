//! Application state shared across handlers.
//!
//! The shared collections are owned explicitly by `AppState` and guarded
//! with `RwLock`s so concurrent requests cannot race on them.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ShopConfig;
use crate::store::{Catalog, CategoryRegistry, CredentialStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Carts are deliberately NOT stored here:
/// each browser session owns its own cart inside the session store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ShopConfig,
    catalog: RwLock<Catalog>,
    categories: RwLock<CategoryRegistry>,
    credentials: RwLock<CredentialStore>,
}

impl AppState {
    /// Create a new application state with empty stores.
    #[must_use]
    pub fn new(config: ShopConfig) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: RwLock::new(Catalog::default()),
                categories: RwLock::new(CategoryRegistry::default()),
                credentials: RwLock::new(CredentialStore::default()),
            }),
        }
    }

    /// Get a reference to the shop configuration.
    #[must_use]
    pub fn config(&self) -> &ShopConfig {
        &self.inner.config
    }

    /// Get the product catalog lock.
    #[must_use]
    pub fn catalog(&self) -> &RwLock<Catalog> {
        &self.inner.catalog
    }

    /// Get the category registry lock.
    #[must_use]
    pub fn categories(&self) -> &RwLock<CategoryRegistry> {
        &self.inner.categories
    }

    /// Get the credential store lock.
    #[must_use]
    pub fn credentials(&self) -> &RwLock<CredentialStore> {
        &self.inner.credentials
    }
}
