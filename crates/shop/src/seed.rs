//! Startup seeding.
//!
//! Creates the admin credential from configuration and, unless disabled,
//! a small demo catalog so the shop has something to sell on first boot.

use bodega_core::Role;
use rust_decimal::Decimal;
use secrecy::ExposeSecret;

use crate::state::AppState;
use crate::store::StoreError;

/// Demo categories registered at startup.
const DEMO_CATEGORIES: &[&str] = &["Footwear", "Apparel", "Accessories"];

/// Demo products: (name, price in cents, category).
const DEMO_PRODUCTS: &[(&str, i64, &str)] = &[
    ("Running Shoes", 12000, "Footwear"),
    ("Trail Sandals", 4000, "Footwear"),
    ("Canvas Belt", 1599, "Accessories"),
    ("Wool Socks", 950, "Apparel"),
    ("Rain Jacket", 8900, "Apparel"),
];

/// Seed the admin credential and (optionally) the demo catalog.
///
/// # Errors
///
/// Returns a `StoreError` if the admin credential cannot be created.
pub async fn seed(state: &AppState) -> Result<(), StoreError> {
    let config = state.config();

    state.credentials().write().await.register(
        &config.admin_username,
        config.admin_password.expose_secret(),
        Role::Admin,
    )?;
    tracing::info!(username = %config.admin_username, "admin account seeded");

    if config.seed_demo_data {
        seed_demo_catalog(state).await?;
    }

    Ok(())
}

/// Register the demo categories and products.
async fn seed_demo_catalog(state: &AppState) -> Result<(), StoreError> {
    {
        let mut registry = state.categories().write().await;
        for name in DEMO_CATEGORIES {
            registry.insert(name)?;
        }
    }

    let mut catalog = state.catalog().write().await;
    for (name, cents, category) in DEMO_PRODUCTS {
        catalog.insert(
            (*name).to_string(),
            Decimal::new(*cents, 2),
            (*category).to_string(),
        );
    }
    tracing::info!(
        categories = DEMO_CATEGORIES.len(),
        products = DEMO_PRODUCTS.len(),
        "demo catalog seeded"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use secrecy::SecretString;

    use crate::config::ShopConfig;

    use super::*;

    fn test_config(seed_demo_data: bool) -> ShopConfig {
        ShopConfig {
            host: std::net::IpAddr::from([127, 0, 0, 1]),
            port: 0,
            admin_username: "admin".to_string(),
            admin_password: SecretString::from("sandwich-horizon"),
            seed_demo_data,
        }
    }

    #[tokio::test]
    async fn seeds_admin_and_demo_catalog() {
        let state = AppState::new(test_config(true));
        seed(&state).await.expect("seeding succeeds");

        let credentials = state.credentials().read().await;
        assert_eq!(credentials.role("admin"), Some(Role::Admin));
        assert!(credentials.verify("admin", "sandwich-horizon"));

        assert_eq!(state.catalog().read().await.list().len(), DEMO_PRODUCTS.len());
        assert_eq!(
            state.categories().read().await.list().len(),
            DEMO_CATEGORIES.len()
        );
    }

    #[tokio::test]
    async fn demo_catalog_can_be_disabled() {
        let state = AppState::new(test_config(false));
        seed(&state).await.expect("seeding succeeds");

        assert!(state.catalog().read().await.list().is_empty());
        assert!(state.categories().read().await.list().is_empty());
        assert!(state.credentials().read().await.contains("admin"));
    }
}
