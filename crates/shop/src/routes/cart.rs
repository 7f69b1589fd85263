//! Cart route handlers.
//!
//! The cart lives in the browser session, so each session owns its own.
//! Viewing and removing need no login; adding does, so anonymous shoppers
//! get sent through login before they can start a cart.

use axum::{Json, extract::State};
use bodega_core::{Product, ProductId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::{OptionalAuth, RequireAuth};
use crate::models::{Cart, session_keys};
use crate::state::AppState;
use crate::store::{Catalog, StoreError};

/// Cart display data.
#[derive(Debug, Serialize)]
pub struct CartView {
    /// Username of the logged-in viewer, if any.
    pub username: Option<String>,
    /// Resolved line items, in cart order.
    pub items: Vec<Product>,
    /// Sum of the items' current prices.
    pub total: Decimal,
}

impl CartView {
    /// Resolve a cart against the catalog's current state.
    fn build(cart: &Cart, catalog: &Catalog, username: Option<String>) -> Self {
        Self {
            username,
            items: cart.resolve(catalog).into_iter().cloned().collect(),
            total: cart.total(catalog),
        }
    }
}

/// Cart mutation form data.
#[derive(Debug, Deserialize)]
pub struct CartItemForm {
    pub product_id: i32,
}

/// Load this session's cart, or an empty one.
pub(crate) async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await
        .map_err(AppError::Session)?
        .unwrap_or_default())
}

/// Write this session's cart back.
pub(crate) async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session
        .insert(session_keys::CART, cart)
        .await
        .map_err(AppError::Session)
}

/// Show the cart with its live total.
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(user): OptionalAuth,
) -> Result<Json<CartView>> {
    let cart = load_cart(&session).await?;
    let catalog = state.catalog().read().await;
    Ok(Json(CartView::build(
        &cart,
        &catalog,
        user.map(|u| u.username),
    )))
}

/// Add a product to the cart.
///
/// Requires a logged-in session. Adding the same product twice yields two
/// line items.
pub async fn add(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
    Json(form): Json<CartItemForm>,
) -> Result<Json<CartView>> {
    let id = ProductId::new(form.product_id);
    let catalog = state.catalog().read().await;
    if catalog.find(id).is_none() {
        return Err(StoreError::ProductNotFound(id).into());
    }

    let mut cart = load_cart(&session).await?;
    cart.add(id);
    save_cart(&session, &cart).await?;

    Ok(Json(CartView::build(&cart, &catalog, Some(user.username))))
}

/// Remove every line with the given product id. Idempotent.
pub async fn remove(
    State(state): State<AppState>,
    session: Session,
    OptionalAuth(user): OptionalAuth,
    Json(form): Json<CartItemForm>,
) -> Result<Json<CartView>> {
    let mut cart = load_cart(&session).await?;
    cart.remove(ProductId::new(form.product_id));
    save_cart(&session, &cart).await?;

    let catalog = state.catalog().read().await;
    Ok(Json(CartView::build(
        &cart,
        &catalog,
        user.map(|u| u.username),
    )))
}
