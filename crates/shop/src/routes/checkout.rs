//! Checkout and receipt route handlers.
//!
//! The flow is a small state machine per session:
//! Browsing -> Checkout-Pending -> Receipt-Available -> Browsing.
//!
//! Checkout freezes the cart into a value snapshot, stores it as the
//! session's pending receipt, and clears the cart. The receipt view
//! consumes the pending receipt exactly once; reading again without an
//! intervening checkout fails with `NoReceiptAvailable`. Payment always
//! succeeds in this demo, so there is no rollback path.

use axum::{Json, extract::State};
use bodega_core::Receipt;
use rust_decimal::Decimal;
use serde::Serialize;
use tower_sessions::Session;

use crate::error::{AppError, Result};
use crate::middleware::RequireAuth;
use crate::models::{Cart, session_keys};
use crate::routes::cart::load_cart;
use crate::state::AppState;

/// Confirmation returned by checkout submission.
#[derive(Debug, Serialize)]
pub struct CheckoutSummary {
    /// Number of frozen line items.
    pub item_count: usize,
    /// Total charged (always "successfully" in this demo).
    pub total: Decimal,
}

/// Submit the checkout.
///
/// Requires a logged-in session; an anonymous request is rejected before
/// the cart is touched.
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    RequireAuth(user): RequireAuth,
) -> Result<Json<CheckoutSummary>> {
    let cart = load_cart(&session).await?;

    let receipt = {
        let catalog = state.catalog().read().await;
        Receipt::new(cart.snapshot(&catalog))
    };
    let summary = CheckoutSummary {
        item_count: receipt.items.len(),
        total: receipt.total,
    };

    session
        .insert(session_keys::PENDING_RECEIPT, &receipt)
        .await?;
    session.remove::<Cart>(session_keys::CART).await?;

    tracing::info!(
        username = %user.username,
        items = summary.item_count,
        total = %summary.total,
        "checkout complete"
    );

    Ok(Json(summary))
}

/// Read the pending receipt, consuming it.
///
/// A second read without an intervening checkout fails with
/// `NoReceiptAvailable`.
pub async fn receipt(session: Session, RequireAuth(_user): RequireAuth) -> Result<Json<Receipt>> {
    session
        .remove::<Receipt>(session_keys::PENDING_RECEIPT)
        .await?
        .ok_or(AppError::NoReceiptAvailable)
        .map(Json)
}
