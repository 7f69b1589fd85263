//! HTTP route handlers for the shop.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                    - Health check
//!
//! # Catalog (public)
//! GET  /products                  - Product listing (?category= to filter)
//! GET  /products/{id}             - Product detail
//! GET  /search?q=                 - Name search (case-insensitive substring)
//! GET  /categories                - Category listing
//!
//! # Cart (session-bound)
//! GET  /cart                      - Cart items + live total
//! POST /cart/add                  - Add line item (requires login)
//! POST /cart/remove               - Remove all lines for a product id
//!
//! # Checkout (requires login)
//! POST /checkout                  - Freeze cart, clear it, set pending receipt
//! GET  /checkout/receipt          - Consume the pending receipt (one-shot)
//!
//! # Auth
//! POST /auth/register             - Register (role: customer)
//! POST /auth/login                - Login, stamps session identity
//! POST /auth/logout               - Logout
//!
//! # Admin (requires admin role)
//! GET    /admin/products          - List products
//! POST   /admin/products          - Create product
//! PUT    /admin/products/{id}     - Update product
//! DELETE /admin/products/{id}     - Delete product (idempotent)
//! POST   /admin/categories        - Create category
//! PUT    /admin/categories/{name} - Rename category
//! DELETE /admin/categories/{name} - Delete category (idempotent, no cascade)
//! ```
//!
//! Bodies are JSON; prices travel as decimal strings (e.g. `"120.00"`).

pub mod admin;
pub mod auth;
pub mod cart;
pub mod checkout;
pub mod products;

use axum::{
    Router,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::middleware;
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create the admin routes router.
pub fn admin_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(admin::list_products).post(admin::create_product),
        )
        .route(
            "/products/{id}",
            put(admin::update_product).delete(admin::delete_product),
        )
        .route("/categories", post(admin::create_category))
        .route(
            "/categories/{name}",
            put(admin::rename_category).delete(admin::delete_category),
        )
}

/// Create all routes for the shop.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog
        .route("/products", get(products::index))
        .route("/products/{id}", get(products::show))
        .route("/search", get(products::search))
        .route("/categories", get(products::categories))
        // Cart
        .nest("/cart", cart_routes())
        // Checkout
        .route("/checkout", post(checkout::submit))
        .route("/checkout/receipt", get(checkout::receipt))
        // Auth
        .nest("/auth", auth_routes())
        // Admin
        .nest("/admin", admin_routes())
}

/// Build the full application: routes, session layer, tracing, state.
///
/// Used by both `main` and the end-to-end tests, so tests exercise the
/// same middleware stack the server runs.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .layer(middleware::create_session_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
