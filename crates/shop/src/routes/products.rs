//! Public catalog route handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use bodega_core::{Category, Product, ProductId};
use serde::Deserialize;

use crate::error::Result;
use crate::state::AppState;
use crate::store::StoreError;

/// Query parameters for the product listing.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    /// Restrict the listing to one category (exact, case-sensitive match).
    pub category: Option<String>,
}

/// Query parameters for product search.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    /// Case-insensitive substring matched against product names.
    /// Empty (or absent) matches every product.
    #[serde(default)]
    pub q: String,
}

/// List products, optionally filtered by category.
///
/// Filtering never consults the registry: products tagged with a deleted
/// category name are still returned.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Product>> {
    let catalog = state.catalog().read().await;
    let products = match query.category {
        Some(category) => catalog.list_by_category(&category),
        None => catalog.list().to_vec(),
    };
    Json(products)
}

/// Look up one product by id.
pub async fn show(State(state): State<AppState>, Path(id): Path<i32>) -> Result<Json<Product>> {
    let id = ProductId::new(id);
    let catalog = state.catalog().read().await;
    let product = catalog
        .find(id)
        .cloned()
        .ok_or(StoreError::ProductNotFound(id))?;
    Ok(Json(product))
}

/// Search products by name.
pub async fn search(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Product>> {
    let catalog = state.catalog().read().await;
    Json(catalog.search(&query.q))
}

/// List registered categories in insertion order.
pub async fn categories(State(state): State<AppState>) -> Json<Vec<Category>> {
    let registry = state.categories().read().await;
    Json(registry.list().to_vec())
}
