//! Admin route handlers: catalog and category registry CRUD.
//!
//! Every handler takes `RequireAdmin`, which rejects anonymous sessions
//! with 401 and non-admin roles with 403.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use bodega_core::{Category, Product, ProductId};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::middleware::RequireAdmin;
use crate::state::AppState;
use crate::store::StoreError;

/// Product create/update form data.
#[derive(Debug, Deserialize)]
pub struct ProductForm {
    pub name: String,
    pub price: Decimal,
    pub category: String,
}

/// Category create form data.
#[derive(Debug, Deserialize)]
pub struct CategoryForm {
    pub name: String,
}

/// Category rename form data.
#[derive(Debug, Deserialize)]
pub struct RenameCategoryForm {
    /// The new name for the category addressed by the path.
    pub name: String,
}

/// List all products (admin view, same ordering as the public listing).
pub async fn list_products(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
) -> Json<Vec<Product>> {
    let catalog = state.catalog().read().await;
    Json(catalog.list().to_vec())
}

/// Create a product.
///
/// The category must be registered at creation time; later category
/// deletion does not cascade back to the product.
pub async fn create_product(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<Product>)> {
    // Hold the registry guard across the insert so a concurrent category
    // delete cannot slip between the check and the write.
    let registry = state.categories().read().await;
    if !registry.contains(&form.category) {
        return Err(StoreError::CategoryNotFound(form.category).into());
    }

    let product = state
        .catalog()
        .write()
        .await
        .insert(form.name, form.price, form.category);

    tracing::info!(id = %product.id, name = %product.name, "product created");
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product's name, price, and category in place.
pub async fn update_product(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<i32>,
    Json(form): Json<ProductForm>,
) -> Result<StatusCode> {
    // Registry guard held across the write, as in create_product.
    let registry = state.categories().read().await;
    if !registry.contains(&form.category) {
        return Err(StoreError::CategoryNotFound(form.category).into());
    }

    state
        .catalog()
        .write()
        .await
        .update(ProductId::new(id), form.name, form.price, form.category)?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete a product. Idempotent: deleting an absent id succeeds.
pub async fn delete_product(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(id): Path<i32>,
) -> StatusCode {
    state.catalog().write().await.delete(ProductId::new(id));
    StatusCode::NO_CONTENT
}

/// Register a category name.
pub async fn create_category(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Json(form): Json<CategoryForm>,
) -> Result<(StatusCode, Json<Category>)> {
    let category = state.categories().write().await.insert(&form.name)?;
    tracing::info!(name = %category.name, "category created");
    Ok((StatusCode::CREATED, Json(category)))
}

/// Rename a category.
///
/// Products tagged with the old name keep it; the registry does not track
/// them back.
pub async fn rename_category(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(name): Path<String>,
    Json(form): Json<RenameCategoryForm>,
) -> Result<StatusCode> {
    state.categories().write().await.rename(&name, &form.name)?;
    Ok(StatusCode::NO_CONTENT)
}

/// Delete a category. Idempotent; never cascades to products.
pub async fn delete_category(
    State(state): State<AppState>,
    RequireAdmin(_user): RequireAdmin,
    Path(name): Path<String>,
) -> StatusCode {
    state.categories().write().await.delete(&name);
    StatusCode::NO_CONTENT
}
