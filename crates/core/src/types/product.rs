//! Product types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::ProductId;

/// A sellable product in the catalog.
///
/// The `id` is assigned by the catalog on creation and never changes
/// afterwards; name, price, and category are mutable via admin edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned identifier, immutable after creation.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Unit price in the shop's single display currency.
    pub price: Decimal,
    /// Name of the category the product is tagged with.
    ///
    /// Checked against the category registry when the product is created.
    /// Deleting a category later does not touch products still tagged with
    /// it, so this name may dangle.
    pub category: String,
}
