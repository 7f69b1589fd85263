//! Checkout receipt types.
//!
//! A receipt is a value snapshot of the cart taken at checkout time. It is
//! immune to later catalog mutation: editing or deleting a product after
//! checkout does not change an already-issued receipt.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Product, ProductId};

/// One cart line frozen at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub category: String,
}

impl From<&Product> for ReceiptItem {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price: product.price,
            category: product.category.clone(),
        }
    }
}

/// Value snapshot of a checked-out cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Frozen cart lines, in cart order.
    pub items: Vec<ReceiptItem>,
    /// Sum of the frozen line prices.
    pub total: Decimal,
}

impl Receipt {
    /// Build a receipt from frozen cart lines, computing the total.
    #[must_use]
    pub fn new(items: Vec<ReceiptItem>) -> Self {
        let total = items.iter().map(|item| item.price).sum();
        Self { items, total }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, cents: i64) -> ReceiptItem {
        ReceiptItem {
            id: ProductId::new(id),
            name: format!("Item {id}"),
            price: Decimal::new(cents, 2),
            category: "Misc".to_string(),
        }
    }

    #[test]
    fn total_is_sum_of_line_prices() {
        let receipt = Receipt::new(vec![item(2, 12000), item(4, 4000)]);
        assert_eq!(receipt.total, Decimal::new(16000, 2));
    }

    #[test]
    fn empty_receipt_totals_zero() {
        let receipt = Receipt::new(Vec::new());
        assert_eq!(receipt.total, Decimal::ZERO);
        assert!(receipt.items.is_empty());
    }

    #[test]
    fn item_freezes_product_fields() {
        let product = Product {
            id: ProductId::new(9),
            name: "Wool Socks".to_string(),
            price: Decimal::new(950, 2),
            category: "Apparel".to_string(),
        };
        let frozen = ReceiptItem::from(&product);
        assert_eq!(frozen.id, product.id);
        assert_eq!(frozen.name, product.name);
        assert_eq!(frozen.price, product.price);
        assert_eq!(frozen.category, product.category);
    }
}
