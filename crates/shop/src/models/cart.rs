//! The shopping cart.
//!
//! A cart is an ordered list of product ids stored in the browser session,
//! so every session owns its own cart. Lines are live references into the
//! catalog: totals reflect the product's price at read time, not at add
//! time. Only checkout freezes values, via [`Cart::snapshot`].

use bodega_core::{Product, ProductId, ReceiptItem};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::store::Catalog;

/// Ordered cart line items for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<ProductId>,
}

impl Cart {
    /// Append a line item. Adding the same product twice yields two lines.
    pub fn add(&mut self, id: ProductId) {
        self.items.push(id);
    }

    /// Drop every line with the given product id. Idempotent.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| *item != id);
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Resolve line items against the catalog, in cart order.
    ///
    /// Lines whose product has since been deleted are skipped.
    #[must_use]
    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        self.items
            .iter()
            .filter_map(|id| catalog.find(*id))
            .collect()
    }

    /// Sum of the referenced products' current prices.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Decimal {
        self.resolve(catalog).iter().map(|p| p.price).sum()
    }

    /// Freeze the cart into value copies for a checkout receipt.
    #[must_use]
    pub fn snapshot(&self, catalog: &Catalog) -> Vec<ReceiptItem> {
        self.resolve(catalog)
            .into_iter()
            .map(ReceiptItem::from)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn catalog_with_two_products() -> (Catalog, ProductId, ProductId) {
        let mut catalog = Catalog::default();
        let shoes = catalog.insert("Running Shoes".to_string(), price(12000), "Footwear".to_string());
        let sandals = catalog.insert("Trail Sandals".to_string(), price(4000), "Footwear".to_string());
        (catalog, shoes.id, sandals.id)
    }

    #[test]
    fn total_after_add_add_remove() {
        let (catalog, shoes, sandals) = catalog_with_two_products();
        let mut cart = Cart::default();
        cart.add(shoes);
        cart.add(sandals);
        cart.remove(shoes);
        assert_eq!(cart.total(&catalog), price(4000));
    }

    #[test]
    fn duplicate_adds_yield_two_lines() {
        let (catalog, shoes, _) = catalog_with_two_products();
        let mut cart = Cart::default();
        cart.add(shoes);
        cart.add(shoes);
        assert_eq!(cart.len(), 2);
        assert_eq!(cart.total(&catalog), price(24000));
    }

    #[test]
    fn remove_drops_all_matching_lines() {
        let (catalog, shoes, sandals) = catalog_with_two_products();
        let mut cart = Cart::default();
        cart.add(shoes);
        cart.add(sandals);
        cart.add(shoes);
        cart.remove(shoes);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.total(&catalog), price(4000));
        // Removing again is a no-op.
        cart.remove(shoes);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn total_tracks_live_catalog_prices() {
        let (mut catalog, shoes, _) = catalog_with_two_products();
        let mut cart = Cart::default();
        cart.add(shoes);
        assert_eq!(cart.total(&catalog), price(12000));

        catalog
            .update(shoes, "Running Shoes".to_string(), price(9900), "Footwear".to_string())
            .expect("product exists");
        assert_eq!(cart.total(&catalog), price(9900));
    }

    #[test]
    fn snapshot_is_immune_to_later_mutation() {
        let (mut catalog, shoes, _) = catalog_with_two_products();
        let mut cart = Cart::default();
        cart.add(shoes);

        let snapshot = cart.snapshot(&catalog);
        catalog
            .update(shoes, "Running Shoes".to_string(), price(9900), "Footwear".to_string())
            .expect("product exists");

        assert_eq!(snapshot.first().map(|item| item.price), Some(price(12000)));
    }

    #[test]
    fn deleted_products_drop_out_of_totals() {
        let (mut catalog, shoes, sandals) = catalog_with_two_products();
        let mut cart = Cart::default();
        cart.add(shoes);
        cart.add(sandals);
        catalog.delete(shoes);
        assert_eq!(cart.total(&catalog), price(4000));
        assert_eq!(cart.resolve(&catalog).len(), 1);
    }

    #[test]
    fn clear_empties_the_cart() {
        let (catalog, shoes, sandals) = catalog_with_two_products();
        let mut cart = Cart::default();
        cart.add(shoes);
        cart.add(sandals);
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(&catalog), Decimal::ZERO);
    }
}
