//! The product catalog.
//!
//! Products live in insertion order. IDs are assigned as `max(existing) + 1`
//! (or 1 for an empty catalog), so deleting the newest product frees its id
//! for reuse while gaps left by older deletions are never refilled.

use bodega_core::{Product, ProductId};
use rust_decimal::Decimal;

use super::StoreError;

/// The authoritative collection of all sellable products.
#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// All products in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Products whose category matches `category` exactly (case-sensitive).
    ///
    /// A name no longer present in the registry still matches: deleting a
    /// category does not touch products tagged with it.
    #[must_use]
    pub fn list_by_category(&self, category: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Products whose name contains `query`, case-insensitively.
    ///
    /// An empty query matches every product.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        let query = query.to_lowercase();
        self.products
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Create a product and append it to the catalog.
    ///
    /// The new id is one past the current maximum, regardless of gaps left
    /// by earlier deletions.
    pub fn insert(&mut self, name: String, price: Decimal, category: String) -> Product {
        let id = self.next_id();
        let product = Product {
            id,
            name,
            price,
            category,
        };
        self.products.push(product.clone());
        product
    }

    /// Update a product's name, price, and category in place.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ProductNotFound` if no product has the given id.
    pub fn update(
        &mut self,
        id: ProductId,
        name: String,
        price: Decimal,
        category: String,
    ) -> Result<(), StoreError> {
        let product = self
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::ProductNotFound(id))?;
        product.name = name;
        product.price = price;
        product.category = category;
        Ok(())
    }

    /// Remove a product if present. Idempotent.
    pub fn delete(&mut self, id: ProductId) {
        self.products.retain(|p| p.id != id);
    }

    fn next_id(&self) -> ProductId {
        let max = self
            .products
            .iter()
            .map(|p| p.id.as_i32())
            .max()
            .unwrap_or(0);
        ProductId::new(max + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: i64) -> Decimal {
        Decimal::new(cents, 2)
    }

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::default();
        catalog.insert("Running Shoes".to_string(), price(12000), "Footwear".to_string());
        catalog.insert("Trail Sandals".to_string(), price(4000), "Footwear".to_string());
        catalog.insert("Canvas Belt".to_string(), price(1599), "Accessories".to_string());
        catalog
    }

    #[test]
    fn first_insert_gets_id_one() {
        let mut catalog = Catalog::default();
        let product = catalog.insert("Wool Socks".to_string(), price(950), "Apparel".to_string());
        assert_eq!(product.id, ProductId::new(1));
    }

    #[test]
    fn ids_are_max_plus_one_across_deletions() {
        let mut catalog = sample_catalog();
        // Delete an older product; the max id (3) is untouched.
        catalog.delete(ProductId::new(1));
        let product = catalog.insert("Rain Jacket".to_string(), price(8900), "Apparel".to_string());
        assert_eq!(product.id, ProductId::new(4));

        // Deleting the newest product frees its id for reuse.
        catalog.delete(ProductId::new(4));
        let product = catalog.insert("Rain Jacket".to_string(), price(8900), "Apparel".to_string());
        assert_eq!(product.id, ProductId::new(4));
    }

    #[test]
    fn list_preserves_insertion_order() {
        let catalog = sample_catalog();
        let names: Vec<&str> = catalog.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Running Shoes", "Trail Sandals", "Canvas Belt"]);
    }

    #[test]
    fn list_by_category_is_exact_and_case_sensitive() {
        let catalog = sample_catalog();
        assert_eq!(catalog.list_by_category("Footwear").len(), 2);
        assert!(catalog.list_by_category("footwear").is_empty());
        assert!(catalog.list_by_category("Foot").is_empty());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = sample_catalog();
        let results = catalog.search("shoe");
        assert_eq!(results.len(), 1);
        assert_eq!(results.first().map(|p| p.name.as_str()), Some("Running Shoes"));
    }

    #[test]
    fn empty_search_matches_everything() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("").len(), 3);
    }

    #[test]
    fn update_mutates_in_place() {
        let mut catalog = sample_catalog();
        catalog
            .update(
                ProductId::new(2),
                "Trail Boots".to_string(),
                price(6500),
                "Footwear".to_string(),
            )
            .expect("product exists");
        let product = catalog.find(ProductId::new(2)).expect("still present");
        assert_eq!(product.name, "Trail Boots");
        assert_eq!(product.price, price(6500));
    }

    #[test]
    fn update_missing_product_fails() {
        let mut catalog = sample_catalog();
        let err = catalog
            .update(
                ProductId::new(99),
                "Ghost".to_string(),
                price(1),
                "Footwear".to_string(),
            )
            .expect_err("no such product");
        assert_eq!(err, StoreError::ProductNotFound(ProductId::new(99)));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut catalog = sample_catalog();
        catalog.delete(ProductId::new(2));
        catalog.delete(ProductId::new(2));
        assert!(catalog.find(ProductId::new(2)).is_none());
        assert_eq!(catalog.list().len(), 2);
    }
}
