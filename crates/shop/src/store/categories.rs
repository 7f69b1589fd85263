//! The category registry.
//!
//! Category names are unique. Deleting a category never cascades to
//! products tagged with it; those keep their now-dangling category name.

use bodega_core::Category;

use super::StoreError;

/// The authoritative collection of named product groupings.
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    /// All categories in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name (exact match).
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Whether a category with this name exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Register a new category name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CategoryTaken` if the name is already registered.
    pub fn insert(&mut self, name: &str) -> Result<Category, StoreError> {
        if self.contains(name) {
            return Err(StoreError::CategoryTaken(name.to_string()));
        }
        let category = Category::new(name);
        self.categories.push(category.clone());
        Ok(category)
    }

    /// Rename a category, keeping its position in the listing.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CategoryNotFound` if `old` is not registered,
    /// or `StoreError::CategoryTaken` if `new` already names another entry.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<(), StoreError> {
        if old == new {
            return if self.contains(old) {
                Ok(())
            } else {
                Err(StoreError::CategoryNotFound(old.to_string()))
            };
        }
        if self.contains(new) {
            return Err(StoreError::CategoryTaken(new.to_string()));
        }
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.name == old)
            .ok_or_else(|| StoreError::CategoryNotFound(old.to_string()))?;
        category.name = new.to_string();
        Ok(())
    }

    /// Remove a category if present. Idempotent; never touches products.
    pub fn delete(&mut self, name: &str) {
        self.categories.retain(|c| c.name != name);
    }
}
