//! Product-list state owned by the listing view.
//!
//! DESIGN
//! ======
//! Every mutation here runs only after the matching REST call succeeded, so the
//! list always reflects what the server accepted. Identity is the `id` field;
//! uniqueness is the server's job and is not checked locally.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::types::Product;

/// In-memory product collection rendered as one row per item.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductsState {
    pub items: Vec<Product>,
}

impl ProductsState {
    /// Replace the whole list with a fresh server response.
    pub fn replace_all(&mut self, items: Vec<Product>) {
        self.items = items;
    }

    /// Append a product the server just created.
    pub fn apply_created(&mut self, product: Product) {
        self.items.push(product);
    }

    /// Drop the product with `id`. Returns `true` if anything was removed.
    pub fn apply_deleted(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|product| product.id != id);
        self.items.len() != before
    }

    /// Replace the product sharing `product.id`. Returns `true` on a match.
    pub fn apply_updated(&mut self, product: Product) -> bool {
        let mut matched = false;
        for slot in self.items.iter_mut().filter(|slot| slot.id == product.id) {
            slot.clone_from(&product);
            matched = true;
        }
        matched
    }

    /// Apply the outcome of a create call. `Err` leaves the list untouched.
    pub fn apply_create_result(&mut self, result: Result<Product, String>) -> bool {
        match result {
            Ok(created) => {
                self.apply_created(created);
                true
            }
            Err(_) => false,
        }
    }

    /// Apply the outcome of a delete call for `id`. `Err` leaves the list untouched.
    pub fn apply_delete_result(&mut self, id: &str, result: Result<(), String>) -> bool {
        result.is_ok() && self.apply_deleted(id)
    }

    /// Apply the outcome of an update call for `product`. `Err` leaves the list untouched.
    pub fn apply_update_result(&mut self, product: Product, result: Result<(), String>) -> bool {
        result.is_ok() && self.apply_updated(product)
    }

    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.items.iter().find(|product| product.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
