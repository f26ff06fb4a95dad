//! Cart and wishlist service.
//!
//! Owns the cart (product + quantity lines) and the wishlist (product set)
//! for the lifetime of the process. Every mutation synchronously persists a
//! full-collection snapshot - never a diff - so a restart reconstructs the
//! exact collections. Hydration applies the liberal-read policy: corrupted
//! snapshots and individually malformed entries are dropped with a warning,
//! never surfaced.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use tracing::warn;

use clementine_core::ProductId;

use crate::catalog::Product;
use crate::models::CartLine;
use crate::storage::{KeyValueStore, KeyValueStoreExt, StorageError, keys};

/// Cart and wishlist state, mirrored into the key-value store.
pub struct CartService {
    storage: Arc<dyn KeyValueStore>,
    cart: Vec<CartLine>,
    wishlist: Vec<Product>,
}

impl CartService {
    /// Construct the service, hydrating both collections from storage.
    ///
    /// Missing or corrupted snapshots fall back to empty collections.
    /// Entry-level validation also runs here: cart lines with quantity 0 and
    /// duplicate product IDs (first occurrence wins) are discarded.
    #[must_use]
    pub fn hydrate(storage: Arc<dyn KeyValueStore>) -> Self {
        let mut cart: Vec<CartLine> = Vec::new();
        for line in read_entries::<CartLine>(&*storage, keys::CART) {
            if line.quantity == 0 {
                warn!(id = %line.product.id, "dropping persisted cart line with zero quantity");
                continue;
            }
            if cart.iter().any(|l| l.product.id == line.product.id) {
                warn!(id = %line.product.id, "dropping duplicate persisted cart line");
                continue;
            }
            cart.push(line);
        }

        let mut wishlist: Vec<Product> = Vec::new();
        for product in read_entries::<Product>(&*storage, keys::WISHLIST) {
            if wishlist.iter().any(|p| p.id == product.id) {
                warn!(id = %product.id, "dropping duplicate persisted wishlist entry");
                continue;
            }
            wishlist.push(product);
        }

        Self {
            storage,
            cart,
            wishlist,
        }
    }

    // =========================================================================
    // Cart Operations
    // =========================================================================

    /// Add one unit of `product` to the cart.
    ///
    /// Inserts a quantity-1 line when absent, otherwise increments the
    /// existing line. Always succeeds business-wise (no stock limits).
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the snapshot fails.
    pub fn add_to_cart(&mut self, product: &Product) -> Result<(), StorageError> {
        match self.cart.iter_mut().find(|l| l.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.cart.push(CartLine {
                product: product.clone(),
                quantity: 1,
            }),
        }
        self.persist_cart()
    }

    /// Remove the line for `id` from the cart.
    ///
    /// A no-op (not an error) when no such line exists.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the snapshot fails.
    pub fn remove_from_cart(&mut self, id: ProductId) -> Result<(), StorageError> {
        self.cart.retain(|l| l.product.id != id);
        self.persist_cart()
    }

    /// Set the quantity of an existing line.
    ///
    /// A quantity of 0 or below removes the line, identically to
    /// [`remove_from_cart`](Self::remove_from_cart). When no line for `id`
    /// exists this is a no-op: the operation only mutates displayed
    /// quantities, it never inserts.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the snapshot fails.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i64) -> Result<(), StorageError> {
        let Ok(quantity) = u32::try_from(quantity) else {
            return self.remove_from_cart(id);
        };
        if quantity == 0 {
            return self.remove_from_cart(id);
        }

        if let Some(line) = self.cart.iter_mut().find(|l| l.product.id == id) {
            line.quantity = quantity;
        }
        self.persist_cart()
    }

    /// Empty the cart (used after simulated checkout). The wishlist is
    /// untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the snapshot fails.
    pub fn clear_cart(&mut self) -> Result<(), StorageError> {
        self.cart.clear();
        self.persist_cart()
    }

    // =========================================================================
    // Wishlist Operations
    // =========================================================================

    /// Add `product` to the wishlist. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the snapshot fails.
    pub fn add_to_wishlist(&mut self, product: &Product) -> Result<(), StorageError> {
        if !self.is_in_wishlist(product.id) {
            self.wishlist.push(product.clone());
        }
        self.persist_wishlist()
    }

    /// Remove the entry for `id` from the wishlist. Idempotent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the snapshot fails.
    pub fn remove_from_wishlist(&mut self, id: ProductId) -> Result<(), StorageError> {
        self.wishlist.retain(|p| p.id != id);
        self.persist_wishlist()
    }

    /// Toggle wishlist membership for `product`: remove when present, add
    /// when absent.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if persisting the snapshot fails.
    pub fn toggle_wishlist(&mut self, product: &Product) -> Result<(), StorageError> {
        if self.is_in_wishlist(product.id) {
            self.remove_from_wishlist(product.id)
        } else {
            self.add_to_wishlist(product)
        }
    }

    // =========================================================================
    // Derived State
    // =========================================================================

    /// Whether the cart holds a line for `id`.
    #[must_use]
    pub fn is_in_cart(&self, id: ProductId) -> bool {
        self.cart.iter().any(|l| l.product.id == id)
    }

    /// Whether the wishlist holds an entry for `id`.
    #[must_use]
    pub fn is_in_wishlist(&self, id: ProductId) -> bool {
        self.wishlist.iter().any(|p| p.id == id)
    }

    /// Total cart value: sum of price times quantity over all lines.
    ///
    /// Recomputed on every call; never cached.
    #[must_use]
    pub fn cart_total(&self) -> Decimal {
        self.cart.iter().map(CartLine::line_total).sum()
    }

    /// Total number of units in the cart: sum of line quantities.
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.cart.iter().map(|l| l.quantity).sum()
    }

    /// Number of wishlist entries.
    #[must_use]
    pub fn wishlist_count(&self) -> usize {
        self.wishlist.len()
    }

    /// The current cart lines.
    #[must_use]
    pub fn cart(&self) -> &[CartLine] {
        &self.cart
    }

    /// The current wishlist entries.
    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    fn persist_cart(&self) -> Result<(), StorageError> {
        self.storage.write_json(keys::CART, &self.cart)
    }

    fn persist_wishlist(&self) -> Result<(), StorageError> {
        self.storage.write_json(keys::WISHLIST, &self.wishlist)
    }
}

/// Read a persisted array entry-by-entry, dropping malformed entries.
fn read_entries<T: DeserializeOwned>(storage: &dyn KeyValueStore, key: &str) -> Vec<T> {
    let raw: Vec<serde_json::Value> = storage.read_json(key).unwrap_or_default();
    raw.into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(key, error = %e, "dropping malformed persisted entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use rust_decimal::Decimal;

    fn dec(v: &str) -> Decimal {
        v.parse().unwrap()
    }

    fn product(id: i64, price: &str) -> Product {
        serde_json::from_value(serde_json::json!({
            "id": id,
            "title": format!("Product {id}"),
            "price": price.parse::<f64>().unwrap(),
            "description": "",
            "category": "test",
            "image": "",
        }))
        .unwrap()
    }

    fn service() -> CartService {
        CartService::hydrate(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_add_to_cart_accumulates_quantity() {
        let mut cart = service();
        let p = product(1, "10");

        cart.add_to_cart(&p).unwrap();
        cart.add_to_cart(&p).unwrap();
        cart.add_to_cart(&p).unwrap();

        assert_eq!(cart.cart().len(), 1);
        assert_eq!(cart.cart()[0].quantity, 3);
        assert_eq!(cart.cart_count(), 3);
    }

    #[test]
    fn test_cart_total() {
        let mut cart = service();
        cart.add_to_cart(&product(1, "10")).unwrap();
        cart.add_to_cart(&product(1, "10")).unwrap();
        cart.add_to_cart(&product(2, "5")).unwrap();

        // [{price: 10, qty: 2}, {price: 5, qty: 1}] => 25
        assert_eq!(cart.cart_total(), dec("25"));
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = service();
        cart.add_to_cart(&product(1, "10")).unwrap();

        cart.update_quantity(ProductId::new(1), 0).unwrap();
        assert!(!cart.is_in_cart(ProductId::new(1)));
    }

    #[test]
    fn test_update_quantity_negative_removes_line() {
        let mut cart = service();
        cart.add_to_cart(&product(1, "10")).unwrap();

        cart.update_quantity(ProductId::new(1), -1).unwrap();
        assert!(!cart.is_in_cart(ProductId::new(1)));
    }

    #[test]
    fn test_update_quantity_sets_existing_line() {
        let mut cart = service();
        cart.add_to_cart(&product(1, "2.50")).unwrap();

        cart.update_quantity(ProductId::new(1), 4).unwrap();
        assert_eq!(cart.cart_count(), 4);
        assert_eq!(cart.cart_total(), dec("10.00"));
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = service();
        cart.add_to_cart(&product(1, "10")).unwrap();

        cart.update_quantity(ProductId::new(99), 5).unwrap();
        assert_eq!(cart.cart().len(), 1);
        assert!(!cart.is_in_cart(ProductId::new(99)));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = service();
        cart.remove_from_cart(ProductId::new(42)).unwrap();
        assert_eq!(cart.cart_count(), 0);
    }

    #[test]
    fn test_wishlist_add_is_idempotent() {
        let mut cart = service();
        let p = product(1, "10");

        cart.add_to_wishlist(&p).unwrap();
        cart.add_to_wishlist(&p).unwrap();
        assert_eq!(cart.wishlist_count(), 1);
    }

    #[test]
    fn test_toggle_wishlist_is_involution() {
        let mut cart = service();
        let p = product(1, "10");

        assert!(!cart.is_in_wishlist(p.id));
        cart.toggle_wishlist(&p).unwrap();
        assert!(cart.is_in_wishlist(p.id));
        cart.toggle_wishlist(&p).unwrap();
        assert!(!cart.is_in_wishlist(p.id));
    }

    #[test]
    fn test_clear_cart_leaves_wishlist() {
        let mut cart = service();
        cart.add_to_cart(&product(1, "10")).unwrap();
        cart.add_to_wishlist(&product(2, "5")).unwrap();

        cart.clear_cart().unwrap();

        assert_eq!(cart.cart_count(), 0);
        assert_eq!(cart.cart_total(), Decimal::ZERO);
        assert_eq!(cart.wishlist_count(), 1);
    }

    #[test]
    fn test_mutations_persist_snapshots() {
        let storage = Arc::new(MemoryStore::new());
        let mut cart = CartService::hydrate(Arc::clone(&storage) as Arc<dyn KeyValueStore>);
        cart.add_to_cart(&product(1, "10")).unwrap();
        cart.add_to_cart(&product(1, "10")).unwrap();

        // A fresh hydration sees the same state (simulated reload).
        let reloaded = CartService::hydrate(storage);
        assert_eq!(reloaded.cart_count(), 2);
        assert_eq!(reloaded.cart_total(), dec("20"));
    }

    #[test]
    fn test_hydrate_corrupted_snapshot_falls_back_to_empty() {
        let storage = Arc::new(MemoryStore::new());
        storage.set(keys::CART, "{definitely not json").unwrap();

        let cart = CartService::hydrate(storage);
        assert_eq!(cart.cart_count(), 0);
    }

    #[test]
    fn test_hydrate_drops_malformed_entries_only() {
        let storage = Arc::new(MemoryStore::new());
        let good = serde_json::json!({
            "id": 1, "title": "Keep", "price": 3, "description": "",
            "category": "test", "image": "", "quantity": 2,
        });
        let snapshot = serde_json::json!([good, {"quantity": "huh"}, 17]);
        storage
            .set(keys::CART, &snapshot.to_string())
            .unwrap();

        let cart = CartService::hydrate(storage);
        assert_eq!(cart.cart().len(), 1);
        assert_eq!(cart.cart_count(), 2);
    }

    #[test]
    fn test_hydrate_drops_zero_quantity_and_duplicates() {
        let storage = Arc::new(MemoryStore::new());
        let entry = |id: i64, quantity: u32| {
            serde_json::json!({
                "id": id, "title": "P", "price": 1, "description": "",
                "category": "test", "image": "", "quantity": quantity,
            })
        };
        let snapshot = serde_json::json!([entry(1, 0), entry(2, 2), entry(2, 9)]);
        storage.set(keys::CART, &snapshot.to_string()).unwrap();

        let cart = CartService::hydrate(storage);
        assert_eq!(cart.cart().len(), 1);
        assert!(!cart.is_in_cart(ProductId::new(1)));
        // First occurrence wins.
        assert_eq!(cart.cart()[0].quantity, 2);
    }
}
