//! Reload reconstruction over a real file-backed store.

#![allow(clippy::unwrap_used)]

use std::fs;
use std::sync::Arc;

use clementine_core::ProductId;
use clementine_integration_tests::{dec, init_tracing, sample_product, temp_storage_dir};
use clementine_storefront::services::CartService;
use clementine_storefront::storage::{FileStore, KeyValueStore, keys};

fn open_store(dir: &std::path::Path) -> Arc<dyn KeyValueStore> {
    Arc::new(FileStore::open(dir).unwrap())
}

#[test]
fn cart_survives_a_simulated_reload() {
    init_tracing();
    let dir = temp_storage_dir();

    {
        let mut cart = CartService::hydrate(open_store(&dir));
        cart.add_to_cart(&sample_product(1, 109.95)).unwrap();
        cart.add_to_cart(&sample_product(1, 109.95)).unwrap();
        cart.add_to_cart(&sample_product(2, 22.3)).unwrap();
    }

    // A fresh store over the same directory is a page reload.
    let cart = CartService::hydrate(open_store(&dir));
    assert_eq!(cart.cart().len(), 2);
    assert_eq!(cart.cart_count(), 3);
    assert_eq!(cart.cart_total(), dec("242.20"));
    assert_eq!(
        cart.cart()
            .iter()
            .find(|l| l.product.id == ProductId::new(1))
            .unwrap()
            .quantity,
        2
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn wishlist_survives_a_simulated_reload() {
    init_tracing();
    let dir = temp_storage_dir();

    {
        let mut cart = CartService::hydrate(open_store(&dir));
        cart.add_to_wishlist(&sample_product(5, 12.0)).unwrap();
    }

    let cart = CartService::hydrate(open_store(&dir));
    assert_eq!(cart.wishlist_count(), 1);
    assert!(cart.is_in_wishlist(ProductId::new(5)));

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn corrupted_snapshot_hydrates_as_empty() {
    init_tracing();
    let dir = temp_storage_dir();

    {
        let store = open_store(&dir);
        store.set(keys::CART, "not json at all").unwrap();
        store.set(keys::WISHLIST, "42").unwrap();
    }

    let cart = CartService::hydrate(open_store(&dir));
    assert_eq!(cart.cart_count(), 0);
    assert_eq!(cart.wishlist_count(), 0);

    // And the store recovers on the next write.
    let mut cart = CartService::hydrate(open_store(&dir));
    cart.add_to_cart(&sample_product(1, 1.0)).unwrap();
    let reloaded = CartService::hydrate(open_store(&dir));
    assert_eq!(reloaded.cart_count(), 1);

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn snapshots_are_full_collections_not_diffs() {
    init_tracing();
    let dir = temp_storage_dir();

    let store = open_store(&dir);
    let mut cart = CartService::hydrate(Arc::clone(&store));
    cart.add_to_cart(&sample_product(1, 2.0)).unwrap();
    cart.add_to_cart(&sample_product(2, 3.0)).unwrap();
    cart.remove_from_cart(ProductId::new(1)).unwrap();

    // The persisted value is the complete current cart.
    let raw = store.get(keys::CART).unwrap().unwrap();
    let snapshot: Vec<serde_json::Value> = serde_json::from_str(&raw).unwrap();
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0]["id"], 2);

    fs::remove_dir_all(&dir).unwrap();
}
