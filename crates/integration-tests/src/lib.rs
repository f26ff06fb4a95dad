//! Integration tests for Clementine.
//!
//! Exercises the storefront crate through its public surface only:
//! hydrated services over real [`FileStore`] directories (simulated page
//! reloads) and [`MemoryStore`] instances (pure state-machine checks).
//!
//! # Test Categories
//!
//! - `cart_wishlist` - cart/wishlist invariants and derived totals
//! - `cart_persistence` - reload reconstruction and liberal reads
//! - `auth_flow` - register/login/logout cycle and profile fields
//! - `catalog_state` - load-phase transitions on fetch failure

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;
use std::sync::{Arc, Once};
use std::time::Duration;

use clementine_storefront::catalog::Product;
use clementine_storefront::config::StorefrontConfig;
use clementine_storefront::state::AppState;
use clementine_storefront::storage::{KeyValueStore, MemoryStore};

static TRACING: Once = Once::new();

/// Install a test subscriber once per process (respects `RUST_LOG`).
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// A unique temporary directory path for a file-backed store.
///
/// The directory is not created; `FileStore::open` does that. Callers
/// remove it when done.
#[must_use]
pub fn temp_storage_dir() -> PathBuf {
    std::env::temp_dir().join(format!("clementine-it-{}", uuid::Uuid::new_v4()))
}

/// A config suitable for tests: zero auth latency, default catalog.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        auth_latency: Duration::ZERO,
        ..StorefrontConfig::default()
    }
}

/// An `AppState` over an ephemeral in-memory store.
#[must_use]
pub fn memory_state() -> AppState {
    init_tracing();
    let storage: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
    AppState::with_storage(test_config(), storage)
}

/// Parse a decimal literal for total assertions.
///
/// # Panics
///
/// Panics if `v` is not a valid decimal, which would be a bug in the test
/// calling this.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn dec(v: &str) -> rust_decimal::Decimal {
    v.parse().unwrap()
}

/// A catalog-shaped product fixture.
///
/// # Panics
///
/// Panics if `price` is not valid JSON for a price, which would be a bug in
/// the test calling this.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn sample_product(id: i64, price: f64) -> Product {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "title": format!("Sample product {id}"),
        "price": price,
        "description": "A product used by integration tests",
        "category": "test fixtures",
        "image": format!("https://example.com/img/{id}.jpg"),
        "rating": { "rate": 4.1, "count": 37 },
    }))
    .unwrap()
}
