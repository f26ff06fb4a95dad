//! Application state shared across the process.
//!
//! The demo's module-level singletons are re-architected as explicit
//! provider objects: `AppState` is constructed once at startup, is cheaply
//! cloneable via `Arc`, and hands out hydrated services. There is no
//! teardown - state is already on disk after every mutation.

use std::sync::Arc;

use crate::catalog::CatalogClient;
use crate::config::StorefrontConfig;
use crate::error::AppError;
use crate::services::{AuthService, CartService, ProductCatalog, ProfileService};
use crate::storage::{FileStore, KeyValueStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    storage: Arc<dyn KeyValueStore>,
    catalog: CatalogClient,
}

impl AppState {
    /// Create the application state with a durable file-backed store rooted
    /// at the configured storage directory.
    ///
    /// # Errors
    ///
    /// Returns an [`AppError`] if the storage directory cannot be created.
    pub fn new(config: StorefrontConfig) -> Result<Self, AppError> {
        let storage: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(&config.storage_dir)?);
        Ok(Self::with_storage(config, storage))
    }

    /// Create the application state over an explicit store (tests,
    /// ephemeral runs).
    #[must_use]
    pub fn with_storage(config: StorefrontConfig, storage: Arc<dyn KeyValueStore>) -> Self {
        let catalog = CatalogClient::new(&config);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                storage,
                catalog,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a handle to the shared key-value store.
    #[must_use]
    pub fn storage(&self) -> Arc<dyn KeyValueStore> {
        Arc::clone(&self.inner.storage)
    }

    /// Get a reference to the catalog API client.
    #[must_use]
    pub fn catalog(&self) -> &CatalogClient {
        &self.inner.catalog
    }

    /// Build a hydrated cart/wishlist service.
    #[must_use]
    pub fn cart_service(&self) -> CartService {
        CartService::hydrate(self.storage())
    }

    /// Build a hydrated mock auth service.
    #[must_use]
    pub fn auth_service(&self) -> AuthService {
        AuthService::hydrate(self.storage(), self.inner.config.auth_latency)
    }

    /// Build a profile field service.
    #[must_use]
    pub fn profile_service(&self) -> ProfileService {
        ProfileService::new(self.storage())
    }

    /// Build an idle product list provider.
    #[must_use]
    pub fn product_catalog(&self) -> ProductCatalog {
        ProductCatalog::new(self.inner.catalog.clone())
    }
}
