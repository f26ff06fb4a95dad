//! Product list provider.
//!
//! The view-facing wrapper over [`CatalogClient`]: owns the loaded product
//! list, the load phase, and a user-facing error message. Failures never
//! propagate out of [`refresh`](ProductCatalog::refresh) - they become
//! state.

use tracing::warn;

use clementine_core::LoadPhase;

use crate::catalog::{CatalogClient, Product};

/// User-facing message shown when the catalog cannot be fetched.
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch products. Please try again later.";

/// Product list plus fetch state.
pub struct ProductCatalog {
    client: CatalogClient,
    products: Vec<Product>,
    phase: LoadPhase,
    error: Option<String>,
}

impl ProductCatalog {
    /// Create an idle provider with an empty product list.
    #[must_use]
    pub const fn new(client: CatalogClient) -> Self {
        Self {
            client,
            products: Vec::new(),
            phase: LoadPhase::Idle,
            error: None,
        }
    }

    /// Fetch the full catalog, replacing the owned list.
    ///
    /// Resets the phase to [`LoadPhase::Loading`] on entry. On failure the
    /// list is emptied, the phase becomes [`LoadPhase::Failed`], and
    /// [`error`](Self::error) carries [`FETCH_FAILED_MESSAGE`]. There is no
    /// automatic retry; callers re-invoke to reload.
    pub async fn refresh(&mut self) {
        self.phase = LoadPhase::Loading;
        self.error = None;

        match self.client.list_products().await {
            Ok(products) => {
                self.products = products;
                self.phase = LoadPhase::Ready;
            }
            Err(e) => {
                warn!(error = %e, "catalog fetch failed");
                self.products.clear();
                self.error = Some(FETCH_FAILED_MESSAGE.to_string());
                self.phase = LoadPhase::Failed;
            }
        }
    }

    /// The currently loaded products (empty before the first successful
    /// fetch and after a failed one).
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The current load phase.
    #[must_use]
    pub const fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// The user-facing error message from the most recent failed fetch.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;

    #[test]
    fn test_starts_idle_and_empty() {
        let client = CatalogClient::new(&StorefrontConfig::default());
        let catalog = ProductCatalog::new(client);

        assert_eq!(catalog.phase(), LoadPhase::Idle);
        assert!(catalog.products().is_empty());
        assert_eq!(catalog.error(), None);
    }
}
