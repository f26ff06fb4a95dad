//! Remote product catalog client.
//!
//! # Architecture
//!
//! - Plain REST JSON over `reqwest` against a fakestoreapi-style catalog
//! - The catalog is the source of truth - no local sync, direct API calls
//! - In-memory caching via `moka` for API responses (TTL from config)
//! - No automatic retry and no request timeout: a hung request leaves the
//!   caller's loading state set
//!
//! # Endpoints
//!
//! - `GET /products` - full catalog
//! - `GET /products?limit=N` - featured subset
//! - `GET /products/{id}` - single product; an empty or `null` body means
//!   the product does not exist
//! - `GET /products/categories` - category names

mod cache;
pub mod types;

pub use types::Product;

use std::sync::Arc;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument};

use clementine_core::ProductId;

use crate::config::StorefrontConfig;
use cache::CacheValue;

/// Maximum number of cached catalog responses.
const CACHE_CAPACITY: u64 = 1000;

/// Errors that can occur when talking to the catalog API.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP transport failure (connection, DNS, protocol).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered with a non-success status.
    #[error("catalog returned HTTP {0}")]
    Status(reqwest::StatusCode),

    /// The response body could not be decoded.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The catalog has no product with this ID.
    #[error("product {0} not found")]
    NotFound(ProductId),
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the remote product catalog.
///
/// Cheaply cloneable; all clones share one HTTP client and one response
/// cache.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<String, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            inner: Arc::new(CatalogClientInner {
                client: reqwest::Client::new(),
                base_url: config.catalog_url.as_str().trim_end_matches('/').to_string(),
                cache,
            }),
        }
    }

    /// Fetch a path relative to the catalog base URL and return the raw
    /// body.
    async fn fetch(&self, path: &str, limit: Option<u32>) -> Result<String, CatalogError> {
        let url = format!("{}/{path}", self.inner.base_url);
        let mut request = self.inner.client.get(&url);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(%url, %status, "catalog returned non-success status");
            return Err(CatalogError::Status(status));
        }

        Ok(response.text().await?)
    }

    // =========================================================================
    // Product Methods
    // =========================================================================

    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails, the catalog answers
    /// with a non-success status, or the body does not decode.
    #[instrument(skip(self))]
    pub async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        let cache_key = "products".to_string();

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for product list");
            return Ok((*products).clone());
        }

        let body = self.fetch("products", None).await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(Arc::new(products.clone())))
            .await;

        Ok(products)
    }

    /// Fetch the first `limit` products (the "featured" subset).
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails or the body does not
    /// decode.
    #[instrument(skip(self))]
    pub async fn featured_products(&self, limit: u32) -> Result<Vec<Product>, CatalogError> {
        let cache_key = format!("products:limit:{limit}");

        if let Some(CacheValue::Products(products)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for featured products");
            return Ok((*products).clone());
        }

        let body = self.fetch("products", Some(limit)).await?;
        let products: Vec<Product> = serde_json::from_str(&body)?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Products(Arc::new(products.clone())))
            .await;

        Ok(products)
    }

    /// Fetch a single product by ID, directly from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when the catalog answers with no
    /// usable payload (empty body, `null`, or an empty object), and other
    /// [`CatalogError`] variants for transport and decode failures.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        let cache_key = format!("product:{id}");

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for product");
            return Ok((*product).clone());
        }

        let body = self.fetch(&format!("products/{id}"), None).await?;
        let product = decode_product(&body, id)?;

        self.inner
            .cache
            .insert(cache_key, CacheValue::Product(Arc::new(product.clone())))
            .await;

        Ok(product)
    }

    /// Fetch the list of category names.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] if the request fails or the body does not
    /// decode.
    #[instrument(skip(self))]
    pub async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        let cache_key = "categories".to_string();

        if let Some(CacheValue::Categories(categories)) = self.inner.cache.get(&cache_key).await {
            debug!("cache hit for categories");
            return Ok((*categories).clone());
        }

        let body = self.fetch("products/categories", None).await?;
        let categories: Vec<String> = serde_json::from_str(&body)?;

        self.inner
            .cache
            .insert(
                cache_key,
                CacheValue::Categories(Arc::new(categories.clone())),
            )
            .await;

        Ok(categories)
    }
}

/// Decode a single-product body.
///
/// The catalog signals "not found" with an empty body, `null`, or an empty
/// object rather than a 404, so that detection lives here.
fn decode_product(body: &str, id: ProductId) -> Result<Product, CatalogError> {
    if body.trim().is_empty() {
        return Err(CatalogError::NotFound(id));
    }

    let value: serde_json::Value = serde_json::from_str(body)?;
    let usable = match &value {
        serde_json::Value::Null => false,
        serde_json::Value::Object(map) => !map.is_empty(),
        _ => true,
    };
    if !usable {
        return Err(CatalogError::NotFound(id));
    }

    Ok(serde_json::from_value(value)?)
}
