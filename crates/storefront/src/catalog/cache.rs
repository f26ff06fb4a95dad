//! Cache values for catalog API responses.

use std::sync::Arc;

use super::types::Product;

/// A cached catalog response.
///
/// Values are `Arc`-wrapped so cache hits clone a pointer, not a list.
#[derive(Debug, Clone)]
pub(super) enum CacheValue {
    /// A product list (`products`, `products:limit:{n}`).
    Products(Arc<Vec<Product>>),
    /// A single product (`product:{id}`).
    Product(Arc<Product>),
    /// The category name list (`categories`).
    Categories(Arc<Vec<String>>),
}
