//! Product types for the remote catalog API.

use serde::{Deserialize, Serialize};

use clementine_core::{Price, ProductId, Rating};

/// A product from the remote catalog.
///
/// Read-only and externally sourced: products are never created, mutated,
/// or deleted locally. Deserialization is the validation boundary - a
/// payload with a negative price or an out-of-range rating fails to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog-assigned identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Unit price.
    pub price: Price,
    /// Long-form description.
    pub description: String,
    /// Category name (matches `GET /products/categories` entries).
    pub category: String,
    /// Product image URL.
    pub image: String,
    /// Aggregate review rating, when the catalog provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}
