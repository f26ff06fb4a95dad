//! Cart domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::Product;

/// A product in the cart with its purchase quantity.
///
/// Invariants (maintained by `CartService`): at most one line per product
/// ID, and `quantity >= 1` - a quantity change to 0 or below removes the
/// line instead of zeroing it.
///
/// The persisted form flattens the product fields alongside `quantity`, the
/// shape the browser-resident demo stored under the `cart` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// The product being purchased.
    #[serde(flatten)]
    pub product: Product,
    /// Purchase quantity.
    pub quantity: u32,
}

impl CartLine {
    /// The line amount: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price.extended(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn dec(v: &str) -> Decimal {
        v.parse().unwrap()
    }

    fn line(quantity: u32) -> CartLine {
        serde_json::from_value(serde_json::json!({
            "id": 1,
            "title": "Backpack",
            "price": 10.50,
            "description": "",
            "category": "bags",
            "image": "",
            "quantity": quantity,
        }))
        .unwrap()
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line(3).line_total(), dec("31.50"));
    }

    #[test]
    fn test_persisted_form_is_flattened() {
        let json = serde_json::to_value(line(2)).unwrap();
        // Product fields sit alongside quantity, not nested.
        assert_eq!(json["id"], 1);
        assert_eq!(json["quantity"], 2);
        assert!(json.get("product").is_none());
    }
}
