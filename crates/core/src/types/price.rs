//! Type-safe price representation using decimal arithmetic.
//!
//! Catalog prices are single-currency in this demo, so [`Price`] carries no
//! currency dimension - only a non-negative [`Decimal`] amount. Validation
//! happens at the deserialization boundary: a persisted or remote payload
//! with a negative price fails to decode instead of flowing into totals.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when constructing a [`Price`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum PriceError {
    /// The amount is negative.
    #[error("price cannot be negative (got {0})")]
    Negative(Decimal),
}

/// A non-negative price.
///
/// Backed by [`rust_decimal::Decimal`] so cart totals never accumulate
/// floating-point error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A zero price.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Negative`] if `amount` is below zero.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(PriceError::Negative(amount));
        }
        Ok(Self(amount))
    }

    /// Get the underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The line amount for `quantity` units at this price.
    #[must_use]
    pub fn extended(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = <Decimal as Deserialize>::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Price {
    /// Format for display (e.g., "$19.99").
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
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

    #[test]
    fn test_new_rejects_negative() {
        assert!(matches!(
            Price::new(dec("-0.01")),
            Err(PriceError::Negative(_))
        ));
        assert!(Price::new(Decimal::ZERO).is_ok());
        assert!(Price::new(dec("19.99")).is_ok());
    }

    #[test]
    fn test_deserialize_from_number() {
        // Remote catalog payloads carry prices as JSON numbers.
        let price: Price = serde_json::from_str("109.95").unwrap();
        assert_eq!(price.amount(), dec("109.95"));
    }

    #[test]
    fn test_deserialize_from_string() {
        // Locally persisted snapshots carry prices as strings.
        let price: Price = serde_json::from_str("\"10.50\"").unwrap();
        assert_eq!(price.amount(), dec("10.50"));
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Price>("-5").is_err());
    }

    #[test]
    fn test_extended() {
        let price = Price::new(dec("10")).unwrap();
        assert_eq!(price.extended(3), dec("30"));
        assert_eq!(price.extended(0), Decimal::ZERO);
    }

    #[test]
    fn test_display() {
        let price = Price::new(dec("5.5")).unwrap();
        assert_eq!(price.to_string(), "$5.50");
    }
}
