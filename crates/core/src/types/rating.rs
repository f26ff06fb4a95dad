//! Product rating type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum RatingError {
    /// The rate is outside the 0-5 scale.
    #[error("rating must be between 0 and 5 (got {0})")]
    OutOfRange(Decimal),
}

/// An aggregate product rating from the remote catalog.
///
/// Validated at the deserialization boundary: a payload with a rate outside
/// the 0-5 scale fails to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRating")]
pub struct Rating {
    /// Average star rating on a 0-5 scale.
    pub rate: Decimal,
    /// Number of reviews behind the average.
    pub count: u32,
}

/// Unvalidated wire form of [`Rating`].
#[derive(Debug, Deserialize)]
struct RawRating {
    rate: Decimal,
    count: u32,
}

impl TryFrom<RawRating> for Rating {
    type Error = RatingError;

    fn try_from(raw: RawRating) -> Result<Self, Self::Error> {
        if raw.rate < Decimal::ZERO || raw.rate > Decimal::from(5) {
            return Err(RatingError::OutOfRange(raw.rate));
        }
        Ok(Self {
            rate: raw.rate,
            count: raw.count,
        })
    }
}
