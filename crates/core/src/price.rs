//! Price-range filter value object.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::value_object::ValueObject;

/// Highest price a range may reach (smallest currency unit).
pub const PRICE_CEILING: u64 = 150_000;

/// Inclusive `[low, high]` price bound applied to catalog queries.
///
/// Always satisfies `low <= high <= PRICE_CEILING`; there is no way to build
/// an inverted range.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u64, u64)", into = "(u64, u64)")]
pub struct PriceRange {
    low: u64,
    high: u64,
}

impl PriceRange {
    /// The whole price domain, `[0, PRICE_CEILING]`.
    pub const FULL: PriceRange = PriceRange {
        low: 0,
        high: PRICE_CEILING,
    };

    /// Build a range, rejecting `low > high` and bounds above the ceiling.
    pub fn new(low: u64, high: u64) -> DomainResult<Self> {
        if low > high {
            return Err(DomainError::validation(format!(
                "price range low ({low}) must not exceed high ({high})"
            )));
        }
        if high > PRICE_CEILING {
            return Err(DomainError::validation(format!(
                "price range high ({high}) exceeds ceiling ({PRICE_CEILING})"
            )));
        }
        Ok(Self { low, high })
    }

    /// Build a range by clamping both bounds into the price domain; an
    /// inverted pair collapses onto `high`.
    pub fn clamped(low: u64, high: u64) -> Self {
        let high = high.min(PRICE_CEILING);
        Self {
            low: low.min(high),
            high,
        }
    }

    pub fn low(&self) -> u64 {
        self.low
    }

    pub fn high(&self) -> u64 {
        self.high
    }

    /// Inclusive on both ends.
    pub fn contains(&self, price: u64) -> bool {
        self.low <= price && price <= self.high
    }

    /// Move the lower bound; it is pinned to `high` if it would pass it.
    pub fn with_low(self, low: u64) -> Self {
        Self {
            low: low.min(self.high),
            high: self.high,
        }
    }

    /// Move the upper bound; it is pinned to `low` if it would drop below it.
    pub fn with_high(self, high: u64) -> Self {
        let high = high.clamp(self.low, PRICE_CEILING);
        Self {
            low: self.low,
            high,
        }
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl ValueObject for PriceRange {}

impl TryFrom<(u64, u64)> for PriceRange {
    type Error = DomainError;

    fn try_from((low, high): (u64, u64)) -> Result<Self, Self::Error> {
        Self::new(low, high)
    }
}

impl From<PriceRange> for (u64, u64) {
    fn from(value: PriceRange) -> Self {
        (value.low, value.high)
    }
}

impl core::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {}]", self.low, self.high)
    }
}
