use serde::{Deserialize, Serialize};

use forgepos_core::{DomainError, DomainResult};

/// Unit price of a product, in the display currency.
///
/// Always rendered with two decimals (`19.5` → `$19.50`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    /// Build a price, rejecting negative and non-finite amounts.
    pub fn new(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::validation(format!(
                "price must be a finite number, got {amount}"
            )));
        }
        if amount < 0.0 {
            return Err(DomainError::validation(format!(
                "price must not be negative, got {amount}"
            )));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = DomainError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for f64 {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}
