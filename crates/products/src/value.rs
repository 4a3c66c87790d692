//! Quantity and price value objects.

use core::str::FromStr;
use serde::Serialize;

use amazonia_core::{DomainError, DomainResult, ValueObject};

/// Units in stock. Never negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    pub const ZERO: Quantity = Quantity(0);

    /// Validate a signed quantity as entered by an operator.
    pub fn new(value: i64) -> DomainResult<Self> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::validation("quantity must be a non-negative integer"))
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl FromStr for Quantity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("quantity is not an integer: {s:?}")))?;
        Self::new(value)
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl ValueObject for Quantity {}

/// Unit price. Always finite and non-negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    pub const ZERO: Price = Price(0.0);

    pub fn new(value: f64) -> DomainResult<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(DomainError::validation(
                "price must be a non-negative number",
            ));
        }
        // Folds -0.0 into 0.0.
        Ok(Self(value + 0.0))
    }

    pub fn get(self) -> f64 {
        self.0
    }

    /// Shortest text that parses back to the same value (`5.0`, `1.25`).
    pub fn to_plain_string(self) -> String {
        format!("{:?}", self.0)
    }
}

impl FromStr for Price {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::validation(format!("price is not a number: {s:?}")))?;
        Self::new(value)
    }
}

/// Renders with two decimals, the way prices are shown to operators.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl ValueObject for Price {}
