//! Monetary amount type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use accrue_math::round_money;

/// An exact base-10 money value.
///
/// Serializes as a JSON number carrying its exact digits, so a rounded
/// amount is written as `1000.00`, never `1000.0`.
///
/// # Example
///
/// ```rust
/// use accrue_core::MonetaryAmount;
/// use rust_decimal_macros::dec;
///
/// let amount = MonetaryAmount::new(dec!(867.8249));
/// assert_eq!(amount.rounded().value(), dec!(867.82));
/// assert_eq!(amount.rounded().to_string(), "867.82");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct MonetaryAmount(#[serde(with = "rust_decimal::serde::arbitrary_precision")] Decimal);

impl MonetaryAmount {
    /// A zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Creates an amount from a decimal value.
    #[must_use]
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Rounds to two fractional digits, half-up.
    #[must_use]
    pub fn rounded(&self) -> Self {
        Self(round_money(self.0))
    }

    /// Returns true if the amount is strictly positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}

impl From<Decimal> for MonetaryAmount {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl From<MonetaryAmount> for Decimal {
    fn from(amount: MonetaryAmount) -> Self {
        amount.0
    }
}

impl Add for MonetaryAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Sub for MonetaryAmount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl fmt::Display for MonetaryAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_rounded_pads_scale() {
        let amount = MonetaryAmount::new(dec!(11000));
        assert_eq!(amount.rounded().to_string(), "11000.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = MonetaryAmount::new(dec!(100.25));
        let b = MonetaryAmount::new(dec!(0.75));
        assert_eq!((a + b).value(), dec!(101.00));
        assert_eq!((a - b).value(), dec!(99.50));
    }

    #[test]
    fn test_is_positive() {
        assert!(MonetaryAmount::new(dec!(0.01)).is_positive());
        assert!(!MonetaryAmount::ZERO.is_positive());
        assert!(!MonetaryAmount::new(dec!(-5)).is_positive());
    }

    #[test]
    fn test_serializes_exact_digits() {
        let amount = MonetaryAmount::new(dec!(1000)).rounded();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "1000.00");

        let amount = MonetaryAmount::new(dec!(867.82));
        assert_eq!(serde_json::to_string(&amount).unwrap(), "867.82");
    }

    #[test]
    fn test_serde_roundtrip() {
        let amount = MonetaryAmount::new(dec!(123456.78));
        let json = serde_json::to_string(&amount).unwrap();
        let parsed: MonetaryAmount = serde_json::from_str(&json).unwrap();
        assert_eq!(amount, parsed);
    }
}
