//! Domain bounds for calculation inputs.
//!
//! All bounds are inclusive. Together they cap the compounding work at
//! 1200 multiplications and keep every result inside `Decimal`'s range.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::{AccrueError, AccrueResult};

/// An inclusive `[min, max]` range for one input field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    min: Decimal,
    max: Decimal,
}

impl Bound {
    /// Creates a bound from its inclusive limits.
    #[must_use]
    pub const fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Inclusive lower limit.
    #[must_use]
    pub fn min(&self) -> Decimal {
        self.min
    }

    /// Inclusive upper limit.
    #[must_use]
    pub fn max(&self) -> Decimal {
        self.max
    }

    /// Returns true if `value` lies within the bound.
    #[must_use]
    pub fn contains(&self, value: Decimal) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks `value`, naming `field` in the error.
    pub fn check(&self, field: &'static str, value: Decimal) -> AccrueResult<Decimal> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(self.error(field, value))
        }
    }

    pub(crate) fn error(&self, field: &'static str, value: Decimal) -> AccrueError {
        AccrueError::range_error(field, value, self.min, self.max)
    }
}

/// EMI principal: 1,000 to 10,000,000.
pub const LOAN_PRINCIPAL: Bound = Bound::new(dec!(1000), dec!(10_000_000));
/// EMI annual rate: 0% to 30%.
pub const LOAN_RATE_PERCENT: Bound = Bound::new(dec!(0), dec!(30));
/// EMI tenure: 1 to 30 years.
pub const LOAN_TENURE_YEARS: Bound = Bound::new(dec!(1), dec!(30));

/// Interest principal: 0.01 to 10,000,000.
pub const INTEREST_PRINCIPAL: Bound = Bound::new(dec!(0.01), dec!(10_000_000));
/// Interest annual rate: -30% to 30%. Negative rates are valid.
pub const INTEREST_RATE_PERCENT: Bound = Bound::new(dec!(-30), dec!(30));
/// Interest period: 0 to 100 years.
pub const INTEREST_TIME_YEARS: Bound = Bound::new(dec!(0), dec!(100));
