//! Exact powers for compounding.
//!
//! Growth factors `(1 + r)^n` are built by repeated `Decimal` multiplication.
//! A 30-year monthly schedule is 360 steps; nothing here goes through `f64`.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};

/// Raises `base` to a non-negative integer power by repeated multiplication.
///
/// `pow_int(x, 0)` is `1` for every `x`.
///
/// # Panics
///
/// Panics if the result overflows `Decimal` (about 7.9e28). Callers bound
/// their inputs so this cannot happen.
///
/// # Example
///
/// ```rust
/// use accrue_math::pow_int;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(pow_int(dec!(1.1), 3), dec!(1.331));
/// ```
#[must_use]
pub fn pow_int(base: Decimal, exponent: u32) -> Decimal {
    let mut result = Decimal::ONE;
    for _ in 0..exponent {
        result *= base;
    }
    result
}

/// A period count split into whole periods and a fractional remainder.
///
/// Compounding 2.5 years annually gives `Periods { whole: 2, fraction: 0.5 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Periods {
    whole: u32,
    fraction: Decimal,
}

impl Periods {
    /// Splits a non-negative period count.
    ///
    /// Returns `None` for negative counts or counts past `u32::MAX`.
    #[must_use]
    pub fn from_decimal(count: Decimal) -> Option<Self> {
        if count.is_sign_negative() && !count.is_zero() {
            return None;
        }
        let whole = count.trunc();
        Some(Self {
            whole: whole.to_u32()?,
            fraction: (count - whole).normalize(),
        })
    }

    /// Whole number of periods.
    #[must_use]
    pub fn whole(&self) -> u32 {
        self.whole
    }

    /// Fractional remainder in `[0, 1)`.
    #[must_use]
    pub fn fraction(&self) -> Decimal {
        self.fraction
    }

    /// Returns true if the count has no fractional part.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        self.fraction.is_zero()
    }
}

impl From<u32> for Periods {
    fn from(whole: u32) -> Self {
        Self {
            whole,
            fraction: Decimal::ZERO,
        }
    }
}

/// Raises `base` to a period count that may have a fractional part.
///
/// The whole part is exact ([`pow_int`]). Only a non-zero fraction falls back
/// to `rust_decimal`'s `powd`, which is accurate to well below a cent for
/// growth factors near one.
///
/// # Example
///
/// ```rust
/// use accrue_math::{pow_periods, Periods};
/// use rust_decimal_macros::dec;
///
/// let periods = Periods::from_decimal(dec!(3)).unwrap();
/// assert_eq!(pow_periods(dec!(1.1), periods), dec!(1.331));
/// ```
#[must_use]
pub fn pow_periods(base: Decimal, periods: Periods) -> Decimal {
    let whole = pow_int(base, periods.whole);
    if periods.is_integral() {
        whole
    } else {
        whole * base.powd(periods.fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_pow_int_small() {
        assert_eq!(pow_int(dec!(2), 10), dec!(1024));
        assert_eq!(pow_int(dec!(1.05), 2), dec!(1.1025));
        assert_eq!(pow_int(dec!(0.9), 2), dec!(0.81));
    }

    #[test]
    fn test_pow_int_zero_exponent() {
        assert_eq!(pow_int(dec!(1.0070833), 0), Decimal::ONE);
        assert_eq!(pow_int(Decimal::ZERO, 0), Decimal::ONE);
    }

    #[test]
    fn test_pow_int_one_is_fixed_point() {
        assert_eq!(pow_int(Decimal::ONE, 360), Decimal::ONE);
    }

    #[test]
    fn test_pow_int_long_monthly_schedule() {
        // (1 + 0.3/12)^360 at the top of the loan domain
        let factor = pow_int(Decimal::ONE + dec!(0.025), 360);
        assert!((factor - dec!(7254.2336746)).abs() < dec!(0.0000001));
    }

    #[test]
    fn test_periods_split() {
        let p = Periods::from_decimal(dec!(2.5)).unwrap();
        assert_eq!(p.whole(), 2);
        assert_eq!(p.fraction(), dec!(0.5));
        assert!(!p.is_integral());

        let p = Periods::from_decimal(dec!(12.00)).unwrap();
        assert_eq!(p.whole(), 12);
        assert!(p.is_integral());

        assert_eq!(Periods::from_decimal(Decimal::ZERO), Some(Periods::from(0)));
    }

    #[test]
    fn test_periods_rejects_negative() {
        assert!(Periods::from_decimal(dec!(-1)).is_none());
        assert!(Periods::from_decimal(dec!(-0.5)).is_none());
    }

    #[test]
    fn test_pow_periods_integral_is_exact() {
        let base = dec!(1.025);
        assert_eq!(pow_periods(base, Periods::from(4)), pow_int(base, 4));
    }

    #[test]
    fn test_pow_periods_fractional() {
        // 1.21^0.5 = 1.1, 1.21^1.5 = 1.331
        let half = Periods::from_decimal(dec!(0.5)).unwrap();
        assert!((pow_periods(dec!(1.21), half) - dec!(1.1)).abs() < dec!(0.00001));

        let one_and_half = Periods::from_decimal(dec!(1.5)).unwrap();
        assert!((pow_periods(dec!(1.21), one_and_half) - dec!(1.331)).abs() < dec!(0.00001));
    }
}
