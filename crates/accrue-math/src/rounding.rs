//! Rounding primitives.
//!
//! `rust_decimal`'s default `round_dp` is banker's rounding (half to even).
//! Monetary figures here always use half-up, so every call goes through
//! [`round_half_up`] with an explicit strategy.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fractional digits carried by every reported monetary figure.
pub const MONEY_SCALE: u32 = 2;

/// Rounds `value` to `scale` fractional digits, ties away from zero.
///
/// The result always carries exactly `scale` fractional digits, so
/// `round_half_up(dec!(1000), 2)` displays as `1000.00`.
///
/// # Example
///
/// ```rust
/// use accrue_math::round_half_up;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(round_half_up(dec!(0.125), 2), dec!(0.13));
/// assert_eq!(round_half_up(dec!(-0.125), 2), dec!(-0.13));
/// assert_eq!(round_half_up(dec!(7), 2).to_string(), "7.00");
/// ```
#[must_use]
pub fn round_half_up(value: Decimal, scale: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(scale, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(scale);
    rounded
}

/// Rounds a monetary figure to [`MONEY_SCALE`] digits, half-up.
#[must_use]
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, MONEY_SCALE)
}

/// Converts a percentage (8.5) to a rate (0.085).
#[must_use]
pub fn percent_to_rate(percent: Decimal) -> Decimal {
    percent / Decimal::ONE_HUNDRED
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_ties_round_up_not_to_even() {
        // Banker's rounding would give 2.34 and 0.12
        assert_eq!(round_money(dec!(2.345)), dec!(2.35));
        assert_eq!(round_money(dec!(0.125)), dec!(0.13));
        assert_eq!(round_money(dec!(0.135)), dec!(0.14));
    }

    #[test]
    fn test_ties_round_away_from_zero_for_negatives() {
        assert_eq!(round_money(dec!(-97.505)), dec!(-97.51));
        assert_eq!(round_money(dec!(-0.004)), dec!(0.00));
    }

    #[test]
    fn test_no_truncation() {
        assert_eq!(round_money(dec!(867.8249999)), dec!(867.82));
        assert_eq!(round_money(dec!(867.8250001)), dec!(867.83));
        assert_eq!(round_money(dec!(1.999)), dec!(2.00));
    }

    #[test]
    fn test_scale_is_padded() {
        assert_eq!(round_money(dec!(1000)).to_string(), "1000.00");
        assert_eq!(round_money(dec!(1000.5)).to_string(), "1000.50");
        assert_eq!(round_money(Decimal::ZERO).to_string(), "0.00");
        assert_eq!(round_half_up(dec!(3.14159), 4).to_string(), "3.1416");
    }

    #[test]
    fn test_percent_to_rate() {
        assert_eq!(percent_to_rate(dec!(8.5)), dec!(0.085));
        assert_eq!(percent_to_rate(dec!(-5)), dec!(-0.05));
    }

    fn arb_decimal() -> impl Strategy<Value = Decimal> {
        (any::<i64>(), 0u32..=10).prop_map(|(mantissa, scale)| Decimal::new(mantissa, scale))
    }

    proptest! {
        #[test]
        fn prop_round_money_is_idempotent(value in arb_decimal()) {
            let once = round_money(value);
            prop_assert_eq!(round_money(once), once);
        }

        #[test]
        fn prop_round_money_has_two_digits(value in arb_decimal()) {
            prop_assert_eq!(round_money(value).scale(), MONEY_SCALE);
        }

        #[test]
        fn prop_round_money_within_half_cent(value in arb_decimal()) {
            let diff = (round_money(value) - value).abs();
            prop_assert!(diff <= dec!(0.005));
        }
    }
}
