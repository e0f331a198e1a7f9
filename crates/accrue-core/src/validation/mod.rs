//! Input validation.
//!
//! Raw requests carry every field as an optional untyped JSON value, so that
//! the validator rather than the JSON layer decides what is wrong. Checks run
//! in a fixed order and the first failure is reported:
//!
//! 1. presence of every required field
//! 2. coercion of every field to its expected type
//! 3. range checks, in field order
//!
//! Numbers are read from their exact textual form; binary floats are never
//! involved.

pub mod bounds;
pub mod fields;
mod requests;

use rust_decimal::Decimal;
use serde_json::Value;

use crate::error::{AccrueError, AccrueResult};
use crate::types::CompoundingFrequency;

pub use requests::{
    CalculationRequest, CompoundInterestRequest, EmiRequest, SimpleInterestRequest,
    ValidatedRequest,
};

/// Digits a `Decimal` mantissa always holds, and its largest scale.
const MAX_DIGITS: i64 = 28;

/// Parses decimal text in plain (`8.5`) or scientific (`1e3`) notation.
///
/// Only malformed text yields `None`. Well-formed numbers of magnitude 1e28
/// or more saturate to `Decimal::MAX` or `Decimal::MIN`, so they still fail
/// every domain bound as out of range. Digits past the 28th fractional
/// place are rounded half up.
///
/// # Example
///
/// ```rust
/// use accrue_core::validation::parse_decimal;
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
///
/// assert_eq!(parse_decimal("8.5"), Some(dec!(8.5)));
/// assert_eq!(parse_decimal("1.5e3"), Some(dec!(1500)));
/// assert_eq!(parse_decimal("1e30"), Some(Decimal::MAX));
/// assert_eq!(parse_decimal("1e-40"), Some(Decimal::ZERO));
/// assert_eq!(parse_decimal("abc"), None);
/// ```
#[must_use]
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    let (negative, digits, exponent) = split_number(text.trim())?;
    let saturated = if negative { Decimal::MIN } else { Decimal::MAX };

    // Significant digits with trailing zeros folded into the exponent
    let digits = digits.trim_start_matches('0');
    let trimmed = digits.trim_end_matches('0');
    let exponent = exponent.saturating_add((digits.len() - trimmed.len()) as i64);
    let digits = trimmed;
    if digits.is_empty() {
        return Some(Decimal::ZERO);
    }

    let len = digits.len() as i64;
    if len.saturating_add(exponent) > MAX_DIGITS {
        return Some(saturated);
    }

    // Lowest kept power of ten: at most 28 digits, at most 28 places
    let low = exponent.max(-MAX_DIGITS).max(len + exponent - MAX_DIGITS);
    let dropped = low - exponent;
    let mut mantissa = 0u128;
    if let Ok(keep) = usize::try_from(len - dropped) {
        if keep > 0 {
            mantissa = digits[..keep].parse::<u128>().ok()?;
        }
        if dropped > 0 && digits.as_bytes()[keep] >= b'5' {
            mantissa += 1;
        }
    }

    let (mantissa, scale) = if low < 0 {
        (mantissa, low.unsigned_abs())
    } else {
        (mantissa * 10u128.pow(u32::try_from(low).ok()?), 0)
    };
    let signed = i128::try_from(mantissa).ok()?;
    let signed = if negative { -signed } else { signed };
    Some(
        u32::try_from(scale)
            .ok()
            .and_then(|scale| Decimal::try_from_i128_with_scale(signed, scale).ok())
            .map_or(saturated, |value| value.normalize()),
    )
}

/// Splits numeric text into sign, mantissa digits and the power of ten
/// those digits are scaled by. `None` when the text is not a number.
fn split_number(text: &str) -> Option<(bool, String, i64)> {
    let (negative, rest) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (mantissa, exponent) = match rest.find(['e', 'E']) {
        Some(at) => (&rest[..at], parse_exponent(&rest[at + 1..])?),
        None => (rest, 0),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
    if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction) {
        return None;
    }
    let exponent = exponent.saturating_sub(fraction.len() as i64);
    Some((negative, format!("{whole}{fraction}"), exponent))
}

/// Reads an exponent, clamping absurd magnitudes instead of failing.
fn parse_exponent(text: &str) -> Option<i64> {
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    if digits.is_empty() || !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX / 2).min(i64::MAX / 2);
    Some(if negative { -magnitude } else { magnitude })
}

/// Presence check: `None` (absent or `null`) is a missing field.
pub(crate) fn require<'a>(field: &'static str, value: Option<&'a Value>) -> AccrueResult<&'a Value> {
    match value {
        Some(Value::Null) | None => Err(AccrueError::missing_field(field)),
        Some(value) => Ok(value),
    }
}

/// Coerces a JSON number or numeric string to a decimal.
pub(crate) fn coerce_decimal(field: &'static str, value: &Value) -> AccrueResult<Decimal> {
    let parsed = match value {
        Value::Number(number) => parse_decimal(&number.to_string()),
        Value::String(text) => parse_decimal(text),
        _ => None,
    };
    parsed.ok_or_else(|| AccrueError::type_error(field, "must be a number"))
}

/// Coerces to a decimal with no fractional part.
pub(crate) fn coerce_whole(field: &'static str, value: &Value) -> AccrueResult<Decimal> {
    let number = coerce_decimal(field, value)?;
    if number.fract().is_zero() {
        Ok(number.trunc())
    } else {
        Err(AccrueError::type_error(field, "must be a whole number"))
    }
}

/// Coerces a JSON string to a compounding frequency.
pub(crate) fn coerce_frequency(
    field: &'static str,
    value: &Value,
) -> AccrueResult<CompoundingFrequency> {
    match value {
        Value::String(text) => text.parse(),
        _ => Err(AccrueError::type_error(field, "must be a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_parse_decimal_forms() {
        assert_eq!(parse_decimal("100000"), Some(dec!(100000)));
        assert_eq!(parse_decimal(" 7.89 "), Some(dec!(7.89)));
        assert_eq!(parse_decimal("-5"), Some(dec!(-5)));
        assert_eq!(parse_decimal("1E+2"), Some(dec!(100)));
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("12abc"), None);
        assert_eq!(parse_decimal("1e"), None);
        assert_eq!(parse_decimal("."), None);
        assert_eq!(parse_decimal("--1"), None);
        assert_eq!(parse_decimal("0.5"), Some(dec!(0.5)));
        assert_eq!(parse_decimal(".5"), Some(dec!(0.5)));
        assert_eq!(parse_decimal("-0"), Some(Decimal::ZERO));
        assert_eq!(parse_decimal("2.50e-1"), Some(dec!(0.25)));
    }

    #[test]
    fn test_parse_decimal_saturates_large_magnitudes() {
        assert_eq!(parse_decimal("1e30"), Some(Decimal::MAX));
        assert_eq!(parse_decimal("-1e30"), Some(Decimal::MIN));
        assert_eq!(
            parse_decimal("123456789012345678901234567890123"),
            Some(Decimal::MAX)
        );
        assert_eq!(parse_decimal("1e99999999999999999999"), Some(Decimal::MAX));
        assert_eq!(
            parse_decimal("9999999999999999999999999999"),
            Some(dec!(9999999999999999999999999999))
        );
    }

    #[test]
    fn test_parse_decimal_rounds_tiny_magnitudes() {
        assert_eq!(parse_decimal("1e-40"), Some(Decimal::ZERO));
        assert_eq!(parse_decimal("-1e-99999999999999999999"), Some(Decimal::ZERO));
        assert_eq!(parse_decimal("5e-30"), Some(Decimal::ZERO));
        assert_eq!(
            parse_decimal("5e-29"),
            Some(dec!(0.0000000000000000000000000001))
        );
        assert_eq!(
            parse_decimal("0.12345678901234567890123456789"),
            Some(dec!(0.1234567890123456789012345679))
        );
        assert_eq!(
            parse_decimal("1.00000000000000000000000000000000001"),
            Some(Decimal::ONE)
        );
    }

    #[test]
    fn test_require_treats_null_as_missing() {
        let err = require("principal", Some(&Value::Null)).unwrap_err();
        assert_eq!(err, AccrueError::missing_field("principal"));
        assert!(require("principal", None).is_err());
        assert!(require("principal", Some(&json!(0))).is_ok());
    }

    #[test]
    fn test_coerce_decimal_keeps_exact_digits() {
        // 0.1 has no exact binary form; the text does
        assert_eq!(coerce_decimal("x", &json!(0.1)).unwrap(), dec!(0.1));
        assert_eq!(coerce_decimal("x", &json!(123456.78)).unwrap(), dec!(123456.78));
        assert_eq!(coerce_decimal("x", &json!("8.5")).unwrap(), dec!(8.5));
    }

    #[test]
    fn test_coerce_decimal_rejects_non_numbers() {
        for value in [json!("invalid"), json!(true), json!([1]), json!({"a": 1})] {
            let err = coerce_decimal("principal", &value).unwrap_err();
            assert!(matches!(err, AccrueError::TypeError { field: "principal", .. }));
        }
    }

    #[test]
    fn test_coerce_decimal_accepts_unrepresentable_numbers() {
        assert_eq!(coerce_decimal("principal", &json!(1e30)).unwrap(), Decimal::MAX);
        assert_eq!(coerce_decimal("principal", &json!("1e-40")).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_coerce_whole() {
        assert_eq!(coerce_whole("tenure_years", &json!(20)).unwrap(), dec!(20));
        assert_eq!(coerce_whole("tenure_years", &json!(20.0)).unwrap(), dec!(20));
        assert!(coerce_whole("tenure_years", &json!(20.5)).is_err());
    }

    #[test]
    fn test_coerce_frequency() {
        assert_eq!(
            coerce_frequency("compounding_frequency", &json!("Monthly")).unwrap(),
            CompoundingFrequency::Monthly
        );
        assert_eq!(
            coerce_frequency("compounding_frequency", &json!("weekly")).unwrap_err(),
            AccrueError::unsupported_frequency("weekly")
        );
        assert!(matches!(
            coerce_frequency("compounding_frequency", &json!(12)).unwrap_err(),
            AccrueError::TypeError { .. }
        ));
    }
}
