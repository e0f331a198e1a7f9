//! Compound interest.
//!
//! A = P × (1 + r/n)^(n·t), interest = A − P,
//!
//! where `r` is the annual rate as a fraction and `n` the compounding
//! periods per year.

use rust_decimal::Decimal;
use tracing::debug;

use accrue_core::{AccrueResult, CompoundTerms, CompoundingFrequency, InterestResult};
use accrue_math::{percent_to_rate, pow_periods};

/// Computes compound interest for validated terms.
///
/// Whole periods are compounded by exact repeated multiplication. A
/// fractional remainder (2.5 years compounded annually) is applied with a
/// fractional power.
///
/// # Example
///
/// ```rust
/// use accrue_core::{CompoundTerms, CompoundingFrequency};
/// use accrue_engine::compute_compound_interest;
/// use rust_decimal_macros::dec;
///
/// let terms =
///     CompoundTerms::new(dec!(10000), dec!(10), dec!(1), CompoundingFrequency::Annual).unwrap();
/// let result = compute_compound_interest(&terms);
/// assert_eq!(result.final_amount().to_string(), "11000.00");
/// assert_eq!(result.interest().to_string(), "1000.00");
/// ```
#[must_use]
pub fn compute_compound_interest(terms: &CompoundTerms) -> InterestResult {
    let principal = terms.principal().value();
    let periods_per_year = Decimal::from(terms.frequency().periods_per_year());
    let rate_per_period = percent_to_rate(terms.annual_rate_percent()) / periods_per_year;

    let final_amount = principal * pow_periods(Decimal::ONE + rate_per_period, terms.periods());
    let result = InterestResult::new(final_amount - principal, final_amount);

    debug!(
        "Compound interest {} on {} over {} years ({})",
        result.interest(),
        terms.principal(),
        terms.time_years(),
        terms.frequency()
    );
    result
}

/// Validates and computes compound interest in one call.
///
/// `frequency` is parsed strictly: `"weekly"` is `UnsupportedFrequency`.
pub fn compound_interest(
    principal: Decimal,
    annual_rate_percent: Decimal,
    time_years: Decimal,
    frequency: &str,
) -> AccrueResult<InterestResult> {
    let frequency: CompoundingFrequency = frequency.parse()?;
    let terms = CompoundTerms::new(principal, annual_rate_percent, time_years, frequency)?;
    Ok(compute_compound_interest(&terms))
}
