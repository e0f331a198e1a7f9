//! Simple interest.
//!
//! I = P × (R / 100) × T, final amount = P + I.

use rust_decimal::Decimal;
use tracing::debug;

use accrue_core::{AccrueResult, InterestResult, InterestTerms};
use accrue_math::percent_to_rate;

/// Computes simple interest for validated terms.
///
/// Interest and final amount are each rounded from their unrounded values;
/// the final amount is not derived from the rounded interest.
///
/// # Example
///
/// ```rust
/// use accrue_core::InterestTerms;
/// use accrue_engine::compute_simple_interest;
/// use rust_decimal_macros::dec;
///
/// let terms = InterestTerms::new(dec!(10000), dec!(5), dec!(2)).unwrap();
/// let result = compute_simple_interest(&terms);
/// assert_eq!(result.interest().to_string(), "1000.00");
/// assert_eq!(result.final_amount().to_string(), "11000.00");
/// ```
#[must_use]
pub fn compute_simple_interest(terms: &InterestTerms) -> InterestResult {
    let principal = terms.principal().value();
    let interest = principal * percent_to_rate(terms.annual_rate_percent()) * terms.time_years();
    let result = InterestResult::new(interest, principal + interest);

    debug!(
        "Simple interest {} on {} over {} years",
        result.interest(),
        terms.principal(),
        terms.time_years()
    );
    result
}

/// Validates and computes simple interest in one call.
pub fn simple_interest(
    principal: Decimal,
    annual_rate_percent: Decimal,
    time_years: Decimal,
) -> AccrueResult<InterestResult> {
    let terms = InterestTerms::new(principal, annual_rate_percent, time_years)?;
    Ok(compute_simple_interest(&terms))
}
