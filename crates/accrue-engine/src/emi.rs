//! Equated monthly installment.
//!
//! EMI = P × r × (1+r)^n / ((1+r)^n − 1)
//!
//! with `r = annual_rate_percent / 12 / 100` and `n = tenure_years × 12`.
//! Totals are derived from the rounded installment, the amount a borrower is
//! actually billed each month.

use rust_decimal::Decimal;
use tracing::debug;

use accrue_core::{AccrueResult, EmiResult, LoanTerms};
use accrue_math::{pow_int, round_money};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes the monthly installment and totals for validated loan terms.
///
/// At a zero rate the formula's denominator vanishes, so the installment is
/// `principal / n`, the total payment is the principal and interest is zero.
/// The same applies to a positive rate whose monthly fraction is too small to
/// move `(1+r)^n` away from one.
///
/// # Example
///
/// ```rust
/// use accrue_core::LoanTerms;
/// use accrue_engine::compute_emi;
/// use rust_decimal_macros::dec;
///
/// let terms = LoanTerms::new(dec!(100000), dec!(8.5), 20).unwrap();
/// let result = compute_emi(&terms);
/// assert_eq!(result.emi().value(), dec!(867.82));
/// assert_eq!(result.total_payment().value(), dec!(208276.80));
/// assert_eq!(result.total_interest().value(), dec!(108276.80));
/// ```
#[must_use]
pub fn compute_emi(terms: &LoanTerms) -> EmiResult {
    let principal = terms.principal().value();
    let months = terms.months();
    let n = Decimal::from(months);

    let r = terms.annual_rate_percent() / MONTHS_PER_YEAR / Decimal::ONE_HUNDRED;
    let growth = pow_int(Decimal::ONE + r, months);

    // A rate small enough to vanish at 28 decimal places behaves as zero
    let result = match (principal * r * growth).checked_div(growth - Decimal::ONE) {
        Some(raw) if !r.is_zero() => {
            let installment = round_money(raw);
            let total_payment = installment * n;
            EmiResult::new(installment, total_payment - principal, total_payment)
        }
        _ => EmiResult::new(principal / n, Decimal::ZERO, principal),
    };

    debug!(
        "EMI {} over {} months at {}%: total {}",
        result.emi(),
        months,
        terms.annual_rate_percent(),
        result.total_payment()
    );
    result
}

/// Validates and computes an EMI in one call.
///
/// # Errors
///
/// `RangeError` if any input is outside the loan domain.
pub fn emi(
    principal: Decimal,
    annual_rate_percent: Decimal,
    tenure_years: u32,
) -> AccrueResult<EmiResult> {
    let terms = LoanTerms::new(principal, annual_rate_percent, tenure_years)?;
    Ok(compute_emi(&terms))
}
