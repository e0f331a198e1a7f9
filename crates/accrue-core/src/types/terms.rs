//! Validated calculation inputs.
//!
//! Fields are private and the only constructors run the domain range
//! checks, so holding one of these values means the inputs are in-domain.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use accrue_math::Periods;

use super::{CompoundingFrequency, MonetaryAmount};
use crate::error::AccrueResult;
use crate::validation::bounds;
use crate::validation::fields;

/// Terms of an amortizing loan.
///
/// # Example
///
/// ```rust
/// use accrue_core::LoanTerms;
/// use rust_decimal_macros::dec;
///
/// let terms = LoanTerms::new(dec!(100000), dec!(8.5), 20).unwrap();
/// assert_eq!(terms.months(), 240);
/// assert!(LoanTerms::new(dec!(999), dec!(8.5), 20).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoanTerms {
    principal: MonetaryAmount,
    annual_rate_percent: Decimal,
    tenure_years: u32,
}

impl LoanTerms {
    /// Validates and creates loan terms.
    ///
    /// # Errors
    ///
    /// Returns `AccrueError::RangeError` naming the first field outside its
    /// bound: principal in [1000, 10000000], rate in [0, 30], tenure in [1, 30].
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        tenure_years: u32,
    ) -> AccrueResult<Self> {
        Self::from_decimals(principal, annual_rate_percent, Decimal::from(tenure_years))
    }

    /// Range-checks all three fields in order, with tenure still a decimal so
    /// a negative tenure reports as out of range.
    pub(crate) fn from_decimals(
        principal: Decimal,
        annual_rate_percent: Decimal,
        tenure_years: Decimal,
    ) -> AccrueResult<Self> {
        bounds::LOAN_PRINCIPAL.check(fields::PRINCIPAL, principal)?;
        bounds::LOAN_RATE_PERCENT.check(fields::ANNUAL_RATE_PERCENT, annual_rate_percent)?;
        bounds::LOAN_TENURE_YEARS.check(fields::TENURE_YEARS, tenure_years)?;

        let tenure_years = tenure_years
            .to_u32()
            .ok_or_else(|| bounds::LOAN_TENURE_YEARS.error(fields::TENURE_YEARS, tenure_years))?;

        Ok(Self {
            principal: MonetaryAmount::new(principal),
            annual_rate_percent,
            tenure_years,
        })
    }

    /// Loan principal.
    #[must_use]
    pub fn principal(&self) -> MonetaryAmount {
        self.principal
    }

    /// Annual interest rate in percent (8.5 for 8.5%).
    #[must_use]
    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    /// Tenure in whole years.
    #[must_use]
    pub fn tenure_years(&self) -> u32 {
        self.tenure_years
    }

    /// Number of monthly installments.
    #[must_use]
    pub fn months(&self) -> u32 {
        self.tenure_years * 12
    }

    /// Returns true if the loan carries no interest.
    #[must_use]
    pub fn is_interest_free(&self) -> bool {
        self.annual_rate_percent.is_zero()
    }
}

/// Terms of a simple interest accrual.
///
/// Negative rates are accepted; they yield negative interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterestTerms {
    principal: MonetaryAmount,
    annual_rate_percent: Decimal,
    time_years: Decimal,
}

impl InterestTerms {
    /// Validates and creates interest terms.
    ///
    /// # Errors
    ///
    /// Returns `AccrueError::RangeError` naming the first field outside its
    /// bound: principal in [0.01, 10000000], rate in [-30, 30], time in [0, 100].
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        time_years: Decimal,
    ) -> AccrueResult<Self> {
        bounds::INTEREST_PRINCIPAL.check(fields::PRINCIPAL, principal)?;
        bounds::INTEREST_RATE_PERCENT.check(fields::ANNUAL_RATE_PERCENT, annual_rate_percent)?;
        bounds::INTEREST_TIME_YEARS.check(fields::TIME_YEARS, time_years)?;

        Ok(Self {
            principal: MonetaryAmount::new(principal),
            annual_rate_percent,
            time_years,
        })
    }

    /// Principal amount.
    #[must_use]
    pub fn principal(&self) -> MonetaryAmount {
        self.principal
    }

    /// Annual interest rate in percent.
    #[must_use]
    pub fn annual_rate_percent(&self) -> Decimal {
        self.annual_rate_percent
    }

    /// Accrual period in years, possibly fractional.
    #[must_use]
    pub fn time_years(&self) -> Decimal {
        self.time_years
    }
}

/// Terms of a compound interest accrual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompoundTerms {
    interest: InterestTerms,
    frequency: CompoundingFrequency,
    periods: Periods,
}

impl CompoundTerms {
    /// Validates and creates compound interest terms.
    ///
    /// # Errors
    ///
    /// Same bounds as [`InterestTerms::new`].
    pub fn new(
        principal: Decimal,
        annual_rate_percent: Decimal,
        time_years: Decimal,
        frequency: CompoundingFrequency,
    ) -> AccrueResult<Self> {
        let interest = InterestTerms::new(principal, annual_rate_percent, time_years)?;
        Self::from_interest(interest, frequency)
    }

    /// Adds a compounding frequency to already validated interest terms.
    pub fn from_interest(
        interest: InterestTerms,
        frequency: CompoundingFrequency,
    ) -> AccrueResult<Self> {
        let count = Decimal::from(frequency.periods_per_year()) * interest.time_years;
        let periods = Periods::from_decimal(count).ok_or_else(|| {
            bounds::INTEREST_TIME_YEARS.error(fields::TIME_YEARS, interest.time_years)
        })?;

        Ok(Self {
            interest,
            frequency,
            periods,
        })
    }

    /// Principal amount.
    #[must_use]
    pub fn principal(&self) -> MonetaryAmount {
        self.interest.principal
    }

    /// Annual interest rate in percent.
    #[must_use]
    pub fn annual_rate_percent(&self) -> Decimal {
        self.interest.annual_rate_percent
    }

    /// Accrual period in years.
    #[must_use]
    pub fn time_years(&self) -> Decimal {
        self.interest.time_years
    }

    /// Compounding frequency.
    #[must_use]
    pub fn frequency(&self) -> CompoundingFrequency {
        self.frequency
    }

    /// Total compounding periods (`periods_per_year * time_years`).
    #[must_use]
    pub fn periods(&self) -> Periods {
        self.periods
    }

    /// The underlying simple interest terms.
    #[must_use]
    pub fn as_interest_terms(&self) -> &InterestTerms {
        &self.interest
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AccrueError;
    use rust_decimal_macros::dec;

    #[test]
    fn test_loan_terms_bounds_inclusive() {
        assert!(LoanTerms::new(dec!(1000), dec!(0), 1).is_ok());
        assert!(LoanTerms::new(dec!(10000000), dec!(30), 30).is_ok());
    }

    #[test]
    fn test_loan_principal_out_of_range() {
        let err = LoanTerms::new(dec!(999), dec!(8.5), 20).unwrap_err();
        assert_eq!(err.field(), "principal");
        assert!(matches!(err, AccrueError::RangeError { .. }));

        let err = LoanTerms::new(dec!(10000001), dec!(8.5), 20).unwrap_err();
        assert_eq!(err.field(), "principal");
    }

    #[test]
    fn test_loan_rate_out_of_range() {
        let err = LoanTerms::new(dec!(100000), dec!(-0.01), 20).unwrap_err();
        assert_eq!(err.field(), "annual_rate_percent");

        let err = LoanTerms::new(dec!(100000), dec!(30.01), 20).unwrap_err();
        assert_eq!(err.field(), "annual_rate_percent");
    }

    #[test]
    fn test_loan_tenure_out_of_range() {
        for years in [0, 31] {
            let err = LoanTerms::new(dec!(100000), dec!(8.5), years).unwrap_err();
            assert_eq!(err.field(), "tenure_years");
        }

        let err = LoanTerms::from_decimals(dec!(100000), dec!(8.5), dec!(-1)).unwrap_err();
        assert_eq!(err.field(), "tenure_years");
    }

    #[test]
    fn test_first_violation_wins() {
        let err = LoanTerms::new(dec!(1), dec!(99), 99).unwrap_err();
        assert_eq!(err.field(), "principal");

        let err = LoanTerms::new(dec!(5000), dec!(99), 99).unwrap_err();
        assert_eq!(err.field(), "annual_rate_percent");
    }

    #[test]
    fn test_interest_terms_allow_negative_rate() {
        let terms = InterestTerms::new(dec!(1000), dec!(-5), dec!(2)).unwrap();
        assert_eq!(terms.annual_rate_percent(), dec!(-5));
    }

    #[test]
    fn test_interest_terms_reject_negative_time() {
        let err = InterestTerms::new(dec!(1000), dec!(5), dec!(-1)).unwrap_err();
        assert_eq!(err.field(), "time_years");
    }

    #[test]
    fn test_compound_periods() {
        let terms =
            CompoundTerms::new(dec!(10000), dec!(10), dec!(2.5), CompoundingFrequency::Monthly)
                .unwrap();
        assert_eq!(terms.periods().whole(), 30);
        assert!(terms.periods().is_integral());

        let terms =
            CompoundTerms::new(dec!(10000), dec!(10), dec!(2.5), CompoundingFrequency::Annual)
                .unwrap();
        assert_eq!(terms.periods().whole(), 2);
        assert_eq!(terms.periods().fraction(), dec!(0.5));
    }
}
