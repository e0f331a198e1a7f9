//! Calculation result records.
//!
//! Every field is a [`MonetaryAmount`] rounded half-up to exactly two
//! fractional digits when the record is built.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::MonetaryAmount;

/// The calculation operations the engine supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CalculationKind {
    /// Equated monthly installment
    Emi,
    /// Simple interest
    SimpleInterest,
    /// Compound interest
    CompoundInterest,
}

impl CalculationKind {
    /// Returns the snake_case wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationKind::Emi => "emi",
            CalculationKind::SimpleInterest => "simple_interest",
            CalculationKind::CompoundInterest => "compound_interest",
        }
    }
}

impl fmt::Display for CalculationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of an EMI calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EmiResult {
    emi: MonetaryAmount,
    total_interest: MonetaryAmount,
    total_payment: MonetaryAmount,
}

impl EmiResult {
    /// Builds the record, rounding each field independently.
    #[must_use]
    pub fn new(emi: Decimal, total_interest: Decimal, total_payment: Decimal) -> Self {
        Self {
            emi: MonetaryAmount::new(emi).rounded(),
            total_interest: MonetaryAmount::new(total_interest).rounded(),
            total_payment: MonetaryAmount::new(total_payment).rounded(),
        }
    }

    /// Monthly installment.
    #[must_use]
    pub fn emi(&self) -> MonetaryAmount {
        self.emi
    }

    /// Interest paid over the life of the loan.
    #[must_use]
    pub fn total_interest(&self) -> MonetaryAmount {
        self.total_interest
    }

    /// Principal plus interest.
    #[must_use]
    pub fn total_payment(&self) -> MonetaryAmount {
        self.total_payment
    }
}

/// Result of a simple or compound interest calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterestResult {
    interest: MonetaryAmount,
    final_amount: MonetaryAmount,
}

impl InterestResult {
    /// Builds the record, rounding each field independently.
    #[must_use]
    pub fn new(interest: Decimal, final_amount: Decimal) -> Self {
        Self {
            interest: MonetaryAmount::new(interest).rounded(),
            final_amount: MonetaryAmount::new(final_amount).rounded(),
        }
    }

    /// Interest earned (negative for negative rates).
    #[must_use]
    pub fn interest(&self) -> MonetaryAmount {
        self.interest
    }

    /// Principal plus interest.
    #[must_use]
    pub fn final_amount(&self) -> MonetaryAmount {
        self.final_amount
    }
}

/// Result of any supported calculation, tagged by operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationResult {
    /// EMI result
    Emi(EmiResult),
    /// Simple interest result
    SimpleInterest(InterestResult),
    /// Compound interest result
    CompoundInterest(InterestResult),
}

impl CalculationResult {
    /// Returns the operation that produced this result.
    #[must_use]
    pub fn kind(&self) -> CalculationKind {
        match self {
            CalculationResult::Emi(_) => CalculationKind::Emi,
            CalculationResult::SimpleInterest(_) => CalculationKind::SimpleInterest,
            CalculationResult::CompoundInterest(_) => CalculationKind::CompoundInterest,
        }
    }

    /// Returns the EMI result, if this is one.
    #[must_use]
    pub fn as_emi(&self) -> Option<&EmiResult> {
        match self {
            CalculationResult::Emi(result) => Some(result),
            _ => None,
        }
    }

    /// Returns the interest result, if this is one.
    #[must_use]
    pub fn as_interest(&self) -> Option<&InterestResult> {
        match self {
            CalculationResult::SimpleInterest(result)
            | CalculationResult::CompoundInterest(result) => Some(result),
            CalculationResult::Emi(_) => None,
        }
    }
}
