//! Raw request records and their validation.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{coerce_decimal, coerce_frequency, coerce_whole, fields, require};
use crate::error::{AccrueError, AccrueResult};
use crate::types::{CalculationKind, CompoundTerms, InterestTerms, LoanTerms};

fn rejected(kind: CalculationKind, err: AccrueError) -> AccrueError {
    debug!("rejected {} request: {}", kind, err);
    err
}

/// Raw EMI request as received from a caller.
///
/// Accepts `loan_amount` and `annual_rate` as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EmiRequest {
    /// Loan principal.
    #[serde(default, alias = "loan_amount")]
    pub principal: Option<Value>,
    /// Annual rate in percent.
    #[serde(default, alias = "annual_rate")]
    pub annual_rate_percent: Option<Value>,
    /// Tenure in whole years.
    #[serde(default)]
    pub tenure_years: Option<Value>,
}

impl EmiRequest {
    /// Validates the request into loan terms.
    ///
    /// # Errors
    ///
    /// `MissingField`, `TypeError` or `RangeError` for the first violated
    /// constraint.
    pub fn validate(&self) -> AccrueResult<LoanTerms> {
        self.check().map_err(|e| rejected(CalculationKind::Emi, e))
    }

    fn check(&self) -> AccrueResult<LoanTerms> {
        let principal = require(fields::PRINCIPAL, self.principal.as_ref())?;
        let rate = require(fields::ANNUAL_RATE_PERCENT, self.annual_rate_percent.as_ref())?;
        let tenure = require(fields::TENURE_YEARS, self.tenure_years.as_ref())?;

        let principal = coerce_decimal(fields::PRINCIPAL, principal)?;
        let rate = coerce_decimal(fields::ANNUAL_RATE_PERCENT, rate)?;
        let tenure = coerce_whole(fields::TENURE_YEARS, tenure)?;

        LoanTerms::from_decimals(principal, rate, tenure)
    }
}

/// Raw simple interest request.
///
/// Accepts `loan_amount`, `annual_rate` and `rate` as aliases.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleInterestRequest {
    /// Principal amount.
    #[serde(default, alias = "loan_amount")]
    pub principal: Option<Value>,
    /// Annual rate in percent.
    #[serde(default, alias = "annual_rate", alias = "rate")]
    pub annual_rate_percent: Option<Value>,
    /// Accrual period in years.
    #[serde(default)]
    pub time_years: Option<Value>,
}

impl SimpleInterestRequest {
    /// Validates the request into interest terms.
    pub fn validate(&self) -> AccrueResult<InterestTerms> {
        self.check()
            .map_err(|e| rejected(CalculationKind::SimpleInterest, e))
    }

    fn check(&self) -> AccrueResult<InterestTerms> {
        let principal = require(fields::PRINCIPAL, self.principal.as_ref())?;
        let rate = require(fields::ANNUAL_RATE_PERCENT, self.annual_rate_percent.as_ref())?;
        let time = require(fields::TIME_YEARS, self.time_years.as_ref())?;

        let principal = coerce_decimal(fields::PRINCIPAL, principal)?;
        let rate = coerce_decimal(fields::ANNUAL_RATE_PERCENT, rate)?;
        let time = coerce_decimal(fields::TIME_YEARS, time)?;

        InterestTerms::new(principal, rate, time)
    }
}

/// Raw compound interest request.
///
/// Accepts `frequency` as an alias for `compounding_frequency`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompoundInterestRequest {
    /// Principal amount.
    #[serde(default, alias = "loan_amount")]
    pub principal: Option<Value>,
    /// Annual rate in percent.
    #[serde(default, alias = "annual_rate", alias = "rate")]
    pub annual_rate_percent: Option<Value>,
    /// Accrual period in years.
    #[serde(default)]
    pub time_years: Option<Value>,
    /// `monthly`, `quarterly` or `annual`.
    #[serde(default, alias = "frequency")]
    pub compounding_frequency: Option<Value>,
}

impl CompoundInterestRequest {
    /// Validates the request into compound terms.
    ///
    /// An unrecognized frequency is `UnsupportedFrequency`; it is never
    /// replaced by a default.
    pub fn validate(&self) -> AccrueResult<CompoundTerms> {
        self.check()
            .map_err(|e| rejected(CalculationKind::CompoundInterest, e))
    }

    fn check(&self) -> AccrueResult<CompoundTerms> {
        let principal = require(fields::PRINCIPAL, self.principal.as_ref())?;
        let rate = require(fields::ANNUAL_RATE_PERCENT, self.annual_rate_percent.as_ref())?;
        let time = require(fields::TIME_YEARS, self.time_years.as_ref())?;
        let frequency = require(
            fields::COMPOUNDING_FREQUENCY,
            self.compounding_frequency.as_ref(),
        )?;

        let principal = coerce_decimal(fields::PRINCIPAL, principal)?;
        let rate = coerce_decimal(fields::ANNUAL_RATE_PERCENT, rate)?;
        let time = coerce_decimal(fields::TIME_YEARS, time)?;
        let frequency = coerce_frequency(fields::COMPOUNDING_FREQUENCY, frequency)?;

        CompoundTerms::new(principal, rate, time, frequency)
    }
}

/// A raw request for any supported calculation, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalculationRequest {
    /// EMI request
    Emi(EmiRequest),
    /// Simple interest request
    SimpleInterest(SimpleInterestRequest),
    /// Compound interest request
    CompoundInterest(CompoundInterestRequest),
}

/// Validated terms for any supported calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatedRequest {
    /// Loan terms for EMI
    Emi(LoanTerms),
    /// Terms for simple interest
    SimpleInterest(InterestTerms),
    /// Terms for compound interest
    CompoundInterest(CompoundTerms),
}

impl CalculationRequest {
    /// Returns the requested operation.
    #[must_use]
    pub fn kind(&self) -> CalculationKind {
        match self {
            CalculationRequest::Emi(_) => CalculationKind::Emi,
            CalculationRequest::SimpleInterest(_) => CalculationKind::SimpleInterest,
            CalculationRequest::CompoundInterest(_) => CalculationKind::CompoundInterest,
        }
    }

    /// Validates whichever request this is.
    pub fn validate(&self) -> AccrueResult<ValidatedRequest> {
        match self {
            CalculationRequest::Emi(request) => request.validate().map(ValidatedRequest::Emi),
            CalculationRequest::SimpleInterest(request) => {
                request.validate().map(ValidatedRequest::SimpleInterest)
            }
            CalculationRequest::CompoundInterest(request) => {
                request.validate().map(ValidatedRequest::CompoundInterest)
            }
        }
    }
}
