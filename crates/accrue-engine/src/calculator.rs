//! Dispatch over calculation kinds.

use tracing::debug;

use accrue_core::{AccrueResult, CalculationResult};
use accrue_core::validation::{CalculationRequest, ValidatedRequest};

use crate::compound::compute_compound_interest;
use crate::emi::compute_emi;
use crate::simple::compute_simple_interest;

/// Runs the calculator matching already validated terms.
#[must_use]
pub fn compute(request: &ValidatedRequest) -> CalculationResult {
    match request {
        ValidatedRequest::Emi(terms) => CalculationResult::Emi(compute_emi(terms)),
        ValidatedRequest::SimpleInterest(terms) => {
            CalculationResult::SimpleInterest(compute_simple_interest(terms))
        }
        ValidatedRequest::CompoundInterest(terms) => {
            CalculationResult::CompoundInterest(compute_compound_interest(terms))
        }
    }
}

/// Validates a raw request of any kind and computes its result.
///
/// # Errors
///
/// The first validation failure, unchanged.
///
/// # Example
///
/// ```rust
/// use accrue_engine::{calculate, CalculationKind, CalculationRequest};
/// use serde_json::json;
///
/// let request: CalculationRequest = serde_json::from_value(json!({
///     "kind": "simple_interest",
///     "principal": 10000,
///     "annual_rate_percent": 5,
///     "time_years": 2
/// }))
/// .unwrap();
///
/// let result = calculate(&request).unwrap();
/// assert_eq!(result.kind(), CalculationKind::SimpleInterest);
/// assert_eq!(result.as_interest().unwrap().interest().to_string(), "1000.00");
/// ```
pub fn calculate(request: &CalculationRequest) -> AccrueResult<CalculationResult> {
    let kind = request.kind();
    let validated = request.validate()?;
    debug!("dispatching {} calculation", kind);
    Ok(compute(&validated))
}
