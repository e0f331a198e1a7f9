//! Domain types for loan and interest calculations.
//!
//! This module provides type-safe representations of the calculation inputs
//! and outputs:
//!
//! - [`MonetaryAmount`]: exact decimal money value
//! - [`CompoundingFrequency`]: how often interest is capitalized
//! - [`LoanTerms`], [`InterestTerms`], [`CompoundTerms`]: validated inputs
//! - [`EmiResult`], [`InterestResult`], [`CalculationResult`]: rounded outputs

mod frequency;
mod money;
mod result;
mod terms;

pub use frequency::CompoundingFrequency;
pub use money::MonetaryAmount;
pub use result::{CalculationKind, CalculationResult, EmiResult, InterestResult};
pub use terms::{CompoundTerms, InterestTerms, LoanTerms};
