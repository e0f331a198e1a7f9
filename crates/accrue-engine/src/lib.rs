//! # Accrue Engine
//!
//! The formula engine for Accrue: three pure calculators over validated
//! terms.
//!
//! This crate provides:
//! - [`compute_emi`]: equated monthly installment for an amortizing loan
//! - [`compute_simple_interest`]: interest on principal only
//! - [`compute_compound_interest`]: interest capitalized monthly, quarterly
//!   or annually
//! - [`calculate`]: validate-and-compute for any raw [`CalculationRequest`]
//!
//! ## Architecture
//!
//! ```text
//! raw request ─> validation (accrue-core) ─> terms ─> calculator ─> rounded result
//!                                                        │
//!                                                        └─> accrue-math (exact powers, rounding)
//! ```
//!
//! Calculators hold no state and do no I/O, so they can be called from any
//! number of threads at once.
//!
//! ## Usage
//!
//! ```rust
//! use accrue_engine::emi;
//! use rust_decimal_macros::dec;
//!
//! let result = emi(dec!(100000), dec!(8.5), 20).unwrap();
//! assert_eq!(result.emi().value(), dec!(867.82));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calculator;
pub mod compound;
pub mod emi;
pub mod simple;

// Re-exports
pub use accrue_core::{
    AccrueError, AccrueResult, CalculationKind, CalculationResult, CompoundTerms,
    CompoundingFrequency, EmiResult, InterestResult, InterestTerms, LoanTerms, MonetaryAmount,
};
pub use accrue_core::validation::{
    CalculationRequest, CompoundInterestRequest, EmiRequest, SimpleInterestRequest,
    ValidatedRequest,
};
pub use calculator::{calculate, compute};
pub use compound::{compound_interest, compute_compound_interest};
pub use emi::{compute_emi, emi};
pub use simple::{compute_simple_interest, simple_interest};
