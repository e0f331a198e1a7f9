//! # Accrue Core
//!
//! Domain types, errors, and input validation for the Accrue calculation
//! engine.
//!
//! This crate provides:
//!
//! - **Types**: [`MonetaryAmount`], [`CompoundingFrequency`], the validated
//!   term records ([`LoanTerms`], [`InterestTerms`], [`CompoundTerms`]) and the
//!   rounded result records
//! - **Errors**: the closed [`AccrueError`] taxonomy
//! - **Validation**: raw request records that check presence, then type, then
//!   range, and report the first failure
//!
//! ## Example
//!
//! ```rust
//! use accrue_core::prelude::*;
//! use serde_json::json;
//!
//! let request: EmiRequest = serde_json::from_value(json!({
//!     "principal": 100000,
//!     "annual_rate_percent": 8.5,
//!     "tenure_years": 20
//! }))
//! .unwrap();
//!
//! let terms = request.validate().unwrap();
//! assert_eq!(terms.months(), 240);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod types;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{AccrueError, AccrueResult};
    pub use crate::types::{
        CalculationKind, CalculationResult, CompoundTerms, CompoundingFrequency, EmiResult,
        InterestResult, InterestTerms, LoanTerms, MonetaryAmount,
    };
    pub use crate::validation::{
        CalculationRequest, CompoundInterestRequest, EmiRequest, SimpleInterestRequest,
        ValidatedRequest,
    };
}

// Re-export commonly used types at crate root
pub use error::{AccrueError, AccrueResult};
pub use types::{
    CalculationKind, CalculationResult, CompoundTerms, CompoundingFrequency, EmiResult,
    InterestResult, InterestTerms, LoanTerms, MonetaryAmount,
};
