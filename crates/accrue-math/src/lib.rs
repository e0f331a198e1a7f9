//! # Accrue Math
//!
//! Exact base-10 arithmetic for the Accrue calculation engine.
//!
//! This crate provides:
//!
//! - **Rounding**: round-half-up to a fixed number of fractional digits
//! - **Powers**: integer exponentiation by repeated `Decimal` multiplication,
//!   and mixed whole/fractional period powers for compounding
//!
//! ## Design Philosophy
//!
//! - **No Binary Floats**: every value stays a `rust_decimal::Decimal`
//! - **Round Once**: intermediate values are never rounded; only reported
//!   figures go through [`round_money`]
//!
//! ## Example
//!
//! ```rust
//! use accrue_math::{pow_int, round_money};
//! use rust_decimal_macros::dec;
//!
//! let growth = pow_int(dec!(1.1), 2);
//! assert_eq!(growth, dec!(1.21));
//! assert_eq!(round_money(dec!(2.345)).to_string(), "2.35");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod power;
pub mod rounding;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::power::{pow_int, pow_periods, Periods};
    pub use crate::rounding::{percent_to_rate, round_half_up, round_money, MONEY_SCALE};
}

pub use power::{pow_int, pow_periods, Periods};
pub use rounding::{percent_to_rate, round_half_up, round_money, MONEY_SCALE};
