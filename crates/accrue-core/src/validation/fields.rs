//! Field names as they appear on the wire and in error messages.

/// Loan or investment principal.
pub const PRINCIPAL: &str = "principal";
/// Annual interest rate in percent.
pub const ANNUAL_RATE_PERCENT: &str = "annual_rate_percent";
/// Loan tenure in whole years.
pub const TENURE_YEARS: &str = "tenure_years";
/// Accrual period in years.
pub const TIME_YEARS: &str = "time_years";
/// Compounding frequency name.
pub const COMPOUNDING_FREQUENCY: &str = "compounding_frequency";
