//! Compounding frequency.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::AccrueError;

/// How many times per year interest is capitalized into principal.
///
/// Parsing is case-insensitive and strict: anything other than monthly,
/// quarterly or annual is rejected, never substituted.
///
/// # Example
///
/// ```rust
/// use accrue_core::CompoundingFrequency;
///
/// let freq: CompoundingFrequency = "Quarterly".parse().unwrap();
/// assert_eq!(freq.periods_per_year(), 4);
/// assert!("weekly".parse::<CompoundingFrequency>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompoundingFrequency {
    /// Twelve periods per year
    Monthly,
    /// Four periods per year
    Quarterly,
    /// One period per year
    Annual,
}

impl CompoundingFrequency {
    /// Returns the number of compounding periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Annual => 1,
        }
    }

    /// Returns the lowercase wire name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Annual => "annual",
        }
    }
}

impl FromStr for CompoundingFrequency {
    type Err = AccrueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(CompoundingFrequency::Monthly),
            "quarterly" => Ok(CompoundingFrequency::Quarterly),
            "annual" | "annually" => Ok(CompoundingFrequency::Annual),
            _ => Err(AccrueError::unsupported_frequency(s)),
        }
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_periods_per_year() {
        assert_eq!(CompoundingFrequency::Monthly.periods_per_year(), 12);
        assert_eq!(CompoundingFrequency::Quarterly.periods_per_year(), 4);
        assert_eq!(CompoundingFrequency::Annual.periods_per_year(), 1);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("monthly".parse(), Ok(CompoundingFrequency::Monthly));
        assert_eq!("MONTHLY".parse(), Ok(CompoundingFrequency::Monthly));
        assert_eq!(" Quarterly ".parse(), Ok(CompoundingFrequency::Quarterly));
        assert_eq!("annually".parse(), Ok(CompoundingFrequency::Annual));
    }

    #[test]
    fn test_unknown_frequency_is_rejected() {
        for text in ["weekly", "daily", "", "12", "month"] {
            let err = text.parse::<CompoundingFrequency>().unwrap_err();
            assert_eq!(err, AccrueError::unsupported_frequency(text));
        }
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for freq in [
            CompoundingFrequency::Monthly,
            CompoundingFrequency::Quarterly,
            CompoundingFrequency::Annual,
        ] {
            assert_eq!(freq.to_string().parse(), Ok(freq));
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&CompoundingFrequency::Quarterly).unwrap();
        assert_eq!(json, "\"quarterly\"");
    }
}
