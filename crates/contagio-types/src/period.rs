//! Time horizon period unit definitions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unit of the requested time horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    /// Plain days (no conversion).
    #[default]
    Days,
    /// Weeks (7 days each).
    Weeks,
    /// Months (30 days each).
    Months,
}

impl PeriodType {
    /// Returns the number of days in one unit of this period.
    #[must_use]
    pub const fn days(&self) -> u64 {
        match self {
            Self::Days => 1,
            Self::Weeks => 7,
            Self::Months => 30,
        }
    }

    /// Returns the period type as a string identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Days => "days",
            Self::Weeks => "weeks",
            Self::Months => "months",
        }
    }

    /// Returns all available period types.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Days, Self::Weeks, Self::Months]
    }
}

impl std::fmt::Display for PeriodType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PeriodType {
    type Err = PeriodTypeParseError;

    // Matching is exact and case-sensitive: "Days" or "DAYS" must be
    // rejected, not normalized.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "days" => Ok(Self::Days),
            "weeks" => Ok(Self::Weeks),
            "months" => Ok(Self::Months),
            _ => Err(PeriodTypeParseError(s.to_string())),
        }
    }
}

/// Error returned when parsing an invalid period type string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodTypeParseError(pub(crate) String);

impl PeriodTypeParseError {
    /// Returns the rejected period type value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PeriodTypeParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "periodType must be days, weeks or months, got '{}'",
            self.0
        )
    }
}

impl std::error::Error for PeriodTypeParseError {}
