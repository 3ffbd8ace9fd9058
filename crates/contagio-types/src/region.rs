//! Region profile definitions.

use serde::{Deserialize, Serialize};

/// Demographic and economic profile of the region being estimated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionInfo {
    /// Region name (e.g., "Africa").
    pub name: String,
    /// Average age of the population.
    pub avg_age: f64,
    /// Average daily income per earner, in US dollars.
    #[serde(rename = "avgDailyIncomeInUSD")]
    pub avg_daily_income_in_usd: f64,
    /// Share of the population earning the average daily income.
    pub avg_daily_income_population: f64,
}

impl RegionInfo {
    /// Creates a new region profile.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        avg_age: f64,
        avg_daily_income_in_usd: f64,
        avg_daily_income_population: f64,
    ) -> Self {
        Self {
            name: name.into(),
            avg_age,
            avg_daily_income_in_usd,
            avg_daily_income_population,
        }
    }
}

impl std::fmt::Display for RegionInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
