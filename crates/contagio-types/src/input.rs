//! Estimation request definitions.

use serde::{Deserialize, Serialize};

use crate::RegionInfo;

/// A complete estimation request.
///
/// The record is carried through to the estimation result exactly as
/// received. `period_type` is kept as a raw string here so that rejecting
/// an unknown period is a validation failure with a diagnostic, not a
/// deserialization failure at the caller's boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimatorInput {
    /// Profile of the region being estimated.
    pub region: RegionInfo,
    /// Unit of `time_to_elapse` ("days", "weeks" or "months").
    pub period_type: String,
    /// Requested time horizon, in `period_type` units.
    pub time_to_elapse: u64,
    /// Number of officially reported infection cases.
    pub reported_cases: u64,
    /// Total population of the region.
    pub population: u64,
    /// Total number of hospital beds in the region.
    pub total_hospital_beds: u64,
}

impl EstimatorInput {
    /// Creates a new estimation request.
    #[must_use]
    pub fn new(
        region: RegionInfo,
        period_type: impl Into<String>,
        time_to_elapse: u64,
        reported_cases: u64,
        population: u64,
        total_hospital_beds: u64,
    ) -> Self {
        Self {
            region,
            period_type: period_type.into(),
            time_to_elapse,
            reported_cases,
            population,
            total_hospital_beds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_input() -> EstimatorInput {
        EstimatorInput::new(
            RegionInfo::new("Africa", 19.7, 3.0, 0.65),
            "days",
            30,
            674,
            66_622_705,
            1_380_614,
        )
    }

    #[test]
    fn test_input_wire_names() {
        let json = serde_json::to_value(sample_input()).unwrap();

        assert_eq!(json["region"]["name"], "Africa");
        assert_eq!(json["periodType"], "days");
        assert_eq!(json["timeToElapse"], 30);
        assert_eq!(json["reportedCases"], 674);
        assert_eq!(json["population"], 66_622_705);
        assert_eq!(json["totalHospitalBeds"], 1_380_614);
    }

    #[test]
    fn test_input_deserializes_from_wire_form() {
        let json = r#"{
            "region": {
                "name": "Africa",
                "avgAge": 19.7,
                "avgDailyIncomeInUSD": 3,
                "avgDailyIncomePopulation": 0.65
            },
            "periodType": "days",
            "timeToElapse": 30,
            "reportedCases": 674,
            "population": 66622705,
            "totalHospitalBeds": 1380614
        }"#;

        let input: EstimatorInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, sample_input());
    }
}
