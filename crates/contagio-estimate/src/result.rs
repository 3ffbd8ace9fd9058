//! Estimation output records.

use serde::{Deserialize, Serialize};

use contagio_types::EstimatorInput;

/// The seven derived impact metrics for one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEstimate {
    /// Estimated number of people currently infected.
    pub currently_infected: u64,
    /// Projected infections at the end of the requested time horizon.
    pub infections_by_requested_time: u64,
    /// Projected infections severe enough to need hospitalization.
    pub severe_cases_by_requested_time: u64,
    /// Hospital beds left after severe cases are admitted. Negative means
    /// a bed deficit.
    pub hospital_beds_by_requested_time: i64,
    /// Projected infections that will need ICU care.
    #[serde(rename = "casesForICUByRequestedTime")]
    pub cases_for_icu_by_requested_time: u64,
    /// Projected infections that will need ventilators.
    pub cases_for_ventilators_by_requested_time: u64,
    /// Projected economic loss over the horizon, in US dollars.
    pub dollars_in_flight: u64,
}

impl ImpactEstimate {
    /// Creates a new impact estimate.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        currently_infected: u64,
        infections_by_requested_time: u64,
        severe_cases_by_requested_time: u64,
        hospital_beds_by_requested_time: i64,
        cases_for_icu_by_requested_time: u64,
        cases_for_ventilators_by_requested_time: u64,
        dollars_in_flight: u64,
    ) -> Self {
        Self {
            currently_infected,
            infections_by_requested_time,
            severe_cases_by_requested_time,
            hospital_beds_by_requested_time,
            cases_for_icu_by_requested_time,
            cases_for_ventilators_by_requested_time,
            dollars_in_flight,
        }
    }
}

/// A full estimation run: the request as received plus both scenarios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationResult {
    /// The estimation request, echoed exactly as received.
    pub data: EstimatorInput,
    /// Best case estimate.
    pub impact: ImpactEstimate,
    /// Severe case estimate.
    pub severe_impact: ImpactEstimate,
}

impl EstimationResult {
    /// Creates a new estimation result.
    #[must_use]
    pub const fn new(
        data: EstimatorInput,
        impact: ImpactEstimate,
        severe_impact: ImpactEstimate,
    ) -> Self {
        Self {
            data,
            impact,
            severe_impact,
        }
    }
}
