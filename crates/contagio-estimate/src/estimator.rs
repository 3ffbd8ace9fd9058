//! Impact estimation logic.

use contagio_types::{EstimatorInput, PeriodType, Result};

use crate::result::{EstimationResult, ImpactEstimate};

/// Case-reporting multiplier under the best case assumption: one reported
/// case stands for 10 true infections.
const BEST_CASE_REPORTING_FACTOR: u64 = 10;

/// Case-reporting multiplier under the severe case assumption: one
/// reported case stands for 50 true infections.
const SEVERE_CASE_REPORTING_FACTOR: u64 = 50;

/// Number of normalized days per infection doubling.
const DOUBLING_PERIOD_DAYS: u64 = 3;

/// Fraction of projected infections expected to need hospitalization.
const SEVERE_CASE_RATE: f64 = 0.15;

/// Fraction of total hospital beds assumed reachable for severe patients.
const BED_AVAILABILITY_RATE: f64 = 0.35;

/// Fraction of projected infections expected to need ICU care.
const ICU_CASE_RATE: f64 = 0.05;

/// Fraction of projected infections expected to need ventilators.
const VENTILATOR_CASE_RATE: f64 = 0.02;

/// Growth assumption under which a metric is derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Scenario {
    /// Best case: mild under-reporting of true infections.
    #[default]
    Best,
    /// Severe case: heavy under-detection of true infections.
    Severe,
}

impl Scenario {
    /// Returns the multiplier applied to reported cases to estimate the
    /// number of true current infections.
    #[must_use]
    pub const fn reporting_factor(&self) -> u64 {
        match self {
            Self::Best => BEST_CASE_REPORTING_FACTOR,
            Self::Severe => SEVERE_CASE_REPORTING_FACTOR,
        }
    }

    /// Returns the scenario as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Best => "best",
            Self::Severe => "severe",
        }
    }

    /// Returns both scenarios.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Best, Self::Severe]
    }
}

impl std::fmt::Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Returns the growth multiplier after the given number of normalized days.
///
/// Growth is a step function: infections double once per full
/// [`DOUBLING_PERIOD_DAYS`] window, so the factor is constant inside a
/// window and jumps exactly at its boundary.
const fn doubling_factor(normalized_days: u64) -> u64 {
    let doublings = normalized_days / DOUBLING_PERIOD_DAYS;
    // Past 2^63 the factor no longer fits in u64; saturate.
    if doublings >= 64 {
        u64::MAX
    } else {
        1u64 << doublings
    }
}

/// A validated estimation request plus the derivation chain over it.
///
/// Construction freezes the request: every metric method is a pure read,
/// so a single `Estimator` can serve any number of metric calls, in any
/// order, from any thread.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimator {
    /// Region name.
    region_name: String,
    /// Average age, truncated toward zero from the wire value.
    region_avg_age: i64,
    /// Average daily income per earner, in US dollars.
    region_avg_daily_income_in_usd: f64,
    /// Share of the population earning the average daily income.
    region_avg_daily_income_population: f64,
    /// Unit of the requested time horizon.
    period_type: PeriodType,
    /// Requested time horizon, in `period_type` units.
    time_to_elapse: u64,
    /// Number of officially reported cases.
    reported_cases: u64,
    /// Total population of the region.
    population: u64,
    /// Total number of hospital beds in the region.
    total_hospital_beds: u64,
    /// The request exactly as received, echoed in the result.
    input: EstimatorInput,
}

impl Estimator {
    /// Validates an estimation request and freezes it for computation.
    ///
    /// # Errors
    ///
    /// Returns [`EstimatorError::InvalidPeriodType`] when the request's
    /// period type is not exactly `"days"`, `"weeks"` or `"months"`.
    /// No other field is validated: zero populations, zero beds and zero
    /// reported cases pass through and produce the estimates the formulas
    /// give for them.
    ///
    /// [`EstimatorError::InvalidPeriodType`]: contagio_types::EstimatorError::InvalidPeriodType
    pub fn new(input: &EstimatorInput) -> Result<Self> {
        let period_type: PeriodType = input.period_type.parse()?;

        Ok(Self {
            region_name: input.region.name.clone(),
            // Ages arrive fractional on the wire; integral fields truncate
            // toward zero.
            region_avg_age: input.region.avg_age as i64,
            region_avg_daily_income_in_usd: input.region.avg_daily_income_in_usd,
            region_avg_daily_income_population: input.region.avg_daily_income_population,
            period_type,
            time_to_elapse: input.time_to_elapse,
            reported_cases: input.reported_cases,
            population: input.population,
            total_hospital_beds: input.total_hospital_beds,
            input: input.clone(),
        })
    }

    /// Returns the region name.
    #[must_use]
    pub fn region_name(&self) -> &str {
        &self.region_name
    }

    /// Returns the region's average age, truncated to a whole number.
    #[must_use]
    pub const fn region_avg_age(&self) -> i64 {
        self.region_avg_age
    }

    /// Returns the region's average daily income in US dollars.
    #[must_use]
    pub const fn region_avg_daily_income_in_usd(&self) -> f64 {
        self.region_avg_daily_income_in_usd
    }

    /// Returns the share of the population earning the average income.
    #[must_use]
    pub const fn region_avg_daily_income_population(&self) -> f64 {
        self.region_avg_daily_income_population
    }

    /// Returns the unit of the requested time horizon.
    #[must_use]
    pub const fn period_type(&self) -> PeriodType {
        self.period_type
    }

    /// Returns the requested time horizon in period units.
    #[must_use]
    pub const fn time_to_elapse(&self) -> u64 {
        self.time_to_elapse
    }

    /// Returns the number of officially reported cases.
    #[must_use]
    pub const fn reported_cases(&self) -> u64 {
        self.reported_cases
    }

    /// Returns the total population of the region.
    #[must_use]
    pub const fn population(&self) -> u64 {
        self.population
    }

    /// Returns the total number of hospital beds in the region.
    #[must_use]
    pub const fn total_hospital_beds(&self) -> u64 {
        self.total_hospital_beds
    }

    /// Returns the request this estimator was built from.
    #[must_use]
    pub const fn input(&self) -> &EstimatorInput {
        &self.input
    }

    /// Returns the requested time horizon converted to whole days.
    #[must_use]
    pub const fn normalized_days(&self) -> u64 {
        self.time_to_elapse.saturating_mul(self.period_type.days())
    }

    /// Estimates the number of people currently infected.
    #[must_use]
    pub const fn currently_infected(&self, scenario: Scenario) -> u64 {
        self.reported_cases.saturating_mul(scenario.reporting_factor())
    }

    /// Projects the number of infections at the end of the time horizon.
    #[must_use]
    pub const fn infections_by_requested_time(&self, scenario: Scenario) -> u64 {
        self.currently_infected(scenario)
            .saturating_mul(doubling_factor(self.normalized_days()))
    }

    /// Projects the number of infections severe enough to need
    /// hospitalization.
    #[must_use]
    pub fn severe_cases_by_requested_time(&self, scenario: Scenario) -> u64 {
        (SEVERE_CASE_RATE * self.infections_by_requested_time(scenario) as f64) as u64
    }

    /// Projects the hospital beds left once severe cases are admitted.
    ///
    /// A negative value is a bed deficit and is reported as-is.
    #[must_use]
    pub fn hospital_beds_by_requested_time(&self, scenario: Scenario) -> i64 {
        let available_beds = BED_AVAILABILITY_RATE * self.total_hospital_beds as f64;
        let severe_cases = self.severe_cases_by_requested_time(scenario);

        (available_beds - severe_cases as f64) as i64
    }

    /// Projects the number of infections that will need ICU care.
    #[must_use]
    pub fn cases_for_icu_by_requested_time(&self, scenario: Scenario) -> u64 {
        (ICU_CASE_RATE * self.infections_by_requested_time(scenario) as f64) as u64
    }

    /// Projects the number of infections that will need ventilators.
    #[must_use]
    pub fn cases_for_ventilators_by_requested_time(&self, scenario: Scenario) -> u64 {
        (VENTILATOR_CASE_RATE * self.infections_by_requested_time(scenario) as f64) as u64
    }

    /// Estimates the economic loss over the time horizon, in US dollars.
    #[must_use]
    pub fn dollars_in_flight(&self, scenario: Scenario) -> u64 {
        let days = self.normalized_days();
        if days == 0 {
            // No elapsed time, no quantifiable loss.
            return 0;
        }

        let period_loss = self.infections_by_requested_time(scenario) as f64
            * self.region_avg_daily_income_population
            * self.region_avg_daily_income_in_usd;

        (period_loss / days as f64) as u64
    }

    /// Derives all seven metrics for one scenario.
    #[must_use]
    pub fn impact(&self, scenario: Scenario) -> ImpactEstimate {
        ImpactEstimate::new(
            self.currently_infected(scenario),
            self.infections_by_requested_time(scenario),
            self.severe_cases_by_requested_time(scenario),
            self.hospital_beds_by_requested_time(scenario),
            self.cases_for_icu_by_requested_time(scenario),
            self.cases_for_ventilators_by_requested_time(scenario),
            self.dollars_in_flight(scenario),
        )
    }

    /// Derives both scenarios and packages them with the echoed request.
    #[must_use]
    pub fn result(&self) -> EstimationResult {
        EstimationResult::new(
            self.input.clone(),
            self.impact(Scenario::Best),
            self.impact(Scenario::Severe),
        )
    }
}

/// Runs a full impact estimation for the given request.
///
/// Validates the request, derives both scenarios and returns them with the
/// echoed input. This is the only call external consumers need.
///
/// # Errors
///
/// Returns [`EstimatorError::InvalidPeriodType`] when the request's period
/// type is not recognized.
///
/// [`EstimatorError::InvalidPeriodType`]: contagio_types::EstimatorError::InvalidPeriodType
pub fn estimate(input: &EstimatorInput) -> Result<EstimationResult> {
    Ok(Estimator::new(input)?.result())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contagio_types::{EstimatorError, RegionInfo};

    fn africa_input() -> EstimatorInput {
        EstimatorInput::new(
            RegionInfo::new("Africa", 19.7, 3.0, 0.65),
            "days",
            30,
            674,
            66_622_705,
            1_380_614,
        )
    }

    fn africa_estimator() -> Estimator {
        Estimator::new(&africa_input()).unwrap()
    }

    fn estimator_with_period(period_type: &str, time_to_elapse: u64) -> Estimator {
        let mut input = africa_input();
        input.period_type = period_type.to_string();
        input.time_to_elapse = time_to_elapse;
        Estimator::new(&input).unwrap()
    }

    #[test]
    fn test_invalid_period_type_is_rejected() {
        let mut input = africa_input();
        input.period_type = "year".to_string();

        let err = Estimator::new(&input).unwrap_err();
        assert!(matches!(err, EstimatorError::InvalidPeriodType(_)));
        assert_eq!(err.rejected_value(), Some("year"));

        assert!(estimate(&input).is_err());
    }

    #[test]
    fn test_validation_coerces_fields() {
        let estimator = africa_estimator();

        assert_eq!(estimator.region_name(), "Africa");
        assert_eq!(estimator.region_avg_age(), 19);
        assert_eq!(estimator.period_type(), PeriodType::Days);
        assert_eq!(estimator.reported_cases(), 674);
        assert_eq!(estimator.population(), 66_622_705);
        assert_eq!(estimator.total_hospital_beds(), 1_380_614);
    }

    #[test]
    fn test_normalized_days() {
        assert_eq!(estimator_with_period("days", 30).normalized_days(), 30);
        assert_eq!(estimator_with_period("weeks", 2).normalized_days(), 14);
        assert_eq!(estimator_with_period("months", 3).normalized_days(), 90);
    }

    #[test]
    fn test_currently_infected() {
        let estimator = africa_estimator();

        assert_eq!(estimator.currently_infected(Scenario::Best), 6740);
        assert_eq!(estimator.currently_infected(Scenario::Severe), 33_700);
        // The severe scenario is exactly the 50x vs 10x reporting spread.
        assert_eq!(
            estimator.currently_infected(Scenario::Severe),
            5 * estimator.currently_infected(Scenario::Best)
        );
    }

    #[test]
    fn test_infections_by_requested_time() {
        let estimator = africa_estimator();

        // 30 days -> 10 doublings -> factor 1024.
        assert_eq!(
            estimator.infections_by_requested_time(Scenario::Best),
            6_901_760
        );
        assert_eq!(
            estimator.infections_by_requested_time(Scenario::Severe),
            34_508_800
        );
    }

    #[test]
    fn test_infections_growth_is_a_step_function() {
        let at = |days| {
            estimator_with_period("days", days).infections_by_requested_time(Scenario::Best)
        };

        assert_eq!(at(0), 6740);
        assert_eq!(at(1), 6740);
        assert_eq!(at(2), 6740);
        assert_eq!(at(3), 13_480);
        assert_eq!(at(5), 13_480);
        assert_eq!(at(6), 26_960);
    }

    #[test]
    fn test_infections_honor_period_normalization() {
        // 2 weeks = 14 days -> 4 doublings -> factor 16.
        let estimator = estimator_with_period("weeks", 2);
        assert_eq!(
            estimator.infections_by_requested_time(Scenario::Best),
            107_840
        );
    }

    #[test]
    fn test_severe_cases_by_requested_time() {
        let estimator = africa_estimator();

        assert_eq!(
            estimator.severe_cases_by_requested_time(Scenario::Best),
            1_035_264
        );
        assert_eq!(
            estimator.severe_cases_by_requested_time(Scenario::Severe),
            5_176_320
        );
    }

    #[test]
    fn test_hospital_beds_by_requested_time() {
        let estimator = africa_estimator();

        assert_eq!(
            estimator.hospital_beds_by_requested_time(Scenario::Best),
            -552_049
        );
        assert_eq!(
            estimator.hospital_beds_by_requested_time(Scenario::Severe),
            -4_693_105
        );
    }

    #[test]
    fn test_hospital_beds_with_spare_capacity() {
        let input = EstimatorInput::new(
            RegionInfo::new("Africa", 19.7, 3.0, 0.65),
            "days",
            0,
            1,
            66_622_705,
            1000,
        );
        let estimator = Estimator::new(&input).unwrap();

        // 350 available beds minus 1 severe case / 7 severe cases.
        assert_eq!(estimator.hospital_beds_by_requested_time(Scenario::Best), 349);
        assert_eq!(
            estimator.hospital_beds_by_requested_time(Scenario::Severe),
            343
        );
    }

    #[test]
    fn test_bed_deficit_is_not_clamped_to_zero() {
        let estimator = africa_estimator();
        assert!(estimator.hospital_beds_by_requested_time(Scenario::Best) < 0);
    }

    #[test]
    fn test_cases_for_icu_by_requested_time() {
        let estimator = africa_estimator();

        assert_eq!(
            estimator.cases_for_icu_by_requested_time(Scenario::Best),
            345_088
        );
        assert_eq!(
            estimator.cases_for_icu_by_requested_time(Scenario::Severe),
            1_725_440
        );
    }

    #[test]
    fn test_cases_for_ventilators_by_requested_time() {
        let estimator = africa_estimator();

        assert_eq!(
            estimator.cases_for_ventilators_by_requested_time(Scenario::Best),
            138_035
        );
        assert_eq!(
            estimator.cases_for_ventilators_by_requested_time(Scenario::Severe),
            690_176
        );
    }

    #[test]
    fn test_dollars_in_flight() {
        let estimator = africa_estimator();

        assert_eq!(estimator.dollars_in_flight(Scenario::Best), 448_614);
        assert_eq!(estimator.dollars_in_flight(Scenario::Severe), 2_243_072);
    }

    #[test]
    fn test_dollars_in_flight_with_zero_elapsed_time() {
        let estimator = estimator_with_period("days", 0);

        assert_eq!(estimator.dollars_in_flight(Scenario::Best), 0);
        assert_eq!(estimator.dollars_in_flight(Scenario::Severe), 0);
    }

    #[test]
    fn test_result_matches_golden_run() {
        let result = africa_estimator().result();

        assert_eq!(result.data, africa_input());
        assert_eq!(
            result.impact,
            ImpactEstimate::new(
                6740,
                6_901_760,
                1_035_264,
                -552_049,
                345_088,
                138_035,
                448_614
            )
        );
        assert_eq!(
            result.severe_impact,
            ImpactEstimate::new(
                33_700,
                34_508_800,
                5_176_320,
                -4_693_105,
                1_725_440,
                690_176,
                2_243_072
            )
        );
    }

    #[test]
    fn test_estimate_entry_point() {
        let input = africa_input();
        let result = estimate(&input).unwrap();

        assert_eq!(result, Estimator::new(&input).unwrap().result());
    }

    #[test]
    fn test_severity_orders_every_metric() {
        let estimator = africa_estimator();
        let best = estimator.impact(Scenario::Best);
        let severe = estimator.impact(Scenario::Severe);

        assert!(severe.currently_infected >= best.currently_infected);
        assert!(severe.infections_by_requested_time >= best.infections_by_requested_time);
        assert!(severe.severe_cases_by_requested_time >= best.severe_cases_by_requested_time);
        assert!(severe.cases_for_icu_by_requested_time >= best.cases_for_icu_by_requested_time);
        assert!(
            severe.cases_for_ventilators_by_requested_time
                >= best.cases_for_ventilators_by_requested_time
        );
        assert!(severe.dollars_in_flight >= best.dollars_in_flight);
        // More severe cases consume more beds, so spare capacity shrinks.
        assert!(severe.hospital_beds_by_requested_time <= best.hospital_beds_by_requested_time);
    }

    #[test]
    fn test_growth_saturates_instead_of_wrapping() {
        // 600 days -> 200 doublings, far past what u64 can hold.
        let estimator = estimator_with_period("days", 600);

        assert_eq!(
            estimator.infections_by_requested_time(Scenario::Best),
            u64::MAX
        );
    }

    #[test]
    fn test_scenario_strs() {
        assert_eq!(Scenario::Best.as_str(), "best");
        assert_eq!(Scenario::Severe.as_str(), "severe");
        assert_eq!(Scenario::all().len(), 2);
    }
}
