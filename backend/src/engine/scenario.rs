//! Scenario computation
//!
//! The same cost shape is computed for both scenarios; only the day rate and
//! the hidden-cost rate source differ. The computation is a total function:
//! any finite inputs produce a breakdown.

use serde::{Deserialize, Serialize};

use crate::engine::rates::{
    ScenarioRates, WEEKS_PER_MONTH, WORKING_DAYS_PER_MONTH, WORKING_DAYS_PER_WEEK,
    WORKING_HOURS_PER_DAY,
};
use crate::models::breakdown::CostBreakdown;

/// Engagement schedule derived from the duration
///
/// # Example
/// ```
/// use cost_model_core_rs::EngagementSchedule;
///
/// let schedule = EngagementSchedule::from_duration_months(6.0);
/// assert_eq!(schedule.total_days, 132.0);
/// assert_eq!(schedule.total_weeks, 24.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementSchedule {
    /// Scheduled working days (months x 22)
    pub total_days: f64,

    /// Scheduled weeks (months x 4)
    pub total_weeks: f64,
}

impl EngagementSchedule {
    /// Derive the schedule from the engagement duration in months
    pub fn from_duration_months(duration_months: f64) -> Self {
        Self {
            total_days: duration_months * WORKING_DAYS_PER_MONTH,
            total_weeks: duration_months * WEEKS_PER_MONTH,
        }
    }
}

/// Compute one scenario's cost breakdown
///
/// * `day_rate` - the scenario's quoted day rate
/// * `senior_hourly_rate` - senior staff rate charged for supervision and
///   onboarding in both scenarios
/// * `rates` - the scenario's hidden-cost rate source
///
/// # Example
/// ```
/// use cost_model_core_rs::{
///     compute_scenario, CalculatorInput, EngagementSchedule, ScenarioRates,
/// };
///
/// let input = CalculatorInput::default();
/// let schedule = EngagementSchedule::from_duration_months(input.duration_months);
/// let offshore = compute_scenario(
///     &schedule,
///     input.offshore_day_rate,
///     input.senior_hourly_rate,
///     &ScenarioRates::offshore(&input),
/// );
/// assert_eq!(offshore.apparent_cost, 59400.0);
/// ```
pub fn compute_scenario(
    schedule: &EngagementSchedule,
    day_rate: f64,
    senior_hourly_rate: f64,
    rates: &ScenarioRates,
) -> CostBreakdown {
    // Quoted cost: day rate over the full schedule
    let apparent_cost = day_rate * schedule.total_days;

    // Senior staff time reviewing and managing the work
    let supervision_cost =
        rates.supervision_hours_per_week * schedule.total_weeks * senior_hourly_rate;

    // Share of deliverables that has to be redone
    let rework_cost = apparent_cost * rates.rework_rate;

    // Additional delivery days caused by timeline slip, billed at the same rate
    let overrun_days = schedule.total_days * rates.overrun_rate;
    let overrun_cost = overrun_days * day_rate;

    // Senior time spent on knowledge transfer during ramp-up: a fraction of a
    // full senior week (8h x 5 days) per onboarding week
    let onboarding_cost = rates.onboarding_weeks
        * (WORKING_HOURS_PER_DAY * WORKING_DAYS_PER_WEEK)
        * senior_hourly_rate
        * rates.onboarding_senior_fraction;

    CostBreakdown::from_components(
        apparent_cost,
        supervision_cost,
        rework_cost,
        overrun_cost,
        onboarding_cost,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_zeroes_schedule_driven_costs() {
        let schedule = EngagementSchedule::from_duration_months(0.0);
        let rates = ScenarioRates::experienced();
        let b = compute_scenario(&schedule, 1200.0, 120.0, &rates);
        assert_eq!(b.apparent_cost, 0.0);
        assert_eq!(b.supervision_cost, 0.0);
        assert_eq!(b.overrun_cost, 0.0);
        // Onboarding is schedule-independent and still accrues
        assert!(b.onboarding_cost > 0.0);
        assert_eq!(b.true_cost, b.onboarding_cost);
    }
}
