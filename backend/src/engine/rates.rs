//! Hidden-cost rate sources
//!
//! The offshore scenario draws its hidden-cost rates from user input; the
//! experienced scenario uses fixed constants reflecting the lower overhead
//! of an in-house senior hire. Both feed the same scenario computation.

use serde::{Deserialize, Serialize};

use crate::models::input::CalculatorInput;

/// Working days in one month of engagement
pub const WORKING_DAYS_PER_MONTH: f64 = 22.0;
/// Working hours in one day
pub const WORKING_HOURS_PER_DAY: f64 = 8.0;
/// Working days in one week
pub const WORKING_DAYS_PER_WEEK: f64 = 5.0;
/// Schedule weeks counted per month
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Experienced scenario: senior supervision hours per week
pub const EXPERIENCED_SUPERVISION_HOURS_PER_WEEK: f64 = 1.5;
/// Experienced scenario: rework rate (7.5%)
pub const EXPERIENCED_REWORK_RATE: f64 = 0.075;
/// Experienced scenario: timeline overrun rate (5%)
pub const EXPERIENCED_OVERRUN_RATE: f64 = 0.05;
/// Experienced scenario: onboarding duration in weeks
pub const EXPERIENCED_ONBOARDING_WEEKS: f64 = 2.0;

/// Share of senior time consumed by onboarding an offshore team
pub const OFFSHORE_ONBOARDING_SENIOR_FRACTION: f64 = 0.2;
/// Share of senior time consumed by onboarding an experienced hire
pub const EXPERIENCED_ONBOARDING_SENIOR_FRACTION: f64 = 0.1;

/// Hidden-cost rates for one scenario
///
/// Rates are fractions (0.35 = 35%), durations are in their named units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioRates {
    /// Senior supervision hours per schedule week
    pub supervision_hours_per_week: f64,

    /// Share of the apparent cost spent redoing deliverables
    pub rework_rate: f64,

    /// Share of scheduled days added by timeline slip
    pub overrun_rate: f64,

    /// Onboarding duration in weeks
    pub onboarding_weeks: f64,

    /// Share of senior time consumed during onboarding
    pub onboarding_senior_fraction: f64,
}

impl ScenarioRates {
    /// Offshore rates, drawn from user input
    pub fn offshore(input: &CalculatorInput) -> Self {
        Self {
            supervision_hours_per_week: input.supervision_hours_per_week,
            rework_rate: input.rework_rate(),
            overrun_rate: input.overrun_rate(),
            onboarding_weeks: input.onboarding_weeks,
            onboarding_senior_fraction: OFFSHORE_ONBOARDING_SENIOR_FRACTION,
        }
    }

    /// Experienced in-house rates, fixed by the model
    pub fn experienced() -> Self {
        Self {
            supervision_hours_per_week: EXPERIENCED_SUPERVISION_HOURS_PER_WEEK,
            rework_rate: EXPERIENCED_REWORK_RATE,
            overrun_rate: EXPERIENCED_OVERRUN_RATE,
            onboarding_weeks: EXPERIENCED_ONBOARDING_WEEKS,
            onboarding_senior_fraction: EXPERIENCED_ONBOARDING_SENIOR_FRACTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offshore_rates_follow_input() {
        let input = CalculatorInput {
            supervision_hours_per_week: 10.0,
            rework_rate_percent: 50.0,
            overrun_rate_percent: 20.0,
            onboarding_weeks: 4.0,
            ..CalculatorInput::default()
        };
        let rates = ScenarioRates::offshore(&input);
        assert_eq!(rates.supervision_hours_per_week, 10.0);
        assert_eq!(rates.rework_rate, 0.5);
        assert_eq!(rates.overrun_rate, 0.2);
        assert_eq!(rates.onboarding_weeks, 4.0);
        assert_eq!(
            rates.onboarding_senior_fraction,
            OFFSHORE_ONBOARDING_SENIOR_FRACTION
        );
    }

    #[test]
    fn test_experienced_rates_ignore_input() {
        let rates = ScenarioRates::experienced();
        assert_eq!(rates.supervision_hours_per_week, 1.5);
        assert_eq!(rates.rework_rate, 0.075);
        assert_eq!(rates.overrun_rate, 0.05);
        assert_eq!(rates.onboarding_weeks, 2.0);
        assert_eq!(rates.onboarding_senior_fraction, 0.1);
    }
}
