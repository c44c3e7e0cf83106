//! Report assembly and the comparison step
//!
//! `evaluate` is the model's single entry point: both scenario breakdowns
//! plus the comparison over the offshore baseline. Breakdowns are total
//! functions; only the comparison divides, so only the comparison can fail.
//!
//! # Zero-baseline policy
//!
//! The comparison percentages divide by the offshore apparent cost, the
//! offshore day rate, and the offshore true cost. When such a baseline is
//! zero (duration 0, or a zero rate) the percentage has no defined value.
//! Rather than emitting NaN or silently clamping to 0%, the comparison
//! reports a domain error naming the degenerate baseline.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::engine::rates::ScenarioRates;
use crate::engine::scenario::{compute_scenario, EngagementSchedule};
use crate::models::breakdown::CostBreakdown;
use crate::models::comparison::{ComparisonResult, RiskAssessment};
use crate::models::input::CalculatorInput;

/// Errors raised by the comparison step when a baseline is degenerate
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CostModelError {
    #[error(
        "offshore apparent cost is zero ({duration_months} months at {day_rate}/day): \
         cost increase percentage is undefined"
    )]
    ZeroApparentCost { duration_months: f64, day_rate: f64 },

    #[error("offshore day rate is zero: rate premium percentage is undefined")]
    ZeroOffshoreDayRate,

    #[error("offshore true cost is zero: true-cost difference percentage is undefined")]
    ZeroOffshoreTrueCost,
}

/// Complete model output for one set of inputs
///
/// Stateless: nothing survives past its construction, and re-evaluating the
/// same inputs yields an identical report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostReport {
    /// Offshore/outsourced scenario
    pub offshore: CostBreakdown,

    /// Experienced in-house scenario
    pub experienced: CostBreakdown,

    /// Cross-scenario metrics over the offshore baseline
    pub comparison: ComparisonResult,
}

/// Evaluate the cost model for one set of inputs
///
/// # Errors
/// Returns [`CostModelError`] when a comparison baseline is zero; see the
/// module-level zero-baseline policy.
///
/// # Example
/// ```
/// use cost_model_core_rs::{evaluate, CalculatorInput};
///
/// let report = evaluate(&CalculatorInput::default()).unwrap();
/// assert_eq!(report.offshore.apparent_cost, 59400.0);
/// assert!(report.comparison.risk_message.starts_with("Pay"));
/// ```
pub fn evaluate(input: &CalculatorInput) -> Result<CostReport, CostModelError> {
    let schedule = EngagementSchedule::from_duration_months(input.duration_months);

    let offshore = compute_scenario(
        &schedule,
        input.offshore_day_rate,
        input.senior_hourly_rate,
        &ScenarioRates::offshore(input),
    );
    let experienced = compute_scenario(
        &schedule,
        input.experienced_day_rate,
        input.senior_hourly_rate,
        &ScenarioRates::experienced(),
    );

    let comparison = compare(input, &offshore, &experienced)?;

    Ok(CostReport {
        offshore,
        experienced,
        comparison,
    })
}

/// Derive the comparison metrics from the two breakdowns
fn compare(
    input: &CalculatorInput,
    offshore: &CostBreakdown,
    experienced: &CostBreakdown,
) -> Result<ComparisonResult, CostModelError> {
    if input.offshore_day_rate == 0.0 {
        return Err(CostModelError::ZeroOffshoreDayRate);
    }
    if offshore.apparent_cost == 0.0 {
        return Err(CostModelError::ZeroApparentCost {
            duration_months: input.duration_months,
            day_rate: input.offshore_day_rate,
        });
    }
    if offshore.true_cost == 0.0 {
        return Err(CostModelError::ZeroOffshoreTrueCost);
    }

    let cost_increase_percent =
        (offshore.true_cost - offshore.apparent_cost) / offshore.apparent_cost * 100.0;
    let rate_premium_percent =
        (input.experienced_day_rate - input.offshore_day_rate) / input.offshore_day_rate * 100.0;
    let true_difference_percent =
        (experienced.true_cost - offshore.true_cost) / offshore.true_cost * 100.0;

    let verdict = RiskAssessment::from_true_difference(true_difference_percent);

    Ok(ComparisonResult {
        cost_increase_percent,
        rate_premium_percent,
        true_difference_percent,
        risk_message: verdict.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_duration_is_a_domain_error() {
        let input = CalculatorInput {
            duration_months: 0.0,
            ..CalculatorInput::default()
        };
        let err = evaluate(&input).unwrap_err();
        assert!(matches!(err, CostModelError::ZeroApparentCost { .. }));
    }

    #[test]
    fn test_zero_offshore_day_rate_is_a_domain_error() {
        let input = CalculatorInput {
            offshore_day_rate: 0.0,
            ..CalculatorInput::default()
        };
        let err = evaluate(&input).unwrap_err();
        assert_eq!(err, CostModelError::ZeroOffshoreDayRate);
    }
}
