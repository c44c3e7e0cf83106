//! Per-scenario cost breakdown
//!
//! One `CostBreakdown` is produced for each scenario (offshore and
//! experienced). The derived totals are computed at construction time so the
//! invariants hold for every instance:
//!
//! - `hidden_total` = supervision + rework + overrun + onboarding
//! - `true_cost` = `apparent_cost` + `hidden_total`

use serde::{Deserialize, Serialize};

/// Cost breakdown for a single scenario
///
/// All amounts are currency values; non-negative under valid (non-negative)
/// inputs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    /// Quoted cost: day rate times scheduled working days
    pub apparent_cost: f64,

    /// Senior staff time spent reviewing and managing the engagement
    pub supervision_cost: f64,

    /// Deliverables that have to be redone, as a share of the apparent cost
    pub rework_cost: f64,

    /// Additional delivery days caused by timeline slip
    pub overrun_cost: f64,

    /// Senior staff time spent on knowledge transfer during ramp-up
    pub onboarding_cost: f64,

    /// Sum of the four hidden components
    pub hidden_total: f64,

    /// Apparent cost plus all hidden costs
    pub true_cost: f64,
}

impl CostBreakdown {
    /// Build a breakdown from its component costs, deriving the totals
    ///
    /// # Example
    /// ```
    /// use cost_model_core_rs::CostBreakdown;
    ///
    /// let b = CostBreakdown::from_components(100.0, 10.0, 20.0, 30.0, 40.0);
    /// assert_eq!(b.hidden_total, 100.0);
    /// assert_eq!(b.true_cost, 200.0);
    /// ```
    pub fn from_components(
        apparent_cost: f64,
        supervision_cost: f64,
        rework_cost: f64,
        overrun_cost: f64,
        onboarding_cost: f64,
    ) -> Self {
        let hidden_total = supervision_cost + rework_cost + overrun_cost + onboarding_cost;
        Self {
            apparent_cost,
            supervision_cost,
            rework_cost,
            overrun_cost,
            onboarding_cost,
            hidden_total,
            true_cost: apparent_cost + hidden_total,
        }
    }

    /// Recompute the sum of the four hidden components
    ///
    /// Always equal to `hidden_total` for breakdowns built through
    /// [`CostBreakdown::from_components`]; exposed for invariant checks.
    pub fn hidden_component_sum(&self) -> f64 {
        self.supervision_cost + self.rework_cost + self.overrun_cost + self.onboarding_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_totals_derived_at_construction() {
        let b = CostBreakdown::from_components(59400.0, 23040.0, 20790.0, 14850.0, 5760.0);
        assert_eq!(b.hidden_total, b.hidden_component_sum());
        assert_eq!(b.true_cost, b.apparent_cost + b.hidden_total);
    }
}
