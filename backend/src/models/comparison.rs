//! Cross-scenario comparison metrics
//!
//! Percentages here are derived ratios over the offshore baseline and are
//! never stored independently of the breakdowns they came from. The risk
//! message is modelled as an enum so callers can branch on the verdict
//! without parsing text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict of the risk-adjusted value comparison
///
/// Derived from the signed true-cost difference: a positive difference means
/// the experienced engagement costs more in absolute terms (a premium paid
/// for delivery certainty), a non-positive difference means it is outright
/// cheaper once hidden costs are counted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RiskAssessment {
    /// Experienced true cost exceeds offshore true cost
    PayForCertainty {
        /// Premium over the offshore true cost, in percent
        premium_percent: f64,
    },

    /// Experienced true cost is at or below offshore true cost
    SaveWithLowerRisk {
        /// Savings relative to the offshore true cost, in percent
        savings_percent: f64,
    },
}

impl RiskAssessment {
    /// Classify a signed true-cost difference (experienced vs offshore,
    /// in percent of the offshore true cost)
    ///
    /// # Example
    /// ```
    /// use cost_model_core_rs::RiskAssessment;
    ///
    /// let verdict = RiskAssessment::from_true_difference(-36.0);
    /// assert_eq!(verdict.to_string(), "Save 36% with lower risk");
    /// ```
    pub fn from_true_difference(true_difference_percent: f64) -> Self {
        if true_difference_percent > 0.0 {
            Self::PayForCertainty {
                premium_percent: true_difference_percent,
            }
        } else {
            Self::SaveWithLowerRisk {
                // abs() rather than negation keeps a zero difference from
                // rendering as "-0"
                savings_percent: true_difference_percent.abs(),
            }
        }
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PayForCertainty { premium_percent } => {
                write!(f, "Pay {}% more for certainty", premium_percent.round())
            }
            Self::SaveWithLowerRisk { savings_percent } => {
                write!(f, "Save {}% with lower risk", savings_percent.round())
            }
        }
    }
}

/// Comparison of the two scenarios against the offshore baseline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    /// Offshore true cost over its apparent cost, in percent
    pub cost_increase_percent: f64,

    /// Experienced day rate over the offshore day rate, in percent
    pub rate_premium_percent: f64,

    /// Experienced true cost vs offshore true cost, in percent (signed)
    pub true_difference_percent: f64,

    /// Rendered risk message ("Pay ...% more for certainty" /
    /// "Save ...% with lower risk")
    pub risk_message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_difference_is_a_premium() {
        let verdict = RiskAssessment::from_true_difference(48.2);
        assert_eq!(
            verdict,
            RiskAssessment::PayForCertainty {
                premium_percent: 48.2
            }
        );
        assert_eq!(verdict.to_string(), "Pay 48% more for certainty");
    }

    #[test]
    fn test_zero_difference_reads_as_savings() {
        let verdict = RiskAssessment::from_true_difference(0.0);
        assert_eq!(verdict.to_string(), "Save 0% with lower risk");
    }
}
