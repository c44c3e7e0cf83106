//! Calculator inputs
//!
//! Inputs arrive from an external UI as loosely typed named fields
//! (`RawCalculatorInput`) and are resolved into the strongly typed
//! `CalculatorInput` the engine consumes. Resolution never fails: a missing
//! or non-numeric field silently falls back to its documented default. An
//! explicit zero is a valid value, not a fallback trigger.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default engagement duration in months
pub const DEFAULT_DURATION_MONTHS: f64 = 6.0;
/// Default offshore day rate (currency/day)
pub const DEFAULT_OFFSHORE_DAY_RATE: f64 = 450.0;
/// Default senior staff hourly rate (currency/hour)
pub const DEFAULT_SENIOR_HOURLY_RATE: f64 = 120.0;
/// Default experienced in-house day rate (currency/day)
pub const DEFAULT_EXPERIENCED_DAY_RATE: f64 = 1200.0;
/// Default senior supervision hours per week (offshore scenario)
pub const DEFAULT_SUPERVISION_HOURS_PER_WEEK: f64 = 8.0;
/// Default rework rate in percent (offshore scenario)
pub const DEFAULT_REWORK_RATE_PERCENT: f64 = 35.0;
/// Default timeline overrun rate in percent (offshore scenario)
pub const DEFAULT_OVERRUN_RATE_PERCENT: f64 = 25.0;
/// Default onboarding duration in weeks (offshore scenario)
pub const DEFAULT_ONBOARDING_WEEKS: f64 = 6.0;

/// Fully resolved calculator input
///
/// All fields are finite `f64` values. Construct directly for programmatic
/// use, or via [`RawCalculatorInput::resolve`] when the values come from an
/// external source.
///
/// # Example
/// ```
/// use cost_model_core_rs::CalculatorInput;
///
/// let input = CalculatorInput::default();
/// assert_eq!(input.duration_months, 6.0);
/// assert_eq!(input.offshore_day_rate, 450.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInput {
    /// Engagement duration in months
    #[serde(rename = "duration")]
    pub duration_months: f64,

    /// Offshore day rate (currency/day)
    #[serde(rename = "offshoreDayRate")]
    pub offshore_day_rate: f64,

    /// Senior staff hourly rate (currency/hour), used for supervision and
    /// onboarding in both scenarios
    #[serde(rename = "seniorHourlyRate")]
    pub senior_hourly_rate: f64,

    /// Experienced in-house day rate (currency/day)
    #[serde(rename = "experiencedDayRate")]
    pub experienced_day_rate: f64,

    /// Senior supervision hours per week for the offshore scenario
    #[serde(rename = "supervisionHoursPerWeek")]
    pub supervision_hours_per_week: f64,

    /// Offshore rework rate, as a percentage (35 = 35%)
    #[serde(rename = "reworkRatePercent")]
    pub rework_rate_percent: f64,

    /// Offshore timeline overrun rate, as a percentage (25 = 25%)
    #[serde(rename = "overrunRatePercent")]
    pub overrun_rate_percent: f64,

    /// Offshore onboarding duration in weeks
    #[serde(rename = "onboardingWeeks")]
    pub onboarding_weeks: f64,
}

impl Default for CalculatorInput {
    fn default() -> Self {
        Self {
            duration_months: DEFAULT_DURATION_MONTHS,
            offshore_day_rate: DEFAULT_OFFSHORE_DAY_RATE,
            senior_hourly_rate: DEFAULT_SENIOR_HOURLY_RATE,
            experienced_day_rate: DEFAULT_EXPERIENCED_DAY_RATE,
            supervision_hours_per_week: DEFAULT_SUPERVISION_HOURS_PER_WEEK,
            rework_rate_percent: DEFAULT_REWORK_RATE_PERCENT,
            overrun_rate_percent: DEFAULT_OVERRUN_RATE_PERCENT,
            onboarding_weeks: DEFAULT_ONBOARDING_WEEKS,
        }
    }
}

impl CalculatorInput {
    /// Offshore rework rate as a fraction (35% -> 0.35)
    pub fn rework_rate(&self) -> f64 {
        self.rework_rate_percent / 100.0
    }

    /// Offshore overrun rate as a fraction (25% -> 0.25)
    pub fn overrun_rate(&self) -> f64 {
        self.overrun_rate_percent / 100.0
    }
}

/// Wire form of the calculator input
///
/// Every field is optional and loosely typed: JSON numbers and numeric
/// strings are both accepted, mirroring form controls that deliver their
/// values as text. Anything else resolves to the field's default.
///
/// # Example
/// ```
/// use cost_model_core_rs::RawCalculatorInput;
///
/// let raw: RawCalculatorInput =
///     serde_json::from_str(r#"{"duration": "12", "offshoreDayRate": 500}"#).unwrap();
/// let input = raw.resolve();
/// assert_eq!(input.duration_months, 12.0);
/// assert_eq!(input.offshore_day_rate, 500.0);
/// assert_eq!(input.senior_hourly_rate, 120.0); // default
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RawCalculatorInput {
    #[serde(rename = "duration")]
    pub duration_months: Option<Value>,

    #[serde(rename = "offshoreDayRate")]
    pub offshore_day_rate: Option<Value>,

    #[serde(rename = "seniorHourlyRate")]
    pub senior_hourly_rate: Option<Value>,

    #[serde(rename = "experiencedDayRate")]
    pub experienced_day_rate: Option<Value>,

    #[serde(rename = "supervisionHoursPerWeek")]
    pub supervision_hours_per_week: Option<Value>,

    #[serde(rename = "reworkRatePercent")]
    pub rework_rate_percent: Option<Value>,

    #[serde(rename = "overrunRatePercent")]
    pub overrun_rate_percent: Option<Value>,

    #[serde(rename = "onboardingWeeks")]
    pub onboarding_weeks: Option<Value>,
}

impl RawCalculatorInput {
    /// Resolve every field to a finite number, clamping missing or
    /// non-numeric values to the documented defaults
    ///
    /// Resolution is total: it never raises a validation error.
    pub fn resolve(&self) -> CalculatorInput {
        CalculatorInput {
            duration_months: numeric_or(self.duration_months.as_ref(), DEFAULT_DURATION_MONTHS),
            offshore_day_rate: numeric_or(
                self.offshore_day_rate.as_ref(),
                DEFAULT_OFFSHORE_DAY_RATE,
            ),
            senior_hourly_rate: numeric_or(
                self.senior_hourly_rate.as_ref(),
                DEFAULT_SENIOR_HOURLY_RATE,
            ),
            experienced_day_rate: numeric_or(
                self.experienced_day_rate.as_ref(),
                DEFAULT_EXPERIENCED_DAY_RATE,
            ),
            supervision_hours_per_week: numeric_or(
                self.supervision_hours_per_week.as_ref(),
                DEFAULT_SUPERVISION_HOURS_PER_WEEK,
            ),
            rework_rate_percent: numeric_or(
                self.rework_rate_percent.as_ref(),
                DEFAULT_REWORK_RATE_PERCENT,
            ),
            overrun_rate_percent: numeric_or(
                self.overrun_rate_percent.as_ref(),
                DEFAULT_OVERRUN_RATE_PERCENT,
            ),
            onboarding_weeks: numeric_or(self.onboarding_weeks.as_ref(), DEFAULT_ONBOARDING_WEEKS),
        }
    }

    /// Set the named field to a literal number, overriding whatever the
    /// document carried. Unknown names are ignored.
    ///
    /// Field names are the wire names ("duration", "offshoreDayRate", ...).
    pub fn set_field(&mut self, name: &str, value: f64) {
        let slot = match name {
            "duration" => &mut self.duration_months,
            "offshoreDayRate" => &mut self.offshore_day_rate,
            "seniorHourlyRate" => &mut self.senior_hourly_rate,
            "experiencedDayRate" => &mut self.experienced_day_rate,
            "supervisionHoursPerWeek" => &mut self.supervision_hours_per_week,
            "reworkRatePercent" => &mut self.rework_rate_percent,
            "overrunRatePercent" => &mut self.overrun_rate_percent,
            "onboardingWeeks" => &mut self.onboarding_weeks,
            _ => return,
        };
        *slot = Some(Value::from(value));
    }
}

/// Coerce a raw field to a finite f64, falling back to `default` when the
/// field is absent, non-numeric, or non-finite
fn numeric_or(raw: Option<&Value>, default: f64) -> f64 {
    let parsed = match raw {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v.is_finite() => v,
        _ => default,
    }
}
