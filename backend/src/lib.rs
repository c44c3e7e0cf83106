//! Engagement Cost Model - Rust Engine
//!
//! Deterministic true-cost model comparing an offshore/outsourced engagement
//! against an experienced in-house engagement over the same schedule.
//!
//! # Architecture
//!
//! - **models**: Domain types (CalculatorInput, CostBreakdown, ComparisonResult)
//! - **engine**: Scenario computation, comparison, and report assembly
//! - **format**: Currency/percentage presentation strings
//!
//! # Critical Invariants
//!
//! 1. Evaluation is a pure function: identical inputs yield identical reports
//! 2. `hidden_total` is always the exact sum of its four components
//! 3. `true_cost = apparent_cost + hidden_total`
//! 4. The engine only ever sees finite numbers: raw-input resolution clamps
//!    missing or non-numeric fields to documented defaults

// Module declarations
pub mod engine;
pub mod format;
pub mod models;

// Re-exports for convenience
pub use engine::{
    compute_scenario, evaluate, CostModelError, CostReport, EngagementSchedule, ScenarioRates,
};
pub use models::{
    breakdown::CostBreakdown,
    comparison::{ComparisonResult, RiskAssessment},
    input::{CalculatorInput, RawCalculatorInput},
};
