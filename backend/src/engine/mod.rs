//! Cost model engine
//!
//! One parameterized scenario computation invoked twice with different rate
//! sources (user input for offshore, fixed constants for experienced), then
//! a comparison step over the offshore baseline.

pub mod rates;
pub mod report;
pub mod scenario;

pub use rates::ScenarioRates;
pub use report::{evaluate, CostModelError, CostReport};
pub use scenario::{compute_scenario, EngagementSchedule};
