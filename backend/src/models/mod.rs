//! Domain types for the cost model
//!
//! - `input`: calculator inputs and their raw (wire) form
//! - `breakdown`: per-scenario cost breakdown
//! - `comparison`: cross-scenario metrics and risk assessment

pub mod breakdown;
pub mod comparison;
pub mod input;
