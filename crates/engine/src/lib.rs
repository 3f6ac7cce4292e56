//! Laundry Engine library.
//!
//! Rules core for the Laundry tabletop RPG, called by the host virtual
//! tabletop and by the `laundry-engine` command-line tool.
//!
//! ## Structure
//!
//! - `prerequisites/` - Talent prerequisite parsing and evaluation
//! - `automation/` - Dice pool, requisition and injury math
//! - `audit` - Catalogue content checks
//! - `i18n` - Translation lookup for user-facing summaries
//! - `config`, `loader`, `telemetry`, `cli` - Binary plumbing

pub mod audit;
pub mod automation;
pub mod cli;
pub mod config;
pub mod i18n;
pub mod loader;
pub mod prerequisites;
pub mod telemetry;

/// Test fixtures module for unit and scenario tests.
#[cfg(test)]
pub mod test_fixtures;

pub use audit::{audit_catalogue, AuditReport};
pub use prerequisites::{
    describe_result, evaluate_prerequisites, Check, EvaluationResult, PrerequisiteStatus,
};
