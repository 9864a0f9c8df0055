//! Step definitions for Cucumber scenarios

pub mod common_steps;
pub mod dashboard_steps;
pub mod report_steps;
