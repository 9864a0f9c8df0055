//! Data models

mod dashboard;
mod preview;
pub mod report;
mod stats;
mod submission;

pub use dashboard::*;
pub use preview::*;
pub use report::{
    format_date, Coordinates, ProblemType, Report, ReportStatus, Urgency, ANONYMOUS_USER_ID,
    FALLBACK_COORDINATES,
};
pub use stats::*;
pub use submission::*;
