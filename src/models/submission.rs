//! Report submission form and outcome models

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    report::{deserialize_problem_type, deserialize_urgency},
    ProblemType, Report, Urgency,
};

/// Values captured by the report form
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ReportSubmission {
    #[serde(rename = "type", default, deserialize_with = "deserialize_problem_type")]
    #[validate(required(message = "problem type is required"))]
    pub report_type: Option<ProblemType>,

    #[serde(default, deserialize_with = "deserialize_urgency")]
    #[validate(required(message = "urgency is required"))]
    pub urgency: Option<Urgency>,

    #[serde(default)]
    #[validate(length(min = 1, message = "location is required"))]
    pub location: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    /// Record the submitter as anonymous
    #[serde(default)]
    pub anonymous: bool,
}

/// Stage of the submission state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    /// Waiting out the simulated latency; the busy indicator is shown
    Pending,
    Committed,
}

impl SubmissionPhase {
    pub fn is_busy(&self) -> bool {
        matches!(self, SubmissionPhase::Validating | SubmissionPhase::Pending)
    }
}

/// Returned to the citizen once a report is committed
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionReceipt {
    pub report_id: String,
    pub message: String,
    pub report: Report,
    /// Printable receipt text
    pub receipt: String,
}
