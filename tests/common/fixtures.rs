//! Test fixtures for common test data
//!
//! Fixtures provide pre-defined request bodies used across multiple tests.

use serde_json::{json, Value};

/// Ids present in the seed data
pub mod ids {
    pub const NEWEST_SEED_REPORT: &str = "CV-2026-0482";
    pub const IN_PROGRESS_REPORT: &str = "CV-2026-0481";
    pub const RESOLVED_REPORT: &str = "CV-2026-0480";
    pub const MISSING_REPORT: &str = "CV-2026-9999";
}

/// Seed counters
pub mod seed_stats {
    pub const TOTAL: u64 = 2847;
    pub const ACTIVE: u64 = 924;
    pub const RESOLVED: u64 = 1923;
    pub const ENGAGEMENT: u64 = 14827;
}

/// Report form bodies
pub struct SubmissionFixtures;

impl SubmissionFixtures {
    /// A complete, valid form
    pub fn valid() -> Value {
        json!({
            "type": "clogged_drain",
            "urgency": "critical",
            "location": "Av. Paulista, 1000 - Bela Vista",
            "description": "Bueiro completamente entupido, água invadindo a calçada",
            "anonymous": false
        })
    }

    /// A valid form submitted anonymously
    pub fn anonymous() -> Value {
        let mut body = Self::valid();
        body["anonymous"] = json!(true);
        body
    }

    /// Description under the minimum length
    pub fn short_description() -> Value {
        let mut body = Self::valid();
        body["description"] = json!("Bueiro entupido");
        body
    }

    /// Urgency left unselected
    pub fn missing_urgency() -> Value {
        let mut body = Self::valid();
        body["urgency"] = json!("");
        body
    }
}

/// Smallest valid PNG, used as upload body
pub fn tiny_png() -> Vec<u8> {
    vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89,
    ]
}
