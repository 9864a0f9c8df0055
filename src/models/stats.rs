//! Aggregate counters and pre-baked series shown on the dashboard

use serde::{Deserialize, Serialize};

use super::ProblemType;

/// Process-wide counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    pub total_reports: u64,
    pub active_reports: u64,
    pub resolved_reports: u64,
    /// Average response time in days
    pub avg_response_time: f64,
    pub user_engagement: u64,
    /// Month-over-month growth in percent
    pub monthly_growth: i32,
}

impl GlobalStats {
    /// Apply a signed delta; counters saturate at zero
    pub fn apply(&mut self, delta: &StatsDelta) {
        self.total_reports = apply_signed(self.total_reports, delta.total);
        self.active_reports = apply_signed(self.active_reports, delta.active);
        self.resolved_reports = apply_signed(self.resolved_reports, delta.resolved);
        self.user_engagement = apply_signed(self.user_engagement, delta.engagement);
    }
}

fn apply_signed(value: u64, delta: i64) -> u64 {
    if delta >= 0 {
        value.saturating_add(delta as u64)
    } else {
        value.saturating_sub(delta.unsigned_abs())
    }
}

/// Signed adjustment to [`GlobalStats`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsDelta {
    pub total: i64,
    pub active: i64,
    pub resolved: i64,
    pub engagement: i64,
}

impl StatsDelta {
    /// A citizen submitted a new report
    pub fn submission() -> Self {
        Self {
            total: 1,
            active: 1,
            resolved: 0,
            engagement: 1,
        }
    }

    /// `count` reports arrived from elsewhere
    pub fn incoming(count: u64) -> Self {
        Self {
            total: count as i64,
            active: count as i64,
            ..Self::default()
        }
    }

    /// `count` active reports were resolved
    pub fn resolutions(count: u64) -> Self {
        Self {
            active: -(count as i64),
            resolved: count as i64,
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Read-only per-city counters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityStat {
    pub name: String,
    pub reports: u32,
    pub resolved: u32,
    pub avg_response_time: f64,
}

/// Monthly time series for the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MonthlySeries {
    pub labels: Vec<String>,
    pub reports: Vec<u32>,
    pub resolutions: Vec<u32>,
}

/// Percentage of reports per category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TypeDistribution {
    pub irregular_waste: u32,
    pub clogged_drain: u32,
    pub construction_waste: u32,
    pub flood_risk: u32,
    pub illegal_dumping: u32,
}

impl TypeDistribution {
    /// Categories in chart order with their share
    pub fn entries(&self) -> [(ProblemType, u32); 5] {
        [
            (ProblemType::IrregularWaste, self.irregular_waste),
            (ProblemType::CloggedDrain, self.clogged_drain),
            (ProblemType::ConstructionWaste, self.construction_waste),
            (ProblemType::FloodRisk, self.flood_risk),
            (ProblemType::IllegalDumping, self.illegal_dumping),
        ]
    }
}
