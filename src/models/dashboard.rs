//! Dashboard filter, aggregate and export models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{GlobalStats, Report};

/// Filter value meaning "no restriction"
pub const FILTER_ALL: &str = "all";

/// City/period/type selection from the dashboard toolbar
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardFilter {
    #[serde(default = "default_filter")]
    pub city: String,
    /// Period in days; accepted but not applied to the aggregate
    #[serde(default = "default_period")]
    pub period: String,
    #[serde(rename = "type", default = "default_filter")]
    pub report_type: String,
}

fn default_filter() -> String {
    FILTER_ALL.to_string()
}

fn default_period() -> String {
    "30".to_string()
}

impl Default for DashboardFilter {
    fn default() -> Self {
        Self {
            city: default_filter(),
            period: default_period(),
            report_type: default_filter(),
        }
    }
}

impl DashboardFilter {
    pub fn filters_city(&self) -> bool {
        !is_all(&self.city)
    }

    pub fn filters_type(&self) -> bool {
        !is_all(&self.report_type)
    }
}

fn is_all(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(FILTER_ALL)
}

/// Scaled counters shown after a filter change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilteredStats {
    pub active_reports: u64,
    pub resolved_reports: u64,
    pub filters: DashboardFilter,
}

/// Counters shown in the hero and dashboard panels
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    #[serde(flatten)]
    pub stats: GlobalStats,
    pub cities_count: usize,
}

/// Downloadable snapshot of the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardExport {
    pub filters: DashboardFilter,
    pub stats: GlobalStats,
    pub reports: Vec<Report>,
    pub export_date: DateTime<Utc>,
}
