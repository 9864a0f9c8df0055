//! Dashboard filter aggregation and export
//!
//! Filtering does not query anything: the global counters are scaled by a
//! fixed factor per active filter dimension, each step floored. The period
//! selection is carried along but does not change the numbers.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::config::ExportConfig;
use crate::db::{ReportRepository, StatsRepository, StorePool};
use crate::models::{DashboardExport, DashboardFilter, FilteredStats, GlobalStats, Report};
use crate::utils::AppResult;

/// Share of the counters attributed to a single city
pub const CITY_FACTOR: f64 = 0.6;

/// Share of the counters attributed to a single problem type
pub const TYPE_FACTOR: f64 = 0.4;

/// Scale the active and resolved counters for a filter selection
pub fn filtered_stats(stats: &GlobalStats, filter: &DashboardFilter) -> FilteredStats {
    let mut active = stats.active_reports;
    let mut resolved = stats.resolved_reports;

    if filter.filters_city() {
        active = scale(active, CITY_FACTOR);
        resolved = scale(resolved, CITY_FACTOR);
    }

    if filter.filters_type() {
        active = scale(active, TYPE_FACTOR);
        resolved = scale(resolved, TYPE_FACTOR);
    }

    FilteredStats {
        active_reports: active,
        resolved_reports: resolved,
        filters: filter.clone(),
    }
}

fn scale(value: u64, factor: f64) -> u64 {
    (value as f64 * factor).floor() as u64
}

/// Assemble the export document
///
/// `reports` is expected in store order; only the first `max_reports` are kept.
pub fn build_export(
    stats: GlobalStats,
    reports: Vec<Report>,
    filter: DashboardFilter,
    max_reports: usize,
    now: DateTime<Utc>,
) -> DashboardExport {
    DashboardExport {
        filters: filter,
        stats,
        reports: reports.into_iter().take(max_reports).collect(),
        export_date: now,
    }
}

/// Attachment name for an export made at `now`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("cloudvigia-export-{}.json", now.format("%Y-%m-%d"))
}

/// Export document rendered for download
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub body: Vec<u8>,
    pub report_count: usize,
}

/// Store-backed dashboard operations
pub struct DashboardService<'a> {
    store: &'a StorePool,
    config: &'a ExportConfig,
}

impl<'a> DashboardService<'a> {
    pub fn new(store: &'a StorePool, config: &'a ExportConfig) -> Self {
        Self { store, config }
    }

    pub async fn filter(&self, filter: &DashboardFilter) -> FilteredStats {
        let stats = StatsRepository::new(self.store).get().await;
        let filtered = filtered_stats(&stats, filter);
        debug!(
            city = %filter.city,
            period = %filter.period,
            report_type = %filter.report_type,
            active = filtered.active_reports,
            resolved = filtered.resolved_reports,
            "Dashboard filter applied"
        );
        filtered
    }

    /// Snapshot the counters and the newest reports under one read lock
    pub async fn export(&self, filter: DashboardFilter, now: DateTime<Utc>) -> AppResult<ExportFile> {
        let (stats, reports) = ReportRepository::new(self.store)
            .snapshot(self.config.max_reports)
            .await;

        let export = build_export(stats, reports, filter, self.config.max_reports, now);
        let body = serde_json::to_vec_pretty(&export)?;
        let filename = export_filename(now);

        info!(
            filename = %filename,
            reports = export.reports.len(),
            "Dashboard data exported"
        );

        Ok(ExportFile {
            filename,
            body,
            report_count: export.reports.len(),
        })
    }
}
