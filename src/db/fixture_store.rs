//! In-memory holder of all dashboard data for one session

use std::collections::VecDeque;

use thiserror::Error;

use crate::models::{CityStat, GlobalStats, MonthlySeries, Report, StatsDelta, TypeDistribution};

/// Errors raised by store mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("report id '{0}' already exists")]
    DuplicateId(String),
}

/// Reports, counters and series owned by the session
///
/// Reports are kept newest-first. The store only grows: there is no delete
/// or update-in-place.
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    reports: VecDeque<Report>,
    stats: GlobalStats,
    cities: Vec<CityStat>,
    monthly: MonthlySeries,
    type_distribution: TypeDistribution,
}

impl FixtureStore {
    pub fn new(
        reports: Vec<Report>,
        stats: GlobalStats,
        cities: Vec<CityStat>,
        monthly: MonthlySeries,
        type_distribution: TypeDistribution,
    ) -> Self {
        Self {
            reports: reports.into(),
            stats,
            cities,
            monthly,
            type_distribution,
        }
    }

    /// Store carrying the dashboard's seed data
    pub fn seeded() -> Self {
        super::fixtures::seed_store()
    }

    /// Reports in store order (newest insert first)
    pub fn reports(&self) -> impl ExactSizeIterator<Item = &Report> + '_ {
        self.reports.iter()
    }

    pub fn len(&self) -> usize {
        self.reports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Report> {
        self.reports.iter().find(|r| r.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.find(id).is_some()
    }

    /// Insert a report at the front
    pub fn prepend(&mut self, report: Report) -> Result<(), StoreError> {
        if self.contains_id(&report.id) {
            return Err(StoreError::DuplicateId(report.id));
        }
        self.reports.push_front(report);
        Ok(())
    }

    pub fn adjust_global_stats(&mut self, delta: &StatsDelta) {
        self.stats.apply(delta);
    }

    /// Prepend a report and adjust the counters as one step
    pub fn commit(&mut self, report: Report, delta: &StatsDelta) -> Result<(), StoreError> {
        self.prepend(report)?;
        self.adjust_global_stats(delta);
        Ok(())
    }

    pub fn stats(&self) -> &GlobalStats {
        &self.stats
    }

    pub fn cities(&self) -> &[CityStat] {
        &self.cities
    }

    pub fn monthly(&self) -> &MonthlySeries {
        &self.monthly
    }

    pub fn type_distribution(&self) -> &TypeDistribution {
        &self.type_distribution
    }
}
