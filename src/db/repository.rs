//! Repository pattern implementations over the session store

use crate::models::{CityStat, GlobalStats, MonthlySeries, Report, StatsOverview, TypeDistribution};

use super::StorePool;

/// Repository for report operations
pub struct ReportRepository<'a> {
    store: &'a StorePool,
}

impl<'a> ReportRepository<'a> {
    pub fn new(store: &'a StorePool) -> Self {
        Self { store }
    }

    /// Counters together with at most `limit` reports, newest insert first,
    /// read under one lock
    pub async fn snapshot(&self, limit: usize) -> (GlobalStats, Vec<Report>) {
        let store = self.store.read().await;
        let reports = store.reports().take(limit).cloned().collect();
        (store.stats().clone(), reports)
    }

    /// Get a report by ID
    pub async fn get_by_id(&self, id: &str) -> Option<Report> {
        self.store.read().await.find(id).cloned()
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}

/// Repository for counters and chart series
pub struct StatsRepository<'a> {
    store: &'a StorePool,
}

impl<'a> StatsRepository<'a> {
    pub fn new(store: &'a StorePool) -> Self {
        Self { store }
    }

    pub async fn get(&self) -> GlobalStats {
        self.store.read().await.stats().clone()
    }

    pub async fn overview(&self) -> StatsOverview {
        let store = self.store.read().await;
        StatsOverview {
            stats: store.stats().clone(),
            cities_count: store.cities().len(),
        }
    }

    pub async fn cities(&self) -> Vec<CityStat> {
        self.store.read().await.cities().to_vec()
    }

    pub async fn monthly(&self) -> MonthlySeries {
        self.store.read().await.monthly().clone()
    }

    pub async fn type_distribution(&self) -> TypeDistribution {
        self.store.read().await.type_distribution().clone()
    }
}
