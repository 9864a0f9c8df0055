//! Storage layer
//!
//! The dashboard keeps everything in memory for the lifetime of the process:
//! - Citizen reports (newest first)
//! - Global and per-city counters
//! - Monthly series and category distribution for the charts

mod fixture_store;
pub mod fixtures;
pub mod repository;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::sync::RwLock;
use tracing::info;

pub use fixture_store::{FixtureStore, StoreError};
pub use repository::{ReportRepository, StatsRepository};

use crate::config::StoreConfig;

/// Shared handle to the session store
pub type StorePool = Arc<RwLock<FixtureStore>>;

/// Build the session store, seeded with the dashboard fixtures unless disabled
pub fn init_store(config: &StoreConfig) -> StorePool {
    let store = if config.seed_fixtures {
        let store = FixtureStore::seeded();
        info!(
            reports = store.len(),
            cities = store.cities().len(),
            "Fixture store seeded"
        );
        store
    } else {
        info!("Fixture store starting empty");
        FixtureStore::default()
    };

    Arc::new(RwLock::new(store))
}

/// Check that the store can be read without waiting on a stuck writer
pub async fn check_health(store: &StorePool) -> Result<()> {
    tokio::time::timeout(Duration::from_secs(1), store.read())
        .await
        .map(|_| ())
        .map_err(|_| anyhow::anyhow!("fixture store lock not acquired within 1s"))
}
