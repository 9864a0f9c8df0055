//! CloudVigia Library
//!
//! Data and business layer of the CloudVigia urban monitoring dashboard:
//! the session store, report submission, dashboard filtering and export,
//! the ambient counter simulation and the view models the front end renders.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod db;
pub mod middleware;
pub mod models;
pub mod render;
pub mod services;
pub mod utils;

pub use config::AppConfig;
pub use db::StorePool;
use services::{PreviewHandle, PreviewState, SharedClock, SubmissionService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Session store
    pub store: StorePool,
    /// Draft form state behind the preview card
    pub preview: PreviewHandle,
    /// Time source for dates and delays
    pub clock: SharedClock,
    /// Submission state machine
    pub submissions: SubmissionService,
}

impl AppState {
    /// Build the state with a fresh store and an empty draft
    pub fn new(config: AppConfig, clock: SharedClock) -> Self {
        let store = db::init_store(&config.store);
        Self::with_store(config, store, clock)
    }

    /// Build the state around an existing store
    pub fn with_store(config: AppConfig, store: StorePool, clock: SharedClock) -> Self {
        let preview = PreviewState::shared();
        let submissions = SubmissionService::new(
            store.clone(),
            preview.clone(),
            clock.clone(),
            config.submission.clone(),
        );

        Self {
            config: Arc::new(config),
            store,
            preview,
            clock,
            submissions,
        }
    }
}
