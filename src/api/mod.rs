//! API routes and handlers
//!
//! This module defines all API endpoints and their routing.

use axum::{routing::get, Router};

use crate::AppState;

mod dashboard;
mod health;
mod preview;
mod reports;

pub use health::*;

/// All API routes, nested under `/api/v1` by the caller
pub fn routes() -> Router<AppState> {
    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/health/detailed", get(health::health_check_detailed))
        .route("/health/live", get(health::liveness))
        .route("/health/ready", get(health::readiness))
        // Resource endpoints
        .nest("/reports", reports::routes())
        .nest("/dashboard", dashboard::routes())
        .nest("/preview", preview::routes())
}
