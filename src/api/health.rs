//! Health check endpoints
//!
//! Liveness and readiness checks plus a detailed view of the session store
//! and the submission pipeline.

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::{
    db::{self, ReportRepository},
    models::SubmissionPhase,
    AppState,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthState {
    Healthy,
    /// Working, but a submission is in flight
    Busy,
    Unhealthy,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthState,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct DetailedHealthResponse {
    pub status: HealthState,
    pub version: &'static str,
    pub components: ComponentHealth,
}

#[derive(Serialize)]
pub struct ComponentHealth {
    pub store: StoreHealth,
    pub submissions: SubmissionHealth,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreHealth {
    pub status: HealthState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reports: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Serialize)]
pub struct SubmissionHealth {
    pub status: HealthState,
    pub phase: SubmissionPhase,
}

impl From<SubmissionPhase> for SubmissionHealth {
    fn from(phase: SubmissionPhase) -> Self {
        let status = if phase.is_busy() {
            HealthState::Busy
        } else {
            HealthState::Healthy
        };
        Self { status, phase }
    }
}

async fn store_health(state: &AppState) -> StoreHealth {
    match db::check_health(&state.store).await {
        Ok(()) => StoreHealth {
            status: HealthState::Healthy,
            reports: Some(ReportRepository::new(&state.store).count().await),
            message: None,
        },
        Err(e) => StoreHealth {
            status: HealthState::Unhealthy,
            reports: None,
            message: Some(e.to_string()),
        },
    }
}

/// GET /api/v1/health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HealthState::Healthy,
        version: VERSION,
    })
}

/// GET /api/v1/health/detailed
///
/// 503 only when the store cannot be read; an in-flight submission is
/// reported as busy.
pub async fn health_check_detailed(
    State(state): State<AppState>,
) -> (StatusCode, Json<DetailedHealthResponse>) {
    let store = store_health(&state).await;
    let (code, status) = match store.status {
        HealthState::Unhealthy => (StatusCode::SERVICE_UNAVAILABLE, HealthState::Unhealthy),
        _ => (StatusCode::OK, HealthState::Healthy),
    };

    let body = DetailedHealthResponse {
        status,
        version: VERSION,
        components: ComponentHealth {
            store,
            submissions: state.submissions.phase().into(),
        },
    };

    (code, Json(body))
}

/// GET /api/v1/health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /api/v1/health/ready
pub async fn readiness(State(state): State<AppState>) -> StatusCode {
    if db::check_health(&state.store).await.is_ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    }
}
