//! Reports API endpoints
//!
//! Table listing, submission, details, download and share text.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::{
    db::ReportRepository,
    models::{Report, ReportSubmission, SubmissionPhase, SubmissionReceipt},
    render::{render_table, TableRow},
    services::receipt,
    utils::{
        error::{AppError, AppResult},
        validation::validate_report_id,
    },
    AppState,
};

/// Create routes for report endpoints
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_reports).post(submit_report))
        .route("/submission", get(submission_status))
        .route("/{id}", get(get_report))
        .route("/{id}/download", get(download_report))
        .route("/{id}/share", get(share_report))
}

/// Current state of the submission flow
#[derive(Debug, Serialize)]
pub struct SubmissionStatus {
    pub phase: SubmissionPhase,
    /// Whether the busy indicator should be shown
    pub busy: bool,
}

#[derive(Debug, Serialize)]
pub struct ShareResponse {
    pub title: String,
    pub text: String,
}

/// List table rows, newest date first
///
/// GET /api/v1/reports
async fn list_reports(State(state): State<AppState>) -> Json<Vec<TableRow>> {
    let store = state.store.read().await;
    Json(render_table(store.reports()))
}

/// Submit the report form
///
/// POST /api/v1/reports
///
/// Responds once the simulated processing delay has elapsed and the report
/// is committed.
async fn submit_report(
    State(state): State<AppState>,
    Json(form): Json<ReportSubmission>,
) -> AppResult<(StatusCode, Json<SubmissionReceipt>)> {
    let receipt = state.submissions.submit(form).await?;
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /api/v1/reports/submission
async fn submission_status(State(state): State<AppState>) -> Json<SubmissionStatus> {
    let phase = state.submissions.phase();
    Json(SubmissionStatus {
        phase,
        busy: phase.is_busy(),
    })
}

async fn find_report(state: &AppState, id: &str) -> AppResult<Report> {
    if !validate_report_id(id) {
        return Err(AppError::BadRequest(format!("Invalid report id '{}'", id)));
    }

    ReportRepository::new(&state.store)
        .get_by_id(id)
        .await
        .ok_or_else(|| AppError::not_found(format!("Report '{}' not found", id)))
}

/// Get a report by id
///
/// GET /api/v1/reports/{id}
async fn get_report(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<Json<Report>> {
    Ok(Json(find_report(&state, &id).await?))
}

/// Download the text report
///
/// GET /api/v1/reports/{id}/download
async fn download_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, [(String, String); 2], Vec<u8>)> {
    let report = find_report(&state, &id).await?;
    let document = receipt::report_document(&report, state.clock.today());
    let filename = receipt::report_filename(&report);

    tracing::debug!(report_id = %report.id, "Report downloaded");

    Ok((
        StatusCode::OK,
        [
            (
                "Content-Type".to_string(),
                "text/plain; charset=utf-8".to_string(),
            ),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        document.into_bytes(),
    ))
}

/// Share text for a report
///
/// GET /api/v1/reports/{id}/share
async fn share_report(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ShareResponse>> {
    let report = find_report(&state, &id).await?;
    Ok(Json(ShareResponse {
        title: "Denúncia CloudVigia".to_string(),
        text: receipt::share_text(&report),
    }))
}
