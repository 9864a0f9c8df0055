//! Preview API endpoints
//!
//! The draft behind the report form: location picked on the preview map,
//! device geolocation, attached photo and the live preview card.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use axum_extra::{headers::ContentType, TypedHeader};
use tracing::info;
use validator::Validate;

use crate::{
    models::{GeolocationFix, LocationPick, LocationUpdate, PhotoAttachment, PreviewQuery, PreviewSummary},
    services::photo::{accept_photo, MAX_PHOTO_BYTES},
    utils::error::{AppError, AppResult},
    AppState,
};

/// Body limit for photo uploads; anything between the photo limit and this
/// gets the JSON `payload_too_large` error instead of a bare rejection
const PHOTO_BODY_LIMIT: usize = MAX_PHOTO_BYTES + 6 * 1024 * 1024;

/// Create routes for preview endpoints
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_preview).delete(clear_preview))
        .route("/location", put(set_location))
        .route("/geolocation", post(apply_geolocation))
        .route(
            "/photo",
            post(upload_photo)
                .delete(remove_photo)
                .layer(DefaultBodyLimit::max(PHOTO_BODY_LIMIT)),
        )
}

/// Preview card for the current form values
///
/// GET /api/v1/preview?type=&urgency=&location=
async fn get_preview(
    State(state): State<AppState>,
    Query(query): Query<PreviewQuery>,
) -> Json<PreviewSummary> {
    let preview = state.preview.read().await;
    Json(preview.summary(&query, state.clock.today()))
}

/// Reset the draft
///
/// DELETE /api/v1/preview
async fn clear_preview(State(state): State<AppState>) -> StatusCode {
    state.preview.write().await.clear();
    StatusCode::NO_CONTENT
}

/// Pick a location on the preview map
///
/// PUT /api/v1/preview/location
async fn set_location(
    State(state): State<AppState>,
    Json(pick): Json<LocationPick>,
) -> AppResult<Json<LocationUpdate>> {
    pick.validate()?;

    let mut preview = state.preview.write().await;
    let update = preview.set_location(pick.lat, pick.lng, &mut rand::thread_rng())?;
    Ok(Json(update))
}

/// Apply the outcome of the browser's geolocation request
///
/// POST /api/v1/preview/geolocation
async fn apply_geolocation(
    State(state): State<AppState>,
    Json(fix): Json<GeolocationFix>,
) -> AppResult<Json<LocationUpdate>> {
    let mut preview = state.preview.write().await;
    let update = preview.apply_geolocation(fix, &mut rand::thread_rng())?;
    Ok(Json(update))
}

/// Attach a photo to the draft
///
/// POST /api/v1/preview/photo
///
/// The raw image is the request body; its `Content-Type` must be JPG, PNG
/// or HEIC and it may not exceed 10 MB. A missing header is treated as an
/// unsupported type.
async fn upload_photo(
    State(state): State<AppState>,
    content_type: Option<TypedHeader<ContentType>>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<PhotoAttachment>)> {
    let TypedHeader(content_type) = content_type.ok_or_else(|| {
        AppError::UnsupportedMediaType(
            "missing Content-Type; use JPG, PNG or HEIC".to_string(),
        )
    })?;
    let photo = accept_photo(&content_type.to_string(), body.len())?;

    info!(
        reference = %photo.reference,
        size = %photo.size_label,
        "Photo attached to draft"
    );

    state.preview.write().await.attach_photo(photo.clone());
    Ok((StatusCode::CREATED, Json(photo)))
}

/// Remove the attached photo
///
/// DELETE /api/v1/preview/photo
async fn remove_photo(State(state): State<AppState>) -> AppResult<StatusCode> {
    state
        .preview
        .write()
        .await
        .remove_photo()
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or_else(|| AppError::not_found("No photo attached"))
}
