//! Dashboard API endpoints
//!
//! Counters, filter aggregation, export and the map/chart view models.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    db::StatsRepository,
    models::{CityStat, DashboardFilter, FilteredStats, StatsOverview},
    render::{render_charts, render_map, ChartData, MapView},
    services::DashboardService,
    utils::error::AppResult,
    AppState,
};

/// Create routes for dashboard endpoints
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(get_stats))
        .route("/filter", get(filter_stats))
        .route("/export", get(export_data))
        .route("/map", get(get_map))
        .route("/charts", get(get_charts))
        .route("/cities", get(get_cities))
}

/// GET /api/v1/dashboard/stats
async fn get_stats(State(state): State<AppState>) -> Json<StatsOverview> {
    Json(StatsRepository::new(&state.store).overview().await)
}

/// Scaled counters for a filter selection
///
/// GET /api/v1/dashboard/filter?city=&period=&type=
///
/// Missing parameters mean "all".
async fn filter_stats(
    State(state): State<AppState>,
    Query(filter): Query<DashboardFilter>,
) -> Json<FilteredStats> {
    let service = DashboardService::new(&state.store, &state.config.export);
    Json(service.filter(&filter).await)
}

/// Download the dashboard snapshot as JSON
///
/// GET /api/v1/dashboard/export?city=&period=&type=
async fn export_data(
    State(state): State<AppState>,
    Query(filter): Query<DashboardFilter>,
) -> AppResult<(StatusCode, [(String, String); 2], Vec<u8>)> {
    let service = DashboardService::new(&state.store, &state.config.export);
    let file = service.export(filter, state.clock.now()).await?;

    Ok((
        StatusCode::OK,
        [
            ("Content-Type".to_string(), "application/json".to_string()),
            (
                "Content-Disposition".to_string(),
                format!("attachment; filename=\"{}\"", file.filename),
            ),
        ],
        file.body,
    ))
}

/// GET /api/v1/dashboard/map
async fn get_map(State(state): State<AppState>) -> Json<MapView> {
    let store = state.store.read().await;
    Json(render_map(store.reports()))
}

/// GET /api/v1/dashboard/charts
async fn get_charts(State(state): State<AppState>) -> Json<ChartData> {
    let repo = StatsRepository::new(&state.store);
    let distribution = repo.type_distribution().await;
    let monthly = repo.monthly().await;
    Json(render_charts(&distribution, &monthly))
}

/// GET /api/v1/dashboard/cities
async fn get_cities(State(state): State<AppState>) -> Json<Vec<CityStat>> {
    Json(StatsRepository::new(&state.store).cities().await)
}
