//! Dashboard endpoint tests: counters, filters, export and view models

use rstest::rstest;
use serde_json::Value;

use crate::common::{seed_stats, TestApp};

#[tokio::test]
async fn test_stats_overview() {
    let app = TestApp::new();
    let response = app.get("/api/v1/dashboard/stats").await;
    response.assert_ok();

    let stats: Value = response.json();
    assert_eq!(stats["totalReports"], seed_stats::TOTAL);
    assert_eq!(stats["activeReports"], seed_stats::ACTIVE);
    assert_eq!(stats["resolvedReports"], seed_stats::RESOLVED);
    assert_eq!(stats["avgResponseTime"], 3.2);
    assert_eq!(stats["monthlyGrowth"], 12);
    assert_eq!(stats["citiesCount"], 8);
}

#[rstest]
#[case::no_filter("", 924, 1923)]
#[case::explicit_all("?city=all&type=all", 924, 1923)]
#[case::city("?city=maceio", 554, 1153)]
#[case::problem_type("?type=clogged_drain", 369, 769)]
#[case::city_and_type("?city=maceio&type=flood_risk", 221, 461)]
#[case::period_only("?period=7", 924, 1923)]
#[tokio::test]
async fn test_filter_scales_counters(
    #[case] query: &str,
    #[case] active: u64,
    #[case] resolved: u64,
) {
    let app = TestApp::new();
    let response = app.get(&format!("/api/v1/dashboard/filter{}", query)).await;
    response.assert_ok();

    let body: Value = response.json();
    assert_eq!(body["activeReports"], active);
    assert_eq!(body["resolvedReports"], resolved);
}

#[tokio::test]
async fn test_filter_echoes_selection_and_keeps_store() {
    let app = TestApp::new();
    let body: Value = app
        .get("/api/v1/dashboard/filter?city=maceio&period=90")
        .await
        .json();

    assert_eq!(body["filters"]["city"], "maceio");
    assert_eq!(body["filters"]["period"], "90");
    assert_eq!(body["filters"]["type"], "all");

    let stats: Value = app.get("/api/v1/dashboard/stats").await.json();
    assert_eq!(stats["activeReports"], seed_stats::ACTIVE);
}

#[tokio::test]
async fn test_export_download() {
    let app = TestApp::new();
    let response = app.get("/api/v1/dashboard/export?city=maceio").await;
    response.assert_ok();

    assert_eq!(
        response.header("content-disposition").as_deref(),
        Some("attachment; filename=\"cloudvigia-export-2026-10-19.json\"")
    );
    assert_eq!(
        response.header("content-type").as_deref(),
        Some("application/json")
    );

    let body: Value = response.json();
    assert_eq!(body["filters"]["city"], "maceio");
    assert_eq!(body["stats"]["totalReports"], seed_stats::TOTAL);
    assert_eq!(body["reports"].as_array().unwrap().len(), 6);
    assert!(body["exportDate"].as_str().unwrap().starts_with("2026-10-19"));
}

#[tokio::test]
async fn test_export_respects_report_cap() {
    let mut config = crate::common::test_config();
    config.export.max_reports = 2;
    let app = TestApp::with_config(config);

    let body: Value = app.get("/api/v1/dashboard/export").await.json();
    let reports = body["reports"].as_array().unwrap();
    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["id"], "CV-2026-0482");
}

#[tokio::test]
async fn test_map_markers() {
    let app = TestApp::new();
    let map: Value = app.get("/api/v1/dashboard/map").await.json();

    assert_eq!(map["zoom"], 13);
    assert_eq!(map["center"][0], -23.5505);

    let markers = map["markers"].as_array().unwrap();
    assert_eq!(markers.len(), 6);

    let resolved = markers
        .iter()
        .find(|m| m["id"] == "CV-2026-0480")
        .unwrap();
    assert_eq!(resolved["color"], "#10b981");

    let drain = markers
        .iter()
        .find(|m| m["id"] == "CV-2026-0481")
        .unwrap();
    assert_eq!(drain["color"], "#3b82f6");
    assert_eq!(drain["popup"]["statusLabel"], "Em Andamento");
    assert_eq!(drain["popup"]["dateLabel"], "04/10/2026");
}

#[tokio::test]
async fn test_chart_data() {
    let app = TestApp::new();
    let charts: Value = app.get("/api/v1/dashboard/charts").await.json();

    let doughnut = &charts["typeDistribution"];
    assert_eq!(doughnut["labels"][1], "Bueiros Entupidos");
    assert_eq!(doughnut["data"], serde_json::json!([42, 28, 18, 8, 4]));

    let trend = &charts["trend"];
    assert_eq!(trend["labels"].as_array().unwrap().len(), 10);
    assert_eq!(trend["datasets"][0]["label"], "Denúncias");
    assert_eq!(trend["datasets"][1]["label"], "Resoluções");
    assert_eq!(trend["datasets"][0]["data"][9], 382);
}

#[tokio::test]
async fn test_city_ranking() {
    let app = TestApp::new();
    let cities: Vec<Value> = app.get("/api/v1/dashboard/cities").await.json();

    assert_eq!(cities.len(), 8);
    assert_eq!(cities[0]["name"], "São Paulo");
    assert_eq!(cities[2]["name"], "Maceió");
    assert_eq!(cities[2]["reports"], 543);
}

#[tokio::test]
async fn test_export_filename_uses_utc_day() {
    let clock = crate::common::clock_at(2026, 12, 31, 23, 59);
    let app = TestApp::with_clock(crate::common::test_config(), clock);

    let response = app.get("/api/v1/dashboard/export").await;
    assert_eq!(
        response.header("content-disposition").as_deref(),
        Some("attachment; filename=\"cloudvigia-export-2026-12-31.json\"")
    );
}

#[tokio::test]
async fn test_simulation_tick_is_visible_on_dashboard() {
    use cloudvigia::services::AmbientSimulation;

    let app = TestApp::new();
    let simulation = AmbientSimulation::new(&app.state.config.simulation);

    let mut rng = crate::common::seeded_rng(42);
    let mut after = app.state.store.read().await.stats().clone();
    for _ in 0..20 {
        after = simulation.tick(&app.state.store, &mut rng).await;
    }

    let stats: Value = app.get("/api/v1/dashboard/stats").await.json();
    assert_eq!(stats["totalReports"], after.total_reports);
    assert_eq!(stats["activeReports"], after.active_reports);
    assert_eq!(stats["resolvedReports"], after.resolved_reports);
    assert!(after.total_reports >= seed_stats::TOTAL);
    assert!(after.resolved_reports >= seed_stats::RESOLVED);
}
