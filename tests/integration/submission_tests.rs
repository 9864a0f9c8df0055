//! Submission flow tests
//!
//! Time is paused so the simulated processing delay elapses instantly while
//! still being observable.

use std::time::Duration;

use serde_json::Value;

use cloudvigia::models::SubmissionPhase;

use crate::common::{fake_description, seed_stats, SubmissionFactory, SubmissionFixtures, TestApp};

#[tokio::test(start_paused = true)]
async fn test_submit_valid_report() {
    let app = TestApp::new();

    let response = app
        .post_json("/api/v1/reports", SubmissionFixtures::valid())
        .await;
    response.assert_created();

    let receipt: Value = response.json();
    assert_eq!(receipt["reportId"], "CV-20261019-007");
    assert_eq!(receipt["message"], "Denúncia enviada com sucesso!");
    assert_eq!(receipt["report"]["status"], "received");
    assert_eq!(receipt["report"]["city"], "São Paulo");
    assert_eq!(receipt["report"]["date"], "2026-10-19");
    assert_eq!(receipt["report"]["coordinates"][0], -23.5505);
    assert!(receipt["receipt"]
        .as_str()
        .unwrap()
        .contains("ID da Denúncia: CV-20261019-007"));

    let rows: Vec<Value> = app.get("/api/v1/reports").await.json();
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0]["id"], "CV-20261019-007");

    let stats: Value = app.get("/api/v1/dashboard/stats").await.json();
    assert_eq!(stats["totalReports"], seed_stats::TOTAL + 1);
    assert_eq!(stats["activeReports"], seed_stats::ACTIVE + 1);
    assert_eq!(stats["resolvedReports"], seed_stats::RESOLVED);
    assert_eq!(stats["userEngagement"], seed_stats::ENGAGEMENT + 1);
}

#[tokio::test(start_paused = true)]
async fn test_submission_pending_until_delay_elapses() {
    let app = TestApp::new();
    let mut phases = app.state.submissions.subscribe();

    let router_app = TestApp {
        router: app.router.clone(),
        state: app.state.clone(),
    };
    let request = tokio::spawn(async move {
        router_app
            .post_json("/api/v1/reports", SubmissionFixtures::valid())
            .await
    });

    phases
        .wait_for(|phase| *phase == SubmissionPhase::Pending)
        .await
        .unwrap();

    let status: Value = app.get("/api/v1/reports/submission").await.json();
    assert_eq!(status["phase"], "pending");
    assert_eq!(status["busy"], true);

    tokio::time::sleep(Duration::from_millis(1499)).await;
    assert_eq!(app.state.store.read().await.len(), 6);

    let response = request.await.unwrap();
    response.assert_created();
    assert_eq!(app.state.store.read().await.len(), 7);
    assert_eq!(app.state.submissions.phase(), SubmissionPhase::Committed);
}

#[tokio::test(start_paused = true)]
async fn test_short_description_is_rejected() {
    let app = TestApp::new();

    app.post_json("/api/v1/reports", SubmissionFixtures::short_description())
        .await
        .assert_unprocessable()
        .assert_error_type("validation_error");

    assert_eq!(app.state.store.read().await.len(), 6);
    let status: Value = app.get("/api/v1/reports/submission").await.json();
    assert_eq!(status["phase"], "idle");
}

#[tokio::test(start_paused = true)]
async fn test_missing_field_is_rejected() {
    let app = TestApp::new();

    app.post_json("/api/v1/reports", SubmissionFixtures::missing_urgency())
        .await
        .assert_unprocessable();

    let stats: Value = app.get("/api/v1/dashboard/stats").await.json();
    assert_eq!(stats["totalReports"], seed_stats::TOTAL);
}

#[tokio::test(start_paused = true)]
async fn test_anonymous_submission_records_placeholder() {
    let app = TestApp::new();

    let receipt: Value = app
        .post_json("/api/v1/reports", SubmissionFixtures::anonymous())
        .await
        .json();
    assert_eq!(receipt["report"]["userId"], "anonymous");
}

#[tokio::test(start_paused = true)]
async fn test_submission_uses_picked_location_and_photo() {
    let app = TestApp::new();

    app.put_json(
        "/api/v1/preview/location",
        serde_json::json!({"lat": -23.5614, "lng": -46.6559}),
    )
    .await
    .assert_ok();
    let photo: Value = app
        .post_bytes("/api/v1/preview/photo", "image/png", crate::common::tiny_png())
        .await
        .json();

    let receipt: Value = app
        .post_json("/api/v1/reports", SubmissionFixtures::valid())
        .await
        .json();

    assert_eq!(receipt["report"]["coordinates"][0], -23.5614);
    assert_eq!(receipt["report"]["coordinates"][1], -46.6559);
    assert_eq!(receipt["report"]["photo"], photo["reference"]);

    // The draft is reset after the commit
    let preview: Value = app.get("/api/v1/preview").await.json();
    assert!(preview["pickedLocation"].is_null());
    assert!(preview["photo"].is_null());
    assert_eq!(preview["map"]["markers"].as_array().unwrap().len(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_sequential_submissions_get_unique_ids() {
    let app = TestApp::new();
    let mut ids = std::collections::HashSet::new();

    for _ in 0..10 {
        let receipt: Value = app
            .post_json("/api/v1/reports", SubmissionFactory::valid())
            .await
            .json();
        assert!(ids.insert(receipt["reportId"].as_str().unwrap().to_string()));
    }

    assert_eq!(app.state.store.read().await.len(), 16);
}

#[tokio::test(start_paused = true)]
async fn test_description_length_counts_characters() {
    let app = TestApp::new();
    let mut body = SubmissionFixtures::valid();
    body["description"] = serde_json::json!(fake_description(20));

    app.post_json("/api/v1/reports", body).await.assert_created();
}

#[tokio::test(start_paused = true)]
async fn test_concurrent_submission_is_rejected() {
    let app = TestApp::new();

    let (first, second) = futures::join!(
        app.post_json("/api/v1/reports", SubmissionFixtures::valid()),
        app.post_json("/api/v1/reports", SubmissionFixtures::anonymous()),
    );

    let mut statuses = vec![first.status.as_u16(), second.status.as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, vec![201, 409]);

    assert_eq!(app.state.store.read().await.len(), 7);
    let stats: Value = app.get("/api/v1/dashboard/stats").await.json();
    assert_eq!(stats["totalReports"], seed_stats::TOTAL + 1);
}

#[tokio::test(start_paused = true)]
async fn test_whitespace_padding_does_not_count_toward_length() {
    let app = TestApp::new();
    let mut body = SubmissionFixtures::valid();
    body["description"] = serde_json::json!(format!("Lixo{}", " ".repeat(16)));

    app.post_json("/api/v1/reports", body)
        .await
        .assert_unprocessable()
        .assert_error_type("validation_error");

    assert_eq!(app.state.store.read().await.len(), 6);
    let stats: Value = app.get("/api/v1/dashboard/stats").await.json();
    assert_eq!(stats["totalReports"], seed_stats::TOTAL);
}
