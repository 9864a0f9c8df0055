//! Report submission step definitions

use cucumber::{given, then, when};
use serde_json::json;

use crate::features::TestWorld;

#[given(expr = "I describe the problem as {string}")]
async fn describe_problem(world: &mut TestWorld, description: String) {
    world.form["description"] = json!(description);
}

#[given(expr = "I select problem type {string} with urgency {string}")]
async fn select_type_and_urgency(world: &mut TestWorld, problem_type: String, urgency: String) {
    world.form["type"] = json!(problem_type);
    world.form["urgency"] = json!(urgency);
}

#[given("I choose to stay anonymous")]
async fn stay_anonymous(world: &mut TestWorld) {
    world.form["anonymous"] = json!(true);
}

#[given(expr = "I pick the location {float}, {float} on the preview map")]
async fn pick_location(world: &mut TestWorld, lat: f64, lng: f64) {
    world
        .app()
        .put_json("/api/v1/preview/location", json!({"lat": lat, "lng": lng}))
        .await
        .assert_ok();
}

#[when("I submit the report")]
async fn submit_report(world: &mut TestWorld) {
    world.submit_form().await;
}

#[when(expr = "I download the report {string}")]
async fn download_report(world: &mut TestWorld, id: String) {
    world.get(&format!("/api/v1/reports/{}/download", id)).await;
}

#[then(expr = "the report id should be {string}")]
async fn report_id(world: &mut TestWorld, expected: String) {
    assert_eq!(world.response_json()["reportId"], expected.as_str());
}

#[then(expr = "the submitted report should be recorded for {string}")]
async fn recorded_user(world: &mut TestWorld, user_id: String) {
    assert_eq!(world.response_json()["report"]["userId"], user_id.as_str());
}

#[then(expr = "the submitted report should be located at {float}, {float}")]
async fn recorded_coordinates(world: &mut TestWorld, lat: f64, lng: f64) {
    assert_eq!(
        world.response_json()["report"]["coordinates"],
        json!([lat, lng])
    );
}

#[then(expr = "the report table should list {int} reports")]
async fn table_size(world: &mut TestWorld, count: usize) {
    let rows: Vec<serde_json::Value> = world.app().get("/api/v1/reports").await.json();
    assert_eq!(rows.len(), count);
}

#[then(expr = "the downloaded text should contain {string}")]
async fn download_contains(world: &mut TestWorld, fragment: String) {
    let text = world.response().text();
    assert!(text.contains(&fragment), "missing {:?} in:\n{}", fragment, text);
}
