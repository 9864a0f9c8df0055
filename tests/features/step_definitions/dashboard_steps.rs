//! Dashboard step definitions

use cucumber::{then, when};

use crate::features::TestWorld;

#[when(expr = "I filter the dashboard by city {string} and type {string}")]
async fn filter_dashboard(world: &mut TestWorld, city: String, problem_type: String) {
    world
        .get(&format!(
            "/api/v1/dashboard/filter?city={}&type={}&period=30",
            city, problem_type
        ))
        .await;
}

#[when("I open the dashboard counters")]
async fn open_counters(world: &mut TestWorld) {
    world.get("/api/v1/dashboard/stats").await;
}

#[when("I export the dashboard")]
async fn export_dashboard(world: &mut TestWorld) {
    world.get("/api/v1/dashboard/export").await;
}

#[then(expr = "the active report count should be {int}")]
async fn active_count(world: &mut TestWorld, expected: u64) {
    assert_eq!(world.response_json()["activeReports"], expected);
}

#[then(expr = "the resolved report count should be {int}")]
async fn resolved_count(world: &mut TestWorld, expected: u64) {
    assert_eq!(world.response_json()["resolvedReports"], expected);
}

#[then(expr = "the total report count should be {int}")]
async fn total_count(world: &mut TestWorld, expected: u64) {
    assert_eq!(world.response_json()["totalReports"], expected);
}

#[then(expr = "the export file should be named {string}")]
async fn export_filename(world: &mut TestWorld, filename: String) {
    let disposition = world
        .response()
        .header("content-disposition")
        .expect("missing content-disposition");
    assert_eq!(disposition, format!("attachment; filename=\"{}\"", filename));
}
