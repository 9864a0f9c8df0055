//! Common step definitions used across features

use cucumber::{given, then};

use crate::features::TestWorld;

#[given("the CloudVigia service is running")]
async fn service_running(world: &mut TestWorld) {
    world.start();
}

#[then(expr = "the response status should be {int}")]
async fn response_status(world: &mut TestWorld, status: u16) {
    assert_eq!(world.response().status.as_u16(), status);
}

#[then(expr = "the response should contain an error of type {string}")]
async fn response_contains_error(world: &mut TestWorld, error_type: String) {
    let body = world.response_json();
    assert_eq!(body["error"], error_type.as_str());
}
