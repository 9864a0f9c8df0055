//! Test application setup utilities
//!
//! Builds the API router around a seeded in-memory store and a clock pinned
//! to a known day.

use std::sync::Arc;

use axum::{body::Body, http::Request, Router};
use chrono::NaiveDate;
use tower::ServiceExt;

use cloudvigia::{
    api,
    config::{AppConfig, ServerConfig, SimulationConfig, SubmissionConfig},
    middleware,
    services::{FixedClock, SharedClock},
    AppState,
};

/// Day every test application believes it is
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 19).expect("valid date")
}

/// Test application wrapper for integration testing
pub struct TestApp {
    pub router: Router,
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application with the seed data loaded
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a new test application with custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        Self::with_clock(config, Arc::new(FixedClock::on(test_today())))
    }

    /// Create a test application driven by the given clock
    pub fn with_clock(config: AppConfig, clock: SharedClock) -> Self {
        let state = AppState::new(config, clock);

        let router = Router::new()
            .nest("/api/v1", api::routes())
            .layer(axum::middleware::from_fn(
                middleware::api_cache_control_middleware,
            ))
            .with_state(state.clone());

        Self { router, state }
    }

    /// Make a GET request to the test application
    pub async fn get(&self, uri: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with JSON body
    pub async fn post_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.request(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a PUT request with JSON body
    pub async fn put_json(&self, uri: &str, body: serde_json::Value) -> TestResponse {
        self.request(
            Request::builder()
                .method("PUT")
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
    }

    /// Make a POST request with a raw body and content type
    pub async fn post_bytes(&self, uri: &str, content_type: &str, body: Vec<u8>) -> TestResponse {
        self.request(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", content_type)
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// Make a DELETE request
    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.request(
            Request::builder()
                .method("DELETE")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Make an arbitrary request
    pub async fn request(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to execute request");

        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");

        TestResponse {
            status,
            headers,
            body,
        }
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    pub status: axum::http::StatusCode,
    pub headers: axum::http::HeaderMap,
    pub body: bytes::Bytes,
}

impl TestResponse {
    /// Get the response body as a string
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).to_string()
    }

    /// Parse the response body as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> T {
        serde_json::from_slice(&self.body).expect("Failed to parse response as JSON")
    }

    /// Header value as a string, if present
    pub fn header(&self, name: &str) -> Option<String> {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    /// Assert the response status
    pub fn assert_status(&self, expected: axum::http::StatusCode) -> &Self {
        assert_eq!(
            self.status,
            expected,
            "Expected status {}, got {}. Body: {}",
            expected,
            self.status,
            self.text()
        );
        self
    }

    /// Assert the response status is OK (200)
    pub fn assert_ok(&self) -> &Self {
        self.assert_status(axum::http::StatusCode::OK)
    }

    /// Assert the response status is Created (201)
    pub fn assert_created(&self) -> &Self {
        self.assert_status(axum::http::StatusCode::CREATED)
    }

    /// Assert the response status is Bad Request (400)
    pub fn assert_bad_request(&self) -> &Self {
        self.assert_status(axum::http::StatusCode::BAD_REQUEST)
    }

    /// Assert the response status is Not Found (404)
    pub fn assert_not_found(&self) -> &Self {
        self.assert_status(axum::http::StatusCode::NOT_FOUND)
    }

    /// Assert the response status is Unprocessable Entity (422)
    pub fn assert_unprocessable(&self) -> &Self {
        self.assert_status(axum::http::StatusCode::UNPROCESSABLE_ENTITY)
    }

    /// Assert the JSON error body carries the given error type
    pub fn assert_error_type(&self, error_type: &str) -> &Self {
        let body: serde_json::Value = self.json();
        assert_eq!(body["error"], error_type, "Body: {}", self.text());
        self
    }
}

/// Configuration used by the test application
///
/// The ambient simulation is never started in tests; submissions keep the
/// production latency so paused-time tests exercise the real delay.
pub fn test_config() -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            workers: 1,
            static_dir: None,
            serve_frontend: false,
        },
        submission: SubmissionConfig::default(),
        simulation: SimulationConfig {
            enabled: false,
            ..SimulationConfig::default()
        },
        ..AppConfig::default()
    }
}

/// Configuration with a short submission delay
pub fn fast_submission_config() -> AppConfig {
    let mut config = test_config();
    config.submission.latency_ms = 10;
    config
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_app_creation() {
        let app = TestApp::new();
        assert_eq!(app.state.store.read().await.len(), 6);
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = TestApp::new();
        let response = app.get("/api/v1/health").await;
        response.assert_ok();
        let json: serde_json::Value = response.json();
        assert!(json.get("status").is_some());
    }
}
