//! Test world for Cucumber scenarios

use std::fmt;

use cucumber::World;
use serde_json::Value;

use crate::common::{fast_submission_config, SubmissionFixtures, TestApp, TestResponse};

/// Test world that maintains state across scenario steps
#[derive(Default, World)]
pub struct TestWorld {
    /// Application under test, created by the background step
    pub app: Option<TestApp>,

    /// Form being filled in before submission
    pub form: Value,

    /// Response from last API call
    pub last_response: Option<TestResponse>,
}

impl fmt::Debug for TestWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestWorld")
            .field("running", &self.app.is_some())
            .field("form", &self.form)
            .field("last_response", &self.last_response)
            .finish()
    }
}

impl TestWorld {
    /// Start a fresh application with seeded data and a short submission delay
    pub fn start(&mut self) {
        self.app = Some(TestApp::with_config(fast_submission_config()));
        self.form = SubmissionFixtures::valid();
        self.last_response = None;
    }

    pub fn app(&self) -> &TestApp {
        self.app.as_ref().expect("application not started")
    }

    pub fn response(&self) -> &TestResponse {
        self.last_response.as_ref().expect("No response available")
    }

    pub fn response_json(&self) -> Value {
        self.response().json()
    }

    pub async fn get(&mut self, uri: &str) {
        let response = self.app().get(uri).await;
        self.last_response = Some(response);
    }

    pub async fn submit_form(&mut self) {
        let response = self.app().post_json("/api/v1/reports", self.form.clone()).await;
        self.last_response = Some(response);
    }
}
