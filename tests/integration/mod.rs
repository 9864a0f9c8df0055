//! Integration tests for CloudVigia
//!
//! These tests drive the API router end to end against a seeded in-memory
//! store and a pinned clock.

mod dashboard_tests;
mod submission_tests;
