//! Middleware components
//!
//! This module contains middleware for:
//! - Security response headers
//! - Disabling caches on API responses

pub mod security_headers;

pub use security_headers::{api_cache_control_middleware, security_headers_middleware};
