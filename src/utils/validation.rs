//! Input validation utilities

use once_cell::sync::Lazy;
use regex::Regex;

/// Regex for report identifiers: generated `CV-YYYYMMDD-NNN` ids and the
/// legacy `CV-YYYY-NNNN` ids carried by the seed data
static REPORT_ID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^CV-(\d{8}-\d{3,}|\d{4}-\d{4})$").unwrap()
});

/// Validate a report identifier before using it as a lookup key
pub fn validate_report_id(id: &str) -> bool {
    id.len() <= 32 && REPORT_ID_REGEX.is_match(id)
}

/// Validate a latitude/longitude pair
pub fn validate_coordinates(lat: f64, lng: f64) -> bool {
    lat.is_finite() && lng.is_finite() && (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lng)
}

/// Length of a free-text field as the user sees it (Unicode scalar values)
pub fn text_length(value: &str) -> usize {
    value.chars().count()
}
