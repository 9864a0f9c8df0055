//! Draft preview models: picked location, device geolocation, photo

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{
    report::{deserialize_problem_type, deserialize_urgency},
    Coordinates, ProblemType, Urgency,
};

/// Location clicked on the preview map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct LocationPick {
    #[validate(range(min = -90.0, max = 90.0, message = "latitude out of range"))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0, message = "longitude out of range"))]
    pub lng: f64,
}

/// Result of a single device geolocation request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GeolocationFix {
    Position { lat: f64, lng: f64 },
    Error {
        code: GeolocationErrorCode,
        #[serde(default)]
        message: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeolocationErrorCode {
    /// The browser has no geolocation provider
    Unsupported,
    PermissionDenied,
    PositionUnavailable,
    Timeout,
}

impl GeolocationErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            GeolocationErrorCode::Unsupported => "unsupported",
            GeolocationErrorCode::PermissionDenied => "permission_denied",
            GeolocationErrorCode::PositionUnavailable => "position_unavailable",
            GeolocationErrorCode::Timeout => "timeout",
        }
    }
}

/// Handle to a marker placed on the preview map
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerHandle {
    pub id: u64,
    pub position: Coordinates,
}

/// What the preview map widget should currently display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreviewMapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<MarkerHandle>,
}

/// Photo accepted into the draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhotoAttachment {
    pub reference: String,
    pub content_type: String,
    pub size_bytes: u64,
    /// Size as displayed next to the thumbnail, e.g. `2.40 MB`
    pub size_label: String,
}

/// Live form values the preview card mirrors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PreviewQuery {
    #[serde(rename = "type", default, deserialize_with = "deserialize_problem_type")]
    pub report_type: Option<ProblemType>,
    #[serde(default, deserialize_with = "deserialize_urgency")]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub location: Option<String>,
}

/// Preview card plus draft state
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreviewSummary {
    pub type_label: String,
    pub urgency_label: String,
    pub location_label: String,
    pub badge_label: String,
    pub badge_color: String,
    pub date_label: String,
    pub picked_location: Option<Coordinates>,
    pub map: PreviewMapView,
    pub photo: Option<PhotoAttachment>,
}

/// Neighbourhood figures shown next to the preview map after a pick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalStats {
    /// Reports filed around the picked point
    pub local_reports: u32,
    /// Average days to resolution, one decimal place
    pub avg_resolution_days: f64,
}

/// Response to a location pick or geolocation fix
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationUpdate {
    pub picked_location: Coordinates,
    /// Address filled into the location field (device fixes only)
    pub address: Option<String>,
    pub map: PreviewMapView,
    pub local_stats: LocalStats,
    pub message: String,
}
