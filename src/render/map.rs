//! Main map markers

use serde::{Deserialize, Serialize};

use crate::models::{
    format_date, Coordinates, ProblemType, Report, ReportStatus, FALLBACK_COORDINATES,
};

/// Zoom of the main dashboard map
pub const MAIN_MAP_ZOOM: u8 = 13;

const RESOLVED_COLOR: &str = "#10b981";

/// Marker colour: green once resolved, otherwise per category
pub fn marker_color(report_type: ProblemType, status: ReportStatus) -> &'static str {
    if status == ReportStatus::Resolved {
        return RESOLVED_COLOR;
    }

    match report_type {
        ProblemType::IrregularWaste => "#ef4444",
        ProblemType::CloggedDrain => "#3b82f6",
        ProblemType::ConstructionWaste => "#f59e0b",
        ProblemType::FloodRisk => "#8b5cf6",
        ProblemType::IllegalDumping => "#ec4899",
        ProblemType::Other => "#64748b",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPopup {
    pub title: String,
    pub type_label: String,
    pub status_label: String,
    pub location: String,
    pub date_label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub coordinates: Coordinates,
    pub color: String,
    pub popup: MarkerPopup,
}

impl From<&Report> for MapMarker {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.clone(),
            coordinates: report.coordinates,
            color: marker_color(report.report_type, report.status).to_string(),
            popup: MarkerPopup {
                title: report.id.clone(),
                type_label: report.report_type.label().to_string(),
                status_label: report.status.label().to_string(),
                location: report.location.clone(),
                date_label: format_date(report.date),
            },
        }
    }
}

/// Main map contents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<MapMarker>,
}

/// One marker per report, in store order
pub fn render_map<'a>(reports: impl IntoIterator<Item = &'a Report>) -> MapView {
    MapView {
        center: FALLBACK_COORDINATES,
        zoom: MAIN_MAP_ZOOM,
        markers: reports.into_iter().map(MapMarker::from).collect(),
    }
}
