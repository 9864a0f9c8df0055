//! Report data model

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Point used when the citizen never picked a location on the preview map
pub const FALLBACK_COORDINATES: Coordinates = Coordinates {
    lat: -23.5505,
    lng: -46.6333,
};

/// Placeholder user id recorded for anonymous submissions
pub const ANONYMOUS_USER_ID: &str = "anonymous";

/// A single citizen-submitted urban issue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report identifier (`CV-YYYYMMDD-NNN`)
    pub id: String,

    /// Problem category
    #[serde(rename = "type")]
    pub report_type: ProblemType,

    /// Severity classification
    pub urgency: Urgency,

    /// Free-text address
    pub location: String,

    /// Latitude/longitude pair
    pub coordinates: Coordinates,

    /// What the citizen saw
    pub description: String,

    /// Creation day
    pub date: NaiveDate,

    /// Lifecycle stage
    pub status: ReportStatus,

    /// City name
    pub city: String,

    /// Attached image reference
    pub photo: Option<String>,

    /// Submitter id or the anonymous placeholder
    #[serde(rename = "userId")]
    pub user_id: String,
}

impl Report {
    pub fn is_anonymous(&self) -> bool {
        self.user_id == ANONYMOUS_USER_ID || self.user_id.starts_with("anon-")
    }
}

/// Problem category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProblemType {
    IrregularWaste,
    CloggedDrain,
    ConstructionWaste,
    FloodRisk,
    IllegalDumping,
    Other,
}

impl ProblemType {
    pub const ALL: [ProblemType; 6] = [
        ProblemType::IrregularWaste,
        ProblemType::CloggedDrain,
        ProblemType::ConstructionWaste,
        ProblemType::FloodRisk,
        ProblemType::IllegalDumping,
        ProblemType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::IrregularWaste => "irregular_waste",
            ProblemType::CloggedDrain => "clogged_drain",
            ProblemType::ConstructionWaste => "construction_waste",
            ProblemType::FloodRisk => "flood_risk",
            ProblemType::IllegalDumping => "illegal_dumping",
            ProblemType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }

    /// Display label shown in tables, popups and receipts
    pub fn label(&self) -> &'static str {
        match self {
            ProblemType::IrregularWaste => "Descarte Irregular",
            ProblemType::CloggedDrain => "Bueiro Entupido",
            ProblemType::ConstructionWaste => "Entulho",
            ProblemType::FloodRisk => "Risco de Alagamento",
            ProblemType::IllegalDumping => "Descarte Ilegal",
            ProblemType::Other => "Outro",
        }
    }
}

/// Severity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Critical,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [Urgency::Low, Urgency::Medium, Urgency::High, Urgency::Critical];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Medium => "medium",
            Urgency::High => "high",
            Urgency::Critical => "critical",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|u| u.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Low => "Baixa",
            Urgency::Medium => "Média",
            Urgency::High => "Alta",
            Urgency::Critical => "Crítica",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            Urgency::Low => "urgency-low",
            Urgency::Medium => "urgency-medium",
            Urgency::High => "urgency-high",
            Urgency::Critical => "urgency-critical",
        }
    }
}

/// Lifecycle stage of a report
///
/// Only `Received` is ever produced locally; the other stages arrive with
/// the seed data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ReportStatus {
    #[default]
    #[serde(rename = "received")]
    Received,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
}

impl ReportStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ReportStatus::Received => "Recebida",
            ReportStatus::InProgress => "Em Andamento",
            ReportStatus::Resolved => "Resolvida",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ReportStatus::Received => "status-received",
            ReportStatus::InProgress => "status-in-progress",
            ReportStatus::Resolved => "status-resolved",
        }
    }
}

/// Latitude/longitude pair, serialized as `[lat, lng]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// Format a calendar day the way the dashboard displays it (`DD/MM/YYYY`)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Deserialize an optional problem type, treating `""` (an unselected
/// dropdown) as absent
pub(crate) fn deserialize_problem_type<'de, D>(deserializer: D) -> Result<Option<ProblemType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => ProblemType::from_str(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown problem type '{}'", s))),
    }
}

/// Deserialize an optional urgency, treating `""` as absent
pub(crate) fn deserialize_urgency<'de, D>(deserializer: D) -> Result<Option<Urgency>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => Urgency::from_str(s)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown urgency '{}'", s))),
    }
}
