//! Reports table rows

use serde::{Deserialize, Serialize};

use crate::models::{format_date, Report};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRow {
    pub id: String,
    pub type_label: String,
    pub location: String,
    pub date_label: String,
    pub status_label: String,
    pub status_class: String,
    pub urgency_label: String,
    pub urgency_class: String,
}

impl From<&Report> for TableRow {
    fn from(report: &Report) -> Self {
        Self {
            id: report.id.clone(),
            type_label: report.report_type.label().to_string(),
            location: report.location.clone(),
            date_label: format_date(report.date),
            status_label: report.status.label().to_string(),
            status_class: report.status.css_class().to_string(),
            urgency_label: report.urgency.label().to_string(),
            urgency_class: report.urgency.css_class().to_string(),
        }
    }
}

/// Rows ordered by date, newest first; reports sharing a date keep store order
pub fn render_table<'a>(reports: impl IntoIterator<Item = &'a Report>) -> Vec<TableRow> {
    let mut sorted: Vec<&Report> = reports.into_iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted.into_iter().map(TableRow::from).collect()
}
