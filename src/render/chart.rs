//! Chart datasets for the category doughnut and the monthly trend line

use serde::{Deserialize, Serialize};

use crate::models::{MonthlySeries, ProblemType, TypeDistribution};

const DOUGHNUT_COLORS: [&str; 5] = ["#ef4444", "#3b82f6", "#f59e0b", "#10b981", "#8b5cf6"];

const LINE_TENSION: f64 = 0.4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoughnutChart {
    pub labels: Vec<String>,
    pub data: Vec<u32>,
    pub background_color: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineDataset {
    pub label: String,
    pub data: Vec<u32>,
    pub border_color: String,
    pub background_color: String,
    pub fill: bool,
    pub tension: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub labels: Vec<String>,
    pub datasets: Vec<LineDataset>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub type_distribution: DoughnutChart,
    pub trend: LineChart,
}

/// Legend label used by the doughnut (plural where the table uses singular)
fn doughnut_label(problem_type: ProblemType) -> &'static str {
    match problem_type {
        ProblemType::CloggedDrain => "Bueiros Entupidos",
        other => other.label(),
    }
}

pub fn render_doughnut(distribution: &TypeDistribution) -> DoughnutChart {
    let entries = distribution.entries();
    DoughnutChart {
        labels: entries
            .iter()
            .map(|(t, _)| doughnut_label(*t).to_string())
            .collect(),
        data: entries.iter().map(|(_, share)| *share).collect(),
        background_color: DOUGHNUT_COLORS.iter().map(|c| c.to_string()).collect(),
    }
}

pub fn render_trend(monthly: &MonthlySeries) -> LineChart {
    let dataset = |label: &str, data: &[u32], border: &str, background: &str| LineDataset {
        label: label.to_string(),
        data: data.to_vec(),
        border_color: border.to_string(),
        background_color: background.to_string(),
        fill: true,
        tension: LINE_TENSION,
    };

    LineChart {
        labels: monthly.labels.clone(),
        datasets: vec![
            dataset(
                "Denúncias",
                &monthly.reports,
                "#10b981",
                "rgba(16, 185, 129, 0.1)",
            ),
            dataset(
                "Resoluções",
                &monthly.resolutions,
                "#8b5cf6",
                "rgba(139, 92, 246, 0.1)",
            ),
        ],
    }
}

pub fn render_charts(distribution: &TypeDistribution, monthly: &MonthlySeries) -> ChartData {
    ChartData {
        type_distribution: render_doughnut(distribution),
        trend: render_trend(monthly),
    }
}
