//! Seed data loaded into the store at startup

use chrono::NaiveDate;

use super::FixtureStore;
use crate::models::{
    CityStat, Coordinates, GlobalStats, MonthlySeries, ProblemType, Report, ReportStatus,
    TypeDistribution, Urgency,
};

pub fn seed_store() -> FixtureStore {
    FixtureStore::new(
        seed_reports(),
        seed_stats(),
        seed_cities(),
        seed_monthly(),
        seed_type_distribution(),
    )
}

#[allow(clippy::too_many_arguments)]
fn report(
    id: &str,
    report_type: ProblemType,
    urgency: Urgency,
    location: &str,
    (lat, lng): (f64, f64),
    description: &str,
    (y, m, d): (i32, u32, u32),
    status: ReportStatus,
    photo: Option<&str>,
    user_id: &str,
) -> Report {
    Report {
        id: id.to_string(),
        report_type,
        urgency,
        location: location.to_string(),
        coordinates: Coordinates::new(lat, lng),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        status,
        city: "São Paulo".to_string(),
        photo: photo.map(str::to_string),
        user_id: user_id.to_string(),
    }
}

pub fn seed_reports() -> Vec<Report> {
    vec![
        report(
            "CV-2026-0482",
            ProblemType::IrregularWaste,
            Urgency::High,
            "Rua das Flores, 123 - Centro",
            (-23.5505, -46.6333),
            "Acúmulo de lixo doméstico em via pública próximo ao bueiro, risco de entupimento",
            (2026, 10, 5),
            ReportStatus::Received,
            None,
            "anon-001",
        ),
        report(
            "CV-2026-0481",
            ProblemType::CloggedDrain,
            Urgency::Critical,
            "Av. Paulista, 1000",
            (-23.5614, -46.6559),
            "Bueiro completamente entupido por plásticos e folhas, água começando a acumular",
            (2026, 10, 4),
            ReportStatus::InProgress,
            Some("clogged_drain_001.jpg"),
            "user-045",
        ),
        report(
            "CV-2026-0480",
            ProblemType::ConstructionWaste,
            Urgency::Medium,
            "Rua Augusta, 500",
            (-23.5581, -46.6589),
            "Entulho de construção civil descartado irregularmente em terreno baldio",
            (2026, 10, 3),
            ReportStatus::Resolved,
            Some("construction_waste_003.jpg"),
            "user-123",
        ),
        report(
            "CV-2026-0479",
            ProblemType::FloodRisk,
            Urgency::High,
            "Rua da Consolação, 800",
            (-23.5525, -46.6528),
            "Ponto de alagamento crônico durante chuvas fortes, necessidade de revisão do sistema de drenagem",
            (2026, 10, 2),
            ReportStatus::InProgress,
            Some("flood_risk_012.jpg"),
            "user-089",
        ),
        report(
            "CV-2026-0478",
            ProblemType::IllegalDumping,
            Urgency::Medium,
            "Rua Frei Caneca, 200",
            (-23.5572, -46.6501),
            "Descarte ilegal de móveis usados e eletrodomésticos em via pública",
            (2026, 10, 1),
            ReportStatus::Received,
            Some("illegal_dumping_005.jpg"),
            "anon-002",
        ),
        report(
            "CV-2026-0477",
            ProblemType::IrregularWaste,
            Urgency::Low,
            "Alameda Santos, 100",
            (-23.5641, -46.6520),
            "Lixo orgânico espalhado por animais nas proximidades",
            (2026, 9, 30),
            ReportStatus::Resolved,
            None,
            "user-156",
        ),
    ]
}

pub fn seed_stats() -> GlobalStats {
    GlobalStats {
        total_reports: 2847,
        active_reports: 924,
        resolved_reports: 1923,
        avg_response_time: 3.2,
        user_engagement: 14827,
        monthly_growth: 12,
    }
}

pub fn seed_cities() -> Vec<CityStat> {
    [
        ("São Paulo", 1247, 934, 3.2),
        ("Rio de Janeiro", 892, 678, 4.1),
        ("Maceió", 543, 412, 2.8),
        ("Curitiba", 421, 389, 2.1),
        ("Porto Alegre", 398, 312, 3.5),
        ("Salvador", 356, 267, 4.3),
        ("Fortaleza", 289, 201, 4.7),
        ("Brasília", 245, 198, 3.9),
    ]
    .into_iter()
    .map(|(name, reports, resolved, avg_response_time)| CityStat {
        name: name.to_string(),
        reports,
        resolved,
        avg_response_time,
    })
    .collect()
}

pub fn seed_monthly() -> MonthlySeries {
    MonthlySeries {
        labels: ["Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out"]
            .into_iter()
            .map(str::to_string)
            .collect(),
        reports: vec![210, 245, 278, 302, 289, 312, 298, 324, 356, 382],
        resolutions: vec![189, 218, 245, 278, 267, 289, 276, 298, 321, 345],
    }
}

pub fn seed_type_distribution() -> TypeDistribution {
    TypeDistribution {
        irregular_waste: 42,
        clogged_drain: 28,
        construction_waste: 18,
        flood_risk: 8,
        illegal_dumping: 4,
    }
}
