//! Plain-text documents generated from reports: download, print receipt, share

use chrono::NaiveDate;

use crate::models::{format_date, Report};

const RULE: &str = "====================================";

/// Attachment name for a report download
pub fn report_filename(report: &Report) -> String {
    format!("relatorio-{}.txt", report.id)
}

/// Full text report offered for download
pub fn report_document(report: &Report, generated_on: NaiveDate) -> String {
    let mut lines = vec![
        "RELATÓRIO DE DENÚNCIA - CLOUDVIGIA".to_string(),
        RULE.to_string(),
        String::new(),
        format!("ID da Denúncia: {}", report.id),
        format!("Data: {}", format_date(report.date)),
        format!("Tipo: {}", report.report_type.label()),
        format!("Urgência: {}", report.urgency.label()),
        format!("Status: {}", report.status.label()),
        format!("Cidade: {}", report.city),
        format!("Localização: {}", report.location),
        String::new(),
        "DESCRIÇÃO:".to_string(),
        report.description.clone(),
    ];
    if let Some(photo) = &report.photo {
        lines.push(String::new());
        lines.push(format!("Foto: {}", photo));
    }
    lines.extend([
        String::new(),
        RULE.to_string(),
        format!("Relatório gerado em: {}", format_date(generated_on)),
        "CloudVigia - Sistema de Monitoramento Urbano".to_string(),
        "www.cloudvigia.org".to_string(),
    ]);

    let mut document = lines.join("\n");
    document.push('\n');
    document
}

/// Receipt handed to the citizen right after a submission commits
pub fn submission_receipt(report: &Report, submitted_on: NaiveDate) -> String {
    [
        "CloudVigia - Comprovante de Denúncia".to_string(),
        RULE.to_string(),
        format!("ID da Denúncia: {}", report.id),
        format!("Data de Envio: {}", format_date(submitted_on)),
        format!("Status: {}", report.status.label()),
        format!("Tipo: {}", report.report_type.label()),
        format!("Urgência: {}", report.urgency.label()),
        format!("Localização: {}", report.location),
        RULE.to_string(),
        "Este comprovante atesta que sua denúncia foi recebida pelo sistema CloudVigia.".to_string(),
        "Você receberá atualizações sobre o andamento por e-mail.".to_string(),
    ]
    .join("\n")
}

/// One-line summary used by the share action
pub fn share_text(report: &Report) -> String {
    format!(
        "Denúncia {} no CloudVigia: {} em {}. Status: {}.",
        report.id,
        report.report_type.label(),
        report.location,
        report.status.label()
    )
}
