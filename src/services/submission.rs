//! Report submission flow
//!
//! A submission moves through `Idle -> Validating -> Pending -> Committed`.
//! The pending stage waits out a simulated processing latency; the commit
//! then runs to completion even if the caller goes away.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tokio::sync::watch;
use tracing::{debug, info, warn};
use validator::Validate;

use crate::config::SubmissionConfig;
use crate::db::StorePool;
use crate::models::{
    Report, ReportStatus, ReportSubmission, StatsDelta, SubmissionPhase, SubmissionReceipt,
    ANONYMOUS_USER_ID, FALLBACK_COORDINATES,
};
use crate::services::clock::SharedClock;
use crate::services::id_generator::allocate_report_id;
use crate::services::preview::PreviewHandle;
use crate::services::receipt::submission_receipt;
use crate::utils::validation::text_length;
use crate::utils::{AppError, AppResult};

const MISSING_FIELDS_MESSAGE: &str = "Por favor, preencha todos os campos obrigatórios.";

/// Check a form before it is queued
pub fn validate_submission(form: &ReportSubmission, min_description_len: usize) -> AppResult<()> {
    if form.validate().is_err()
        || form.location.trim().is_empty()
        || form.description.trim().is_empty()
    {
        return Err(AppError::validation(MISSING_FIELDS_MESSAGE));
    }

    if text_length(form.description.trim()) < min_description_len {
        return Err(AppError::validation(format!(
            "Por favor, forneça uma descrição mais detalhada (mínimo {} caracteres).",
            min_description_len
        )));
    }

    Ok(())
}

/// Drives submissions against the session store
#[derive(Debug, Clone)]
pub struct SubmissionService {
    store: StorePool,
    preview: PreviewHandle,
    clock: SharedClock,
    config: SubmissionConfig,
    phase: Arc<watch::Sender<SubmissionPhase>>,
}

impl SubmissionService {
    pub fn new(
        store: StorePool,
        preview: PreviewHandle,
        clock: SharedClock,
        config: SubmissionConfig,
    ) -> Self {
        let (phase, _) = watch::channel(SubmissionPhase::Idle);
        Self {
            store,
            preview,
            clock,
            config,
            phase: Arc::new(phase),
        }
    }

    /// Current phase of the state machine
    pub fn phase(&self) -> SubmissionPhase {
        *self.phase.borrow()
    }

    /// Receiver notified on every phase change
    pub fn subscribe(&self) -> watch::Receiver<SubmissionPhase> {
        self.phase.subscribe()
    }

    /// Validate, wait out the latency, then commit
    ///
    /// Only one submission may be in flight; a second one while busy is
    /// rejected with a conflict.
    pub async fn submit(&self, form: ReportSubmission) -> AppResult<SubmissionReceipt> {
        let claimed = self.phase.send_if_modified(|phase| {
            if phase.is_busy() {
                false
            } else {
                *phase = SubmissionPhase::Validating;
                true
            }
        });
        if !claimed {
            return Err(AppError::Conflict(
                "a submission is already being processed".to_string(),
            ));
        }

        if let Err(e) = validate_submission(&form, self.config.min_description_len) {
            debug!(error = %e, "Submission rejected");
            self.phase.send_replace(SubmissionPhase::Idle);
            return Err(e);
        }

        self.phase.send_replace(SubmissionPhase::Pending);
        let latency = Duration::from_millis(self.config.latency_ms);
        debug!(latency_ms = self.config.latency_ms, "Submission pending");

        // Detached so that a dropped request still commits
        let service = self.clone();
        let task = tokio::spawn(async move {
            service.clock.sleep(latency).await;
            let result = service.commit(form).await;
            if result.is_err() {
                service.phase.send_replace(SubmissionPhase::Idle);
            }
            result
        });

        task.await
            .map_err(|e| AppError::internal(format!("submission task failed: {}", e)))?
    }

    /// Build the report, store it and reset the draft
    async fn commit(&self, form: ReportSubmission) -> AppResult<SubmissionReceipt> {
        let report_type = form
            .report_type
            .ok_or_else(|| AppError::validation(MISSING_FIELDS_MESSAGE))?;
        let urgency = form
            .urgency
            .ok_or_else(|| AppError::validation(MISSING_FIELDS_MESSAGE))?;

        let (picked, photo) = {
            let preview = self.preview.read().await;
            (
                preview.picked_location(),
                preview.photo().map(|p| p.reference.clone()),
            )
        };

        let user_number: u32 = rand::thread_rng().gen_range(0..1000);
        let user_id = if form.anonymous {
            ANONYMOUS_USER_ID.to_string()
        } else {
            format!("user-{}", user_number)
        };
        // Id and report date come from the same calendar day
        let today = self.clock.today();

        let report = {
            let mut store = self.store.write().await;
            let report = Report {
                id: allocate_report_id(&store, today),
                report_type,
                urgency,
                location: form.location.trim().to_string(),
                coordinates: picked.unwrap_or(FALLBACK_COORDINATES),
                description: form.description.trim().to_string(),
                date: today,
                status: ReportStatus::Received,
                city: self.config.default_city.clone(),
                photo,
                user_id,
            };
            store.commit(report.clone(), &StatsDelta::submission())?;
            report
        };

        self.preview.write().await.clear();
        self.phase.send_replace(SubmissionPhase::Committed);

        if picked.is_none() {
            warn!(report_id = %report.id, "No location picked, using fallback coordinates");
        }
        info!(
            report_id = %report.id,
            report_type = report.report_type.as_str(),
            urgency = report.urgency.as_str(),
            anonymous = report.is_anonymous(),
            "Report submitted"
        );

        Ok(SubmissionReceipt {
            report_id: report.id.clone(),
            message: "Denúncia enviada com sucesso!".to_string(),
            receipt: submission_receipt(&report, today),
            report,
        })
    }
}
