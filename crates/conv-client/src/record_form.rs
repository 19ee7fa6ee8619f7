use crate::{ApiClient, RECORD_CREATED_MESSAGE, RECORD_FAILED_MESSAGE};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use conv_core::{FieldErrors, RecordDraft};
use log::{info, warn};

type SuccessCallback = Box<dyn Fn() + Send + Sync>;

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Rejected locally; nothing was sent
    Invalid(FieldErrors),
    /// Another submission is still in flight; nothing was sent
    Busy,
    /// Stored by the backend; the draft was reset to defaults
    Submitted { message: String },
    /// Rejected by the backend or the network; the draft is kept for correction
    Failed { message: String },
}

/// Clears the busy flag however the submission ends
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Registration form: the draft, its validation, and at most one
/// submission in flight.
pub struct RecordForm {
    client: Arc<ApiClient>,
    draft: Mutex<RecordDraft>,
    busy: AtomicBool,
    on_success: Option<SuccessCallback>,
}

impl RecordForm {
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            draft: Mutex::new(RecordDraft::default()),
            busy: AtomicBool::new(false),
            on_success: None,
        }
    }

    /// Called after every successful submission, e.g. to mark the list stale
    pub fn with_on_success(mut self, callback: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    fn draft_slot(&self) -> MutexGuard<'_, RecordDraft> {
        self.draft.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn draft(&self) -> RecordDraft {
        self.draft_slot().clone()
    }

    pub fn set_draft(&self, draft: RecordDraft) {
        *self.draft_slot() = draft;
    }

    pub fn reset(&self) {
        self.set_draft(RecordDraft::default());
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.draft().is_valid()
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.is_busy() {
            return SubmitOutcome::Busy;
        }

        let record = match self.draft().validate() {
            Ok(record) => record,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };

        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return SubmitOutcome::Busy;
        }
        let _busy = BusyGuard(&self.busy);

        match self.client.create_record(&record).await {
            Ok(reply) => {
                let message = reply
                    .message
                    .filter(|m| !m.trim().is_empty())
                    .unwrap_or_else(|| RECORD_CREATED_MESSAGE.to_string());
                info!("Registered {} {}", record.nombre, record.apellido);

                self.reset();
                if let Some(callback) = &self.on_success {
                    callback();
                }
                SubmitOutcome::Submitted { message }
            }
            Err(e) => {
                warn!("Registration failed: {e}");
                let message = e
                    .backend_message(&["error", "details"])
                    .unwrap_or_else(|| RECORD_FAILED_MESSAGE.to_string());
                SubmitOutcome::Failed { message }
            }
        }
    }
}
