//! Submission form controller state machine.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::domain::entities::ContactSubmission;
use crate::domain::gateways::SubmissionGateway;
use crate::domain::validation::{self, Field, ValidationReport};

/// How long the success banner stays visible before auto-hiding.
const SUCCESS_BANNER_DELAY: Duration = Duration::from_secs(5);

/// Banner message when the presence pre-check fails.
const INCOMPLETE_MESSAGE: &str = "Please fill in all required fields before sending.";

/// Banner message when full validation fails.
const INVALID_MESSAGE: &str = "Please check your input and try again.";

/// Fallback banner message for a failure that carries no text of its own.
const DEFAULT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

#[derive(Debug, Default)]
struct FormState {
    fields: ContactSubmission,
    field_errors: ValidationReport,
    submit_error: Option<String>,
    submitting: bool,
    show_success: bool,
}

/// Controller for a single contact form instance.
///
/// Single-threaded, cooperative: all state lives behind one mutex that is
/// never held across an await point, and the injected gateway is invoked at
/// most once per click. A second `submit` while one is outstanding is a
/// no-op, enforced by the `submitting` flag rather than request cancellation.
///
/// The success banner auto-hides after a fixed delay via a scheduled task
/// tied to the controller's lifetime; dropping the controller cancels the
/// task, so no state is updated after disposal.
pub struct FormController<G: SubmissionGateway + 'static> {
    gateway: Arc<G>,
    state: Arc<Mutex<FormState>>,
    banner_delay: Duration,
    banner_timer: Option<JoinHandle<()>>,
}

impl<G: SubmissionGateway + 'static> FormController<G> {
    /// Creates a controller with empty fields and the default banner delay.
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            state: Arc::new(Mutex::new(FormState::default())),
            banner_delay: SUCCESS_BANNER_DELAY,
            banner_timer: None,
        }
    }

    /// Overrides the success banner delay. Intended for embedders.
    pub fn with_banner_delay(mut self, delay: Duration) -> Self {
        self.banner_delay = delay;
        self
    }

    /// Sets a field's value, clearing only that field's error.
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        let mut state = self.lock();
        let value = value.into();
        match field {
            Field::Name => state.fields.name = value,
            Field::Email => state.fields.email = value,
            Field::Subject => state.fields.subject = value,
            Field::Message => state.fields.message = value,
        }
        state.field_errors.clear(field);
    }

    /// The current value of a field.
    pub fn value(&self, field: Field) -> String {
        let state = self.lock();
        match field {
            Field::Name => state.fields.name.clone(),
            Field::Email => state.fields.email.clone(),
            Field::Subject => state.fields.subject.clone(),
            Field::Message => state.fields.message.clone(),
        }
    }

    /// The error recorded against a single field, if any.
    ///
    /// Populated when a submit attempt fails validation; the submit-time
    /// banner itself only ever shows the generic message.
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.lock().field_errors.error(field).map(str::to_string)
    }

    /// The banner error below the submit control, if any.
    pub fn submit_error(&self) -> Option<String> {
        self.lock().submit_error.clone()
    }

    /// True while a submission is in flight; the submit control should be
    /// disabled.
    pub fn submitting(&self) -> bool {
        self.lock().submitting
    }

    /// True while the success banner is visible.
    pub fn show_success(&self) -> bool {
        self.lock().show_success
    }

    /// Attempts to submit the current field values.
    ///
    /// Guard order:
    ///
    /// 1. no-op while a submission is already in flight;
    /// 2. presence pre-check (all four fields non-empty after trimming);
    ///    on failure a single generic banner error is set and nothing else
    ///    runs;
    /// 3. full validation; on failure the per-field errors are recorded,
    ///    but the banner again shows only a generic message.
    ///
    /// On success the fields are reset, the success banner is shown, and a
    /// timer is scheduled to hide it. On failure the entered values are kept
    /// so the user can retry without retyping, and the banner carries the
    /// failure's message.
    pub async fn submit(&mut self) {
        let submission = {
            let mut state = self.lock();
            if state.submitting {
                return;
            }

            let submission = state.fields.clone();

            if !submission.is_complete() {
                state.field_errors = ValidationReport::default();
                state.submit_error = Some(INCOMPLETE_MESSAGE.to_string());
                return;
            }

            let report = validation::validate(&submission);
            if !report.is_valid() {
                state.field_errors = report;
                state.submit_error = Some(INVALID_MESSAGE.to_string());
                return;
            }

            state.field_errors = ValidationReport::default();
            state.submit_error = None;
            state.submitting = true;
            submission
        };

        let outcome = self.gateway.send(&submission).await;

        match outcome {
            Ok(_) => {
                {
                    let mut state = self.lock();
                    state.submitting = false;
                    state.show_success = true;
                    state.fields = ContactSubmission::default();
                }
                self.schedule_banner_hide();
            }
            Err(e) => {
                let mut state = self.lock();
                state.submitting = false;
                let message = e.to_string();
                state.submit_error = Some(if message.is_empty() {
                    DEFAULT_FAILURE_MESSAGE.to_string()
                } else {
                    message
                });
            }
        }
    }

    /// Schedules the success banner to hide, replacing any earlier timer.
    fn schedule_banner_hide(&mut self) {
        if let Some(timer) = self.banner_timer.take() {
            timer.abort();
        }

        let state = Arc::clone(&self.state);
        let delay = self.banner_delay;
        self.banner_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            state.show_success = false;
        }));
    }

    fn lock(&self) -> MutexGuard<'_, FormState> {
        // The mutex is never held across an await, so poisoning only occurs
        // if a panic already happened while mutating state.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<G: SubmissionGateway + 'static> Drop for FormController<G> {
    fn drop(&mut self) {
        if let Some(timer) = self.banner_timer.take() {
            timer.abort();
        }
    }
}
