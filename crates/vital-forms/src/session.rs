//! The form session controller.
//!
//! A [`FormSession`] owns the mutable state of one form instance: the typed
//! field values, the last [`ValidationResult`], and the [`SubmissionState`].
//! It drives one submit attempt through
//!
//! ```text
//! Idle ─▶ Validating ─┬─▶ Idle                    (invalid: errors kept, no transport call)
//!                     └─▶ Submitting ─▶ Settled ─▶ Idle
//! ```
//!
//! The transport call is the only suspension point. The session lock is never
//! held across it, so a second submit attempt made while the first is in
//! flight observes `Submitting` and returns [`SubmitOutcome::Ignored`].
//!
//! If the submit future is dropped before the transport answers (a timeout,
//! a `select!` branch, an aborted task), the session still returns to `Idle`
//! with its values kept, as after a failure. No notification is sent.
//!
//! Cloning a session yields another handle to the same instance. Separate
//! instances never share state.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::Instrument;
use uuid::Uuid;

use vital_core::logging::submission_span;
use vital_core::{TransportError, VitalError, VitalResult};
use vital_notify::NotificationSink;
use vital_transport::Transport;

use crate::binding::FormModel;
use crate::fields::FieldValue;
use crate::validation::{validate, FieldValues, ValidationResult};

/// How a submission settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Settlement {
    /// The transport accepted the submission.
    Success,
    /// The transport reported an error.
    Failure,
}

/// The submit lifecycle phase of one form instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// Accepting edits.
    Idle,
    /// Running the validator.
    Validating,
    /// Waiting on the transport.
    Submitting,
    /// The transport answered; the session is about to return to idle.
    Settled(Settlement),
}

/// What a call to [`FormSession::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission was already in flight; nothing happened.
    Ignored,
    /// Validation failed; the errors are in [`FormSession::validation`].
    Invalid,
    /// The transport accepted the submission and the form was reset.
    Submitted,
    /// The transport failed; the values were kept.
    Failed(TransportError),
}

impl SubmitOutcome {
    /// Returns `true` for [`SubmitOutcome::Submitted`].
    pub const fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

#[derive(Debug)]
struct SessionState<M> {
    model: M,
    validation: ValidationResult,
    state: SubmissionState,
    last_settlement: Option<Settlement>,
}

/// Puts a `Submitting` session back to `Idle` unless disarmed after the
/// transport settles.
struct InFlight<'a, M> {
    inner: &'a Mutex<SessionState<M>>,
    form: &'static str,
    armed: bool,
}

impl<M> InFlight<'_, M> {
    fn disarm(mut self) {
        self.armed = false;
    }
}

impl<M> Drop for InFlight<'_, M> {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        let mut state = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if state.state == SubmissionState::Submitting {
            state.last_settlement = Some(Settlement::Failure);
            state.state = SubmissionState::Idle;
        }
        tracing::warn!(form = self.form, "submission abandoned before settling");
    }
}

/// Mediates one form instance's lifecycle end to end.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use vital_forms::catalog::DemoRequest;
/// use vital_forms::session::{FormSession, SubmitOutcome};
/// use vital_notify::NotificationQueue;
/// use vital_transport::SimulatedTransport;
///
/// # async fn run() -> vital_core::VitalResult<()> {
/// let session: FormSession<DemoRequest> = FormSession::new(
///     Arc::new(SimulatedTransport::new(Duration::ZERO)),
///     Arc::new(NotificationQueue::new()),
/// );
/// session.set_text("name", "Al")?;
/// assert_eq!(session.submit().await, SubmitOutcome::Invalid);
/// # Ok(())
/// # }
/// ```
pub struct FormSession<M: FormModel> {
    inner: Arc<Mutex<SessionState<M>>>,
    transport: Arc<dyn Transport>,
    sink: Arc<dyn NotificationSink>,
}

impl<M: FormModel> Clone for FormSession<M> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            transport: Arc::clone(&self.transport),
            sink: Arc::clone(&self.sink),
        }
    }
}

impl<M: FormModel> std::fmt::Debug for FormSession<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormSession")
            .field("form", &M::schema().name())
            .field("transport", &self.transport.name())
            .field("state", &self.state())
            .finish_non_exhaustive()
    }
}

impl<M: FormModel> FormSession<M> {
    /// Creates an idle session with empty values.
    pub fn new(transport: Arc<dyn Transport>, sink: Arc<dyn NotificationSink>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(SessionState {
                model: M::default(),
                validation: ValidationResult::default(),
                state: SubmissionState::Idle,
                last_settlement: None,
            })),
            transport,
            sink,
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState<M>> {
        self.inner.lock().expect("form session lock poisoned")
    }

    fn form_name() -> &'static str {
        M::schema().name()
    }

    fn ensure_editable(state: &SessionState<M>) -> VitalResult<()> {
        if state.state == SubmissionState::Submitting {
            tracing::warn!(form = Self::form_name(), "edit refused while submitting");
            return Err(VitalError::SubmissionInFlight(Self::form_name().to_string()));
        }
        Ok(())
    }

    // ── Edits ────────────────────────────────────────────────────────

    /// Writes one field by name. Does not trigger validation.
    pub fn set_value(&self, name: &str, value: FieldValue) -> VitalResult<()> {
        let mut state = self.lock();
        Self::ensure_editable(&state)?;
        state.model.set_field(name, value)?;
        tracing::debug!(form = Self::form_name(), field = name, "field edited");
        Ok(())
    }

    /// Writes one text field by name.
    pub fn set_text(&self, name: &str, text: &str) -> VitalResult<()> {
        self.set_value(name, FieldValue::Text(text.to_string()))
    }

    /// Empties one field by name.
    pub fn clear_value(&self, name: &str) -> VitalResult<()> {
        let mut state = self.lock();
        Self::ensure_editable(&state)?;
        state.model.clear_field(name)
    }

    /// Edits the typed form struct directly.
    pub fn update(&self, edit: impl FnOnce(&mut M)) -> VitalResult<()> {
        let mut state = self.lock();
        Self::ensure_editable(&state)?;
        edit(&mut state.model);
        Ok(())
    }

    /// Clears every value and the validation result.
    pub fn reset(&self) -> VitalResult<()> {
        let mut state = self.lock();
        Self::ensure_editable(&state)?;
        state.model = M::default();
        state.validation = ValidationResult::default();
        Ok(())
    }

    // ── Reads ────────────────────────────────────────────────────────

    /// Returns a copy of the typed form struct.
    pub fn model(&self) -> M {
        self.lock().model.clone()
    }

    /// Returns the current non-empty values by field name.
    pub fn values(&self) -> FieldValues {
        self.lock().model.field_values()
    }

    /// Reads one field by name.
    pub fn value(&self, name: &str) -> VitalResult<Option<FieldValue>> {
        self.lock().model.get_field(name)
    }

    /// Returns the result of the last validation run.
    pub fn validation(&self) -> ValidationResult {
        self.lock().validation.clone()
    }

    /// Returns the inline error for one field, if the last run flagged it.
    pub fn error(&self, name: &str) -> Option<String> {
        self.lock().validation.error(name).map(str::to_string)
    }

    /// Returns the current lifecycle phase.
    pub fn state(&self) -> SubmissionState {
        self.lock().state
    }

    /// Returns `true` while the transport call is in flight.
    pub fn is_submitting(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    /// Returns how the most recent submission settled, if any has.
    pub fn last_settlement(&self) -> Option<Settlement> {
        self.lock().last_settlement
    }

    // ── Submit ───────────────────────────────────────────────────────

    /// Runs one submit attempt.
    ///
    /// Validation failure keeps the errors and skips the transport. On
    /// success the form is reset and a success notification is sent; on
    /// failure the values are kept and a failure notification carrying the
    /// transport error is sent. Either way the session ends up idle.
    pub async fn submit(&self) -> SubmitOutcome {
        let payload = {
            let mut state = self.lock();
            if state.state == SubmissionState::Submitting {
                tracing::debug!(form = Self::form_name(), "submit ignored: already in flight");
                return SubmitOutcome::Ignored;
            }

            state.state = SubmissionState::Validating;
            let result = validate(M::schema(), &state.model.field_values());
            let valid = result.is_valid();
            state.validation = result;

            if !valid {
                state.state = SubmissionState::Idle;
                tracing::debug!(
                    form = Self::form_name(),
                    errors = state.validation.error_count(),
                    "validation failed"
                );
                return SubmitOutcome::Invalid;
            }

            state.state = SubmissionState::Submitting;
            state.model.to_payload()
        };

        let in_flight = InFlight {
            inner: &self.inner,
            form: Self::form_name(),
            armed: true,
        };
        let span = submission_span(Self::form_name(), &Uuid::new_v4().to_string());
        let result = self
            .transport
            .submit(&payload)
            .instrument(span.clone())
            .await;
        in_flight.disarm();
        let _entered = span.enter();

        match result {
            Ok(()) => {
                {
                    let mut state = self.lock();
                    state.state = SubmissionState::Settled(Settlement::Success);
                    state.model = M::default();
                    state.validation = ValidationResult::default();
                    state.last_settlement = Some(Settlement::Success);
                    state.state = SubmissionState::Idle;
                }
                tracing::info!(transport = self.transport.name(), "submission succeeded");
                self.sink.success(&M::messages().success);
                SubmitOutcome::Submitted
            }
            Err(err) => {
                {
                    let mut state = self.lock();
                    state.state = SubmissionState::Settled(Settlement::Failure);
                    state.last_settlement = Some(Settlement::Failure);
                    state.state = SubmissionState::Idle;
                }
                tracing::warn!(
                    transport = self.transport.name(),
                    error = %err,
                    "submission failed"
                );
                self.sink.error(&M::messages().failure_for(&err));
                SubmitOutcome::Failed(err)
            }
        }
    }
}
