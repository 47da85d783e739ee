//! Modal visibility and modal-hosted forms.
//!
//! A [`ModalShell`] is a plain `closed ⇄ open` flag. Opening never touches the
//! form inside it, so a half-filled form survives an accidental close.
//! [`ModalForm`] pairs a shell with a [`FormSession`] and adds the two
//! couplings between them: a successful submission closes the modal, and the
//! modal cannot be closed while a submission is in flight.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use vital_core::{VitalError, VitalResult};
use vital_forms::{FormModel, FormSession, SubmitOutcome};

/// Open/closed state of one modal. Starts closed.
///
/// Cloning yields another handle to the same modal.
#[derive(Debug, Clone, Default)]
pub struct ModalShell {
    open: Arc<AtomicBool>,
}

impl ModalShell {
    /// Creates a closed modal.
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the modal.
    pub fn open(&self) {
        self.open.store(true, Ordering::SeqCst);
    }

    /// Hides the modal.
    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }

    /// Flips the modal and returns the new state.
    pub fn toggle(&self) -> bool {
        !self.open.fetch_xor(true, Ordering::SeqCst)
    }

    /// Returns `true` while the modal is shown.
    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }
}

/// A form hosted in a modal.
pub struct ModalForm<M: FormModel> {
    session: FormSession<M>,
    shell: ModalShell,
}

impl<M: FormModel> Clone for ModalForm<M> {
    fn clone(&self) -> Self {
        Self {
            session: self.session.clone(),
            shell: self.shell.clone(),
        }
    }
}

impl<M: FormModel> std::fmt::Debug for ModalForm<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModalForm")
            .field("session", &self.session)
            .field("open", &self.shell.is_open())
            .finish()
    }
}

impl<M: FormModel> ModalForm<M> {
    /// Hosts `session` in a new, closed modal.
    pub fn new(session: FormSession<M>) -> Self {
        Self {
            session,
            shell: ModalShell::new(),
        }
    }

    /// Returns the hosted session.
    pub const fn session(&self) -> &FormSession<M> {
        &self.session
    }

    /// Returns the modal's visibility flag.
    pub const fn shell(&self) -> &ModalShell {
        &self.shell
    }

    /// Returns `true` while the modal is shown.
    pub fn is_open(&self) -> bool {
        self.shell.is_open()
    }

    /// Shows the modal, keeping whatever the form already holds.
    pub fn open(&self) {
        tracing::debug!(form = M::schema().name(), "modal opened");
        self.shell.open();
    }

    /// Hides the modal unless a submission is in flight.
    pub fn close(&self) -> VitalResult<()> {
        if self.session.is_submitting() {
            tracing::warn!(form = M::schema().name(), "close refused while submitting");
            return Err(VitalError::SubmissionInFlight(M::schema().name().to_string()));
        }
        self.shell.close();
        Ok(())
    }

    /// Submits the hosted form and closes the modal on success.
    pub async fn submit(&self) -> SubmitOutcome {
        let outcome = self.session.submit().await;
        if outcome.is_submitted() {
            self.shell.close();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_transitions() {
        let shell = ModalShell::new();
        assert!(!shell.is_open());
        shell.open();
        assert!(shell.is_open());
        shell.open();
        assert!(shell.is_open());
        shell.close();
        assert!(!shell.is_open());
    }

    #[test]
    fn test_shell_toggle() {
        let shell = ModalShell::new();
        assert!(shell.toggle());
        assert!(shell.is_open());
        assert!(!shell.toggle());
        assert!(!shell.is_open());
    }

    #[test]
    fn test_shell_clones_share_state() {
        let shell = ModalShell::new();
        shell.clone().open();
        assert!(shell.is_open());
    }
}
