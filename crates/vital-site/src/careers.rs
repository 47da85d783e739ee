//! The careers board: role cards plus the job application modal.

use vital_core::VitalResult;
use vital_forms::catalog::JobApplication;
use vital_forms::{FormSession, SubmitOutcome};

use crate::content::{self, Role, ROLES};
use crate::modal::ModalForm;

/// The careers page's interactive state.
///
/// Cloning yields another handle to the same board.
#[derive(Debug, Clone)]
pub struct CareersBoard {
    modal: ModalForm<JobApplication>,
}

impl CareersBoard {
    /// Creates a board whose application form uses `session`.
    pub fn new(session: FormSession<JobApplication>) -> Self {
        Self {
            modal: ModalForm::new(session),
        }
    }

    /// Returns the open roles.
    pub fn roles(&self) -> &'static [Role] {
        &ROLES
    }

    /// Handles a click on a role card: fills in the role and opens the
    /// application modal.
    ///
    /// The rest of the form is left as it was, so an applicant who closed the
    /// modal by accident can pick up where they left off.
    pub fn select_role(&self, id: &str) -> VitalResult<&'static Role> {
        let role = content::role(id)?;
        self.modal.session().set_text("role", role.title)?;
        tracing::info!(role = role.id, "role selected");
        self.modal.open();
        Ok(role)
    }

    /// Returns the application modal.
    pub const fn application(&self) -> &ModalForm<JobApplication> {
        &self.modal
    }

    /// Submits the application. The modal closes on success.
    pub async fn submit(&self) -> SubmitOutcome {
        self.modal.submit().await
    }
}
