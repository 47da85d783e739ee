use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::binding::{FieldBinding, FormModel, SubmissionMessages};
use crate::fields::{Attachment, FieldSpec};
use crate::schema::FormSchema;

/// The largest resume accepted: 5 MiB.
pub const MAX_RESUME_BYTES: u64 = 5 * 1024 * 1024;

/// The only content type accepted for resumes.
pub const RESUME_CONTENT_TYPE: &str = "application/pdf";

/// An application from the careers page.
///
/// `role` is filled in from the role card the applicant clicked, not typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub resume: Option<Attachment>,
    pub role: String,
}

static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    let fields = vec![
        FieldSpec::text("fullName").min_length(2, "Full name must be at least 2 characters"),
        FieldSpec::text("email").email("Invalid email address"),
        FieldSpec::text("phone").min_length(10, "Phone number must be at least 10 digits"),
        FieldSpec::file("resume")
            .attachment_required("Resume is required")
            .max_bytes(MAX_RESUME_BYTES, "File size must be less than 5MB")
            .content_types([RESUME_CONTENT_TYPE], "Only PDF files are allowed"),
        FieldSpec::text("role").min_length(1, "Please select a role"),
    ];
    FormSchema::new("job_application", fields).expect("job application schema is valid")
});

type Binding = FieldBinding<JobApplication>;

static BINDINGS: [Binding; 5] = [
    Binding::text("fullName", |m| &m.full_name, |m| &mut m.full_name),
    Binding::text("email", |m| &m.email, |m| &mut m.email),
    Binding::text("phone", |m| &m.phone, |m| &mut m.phone),
    Binding::file("resume", |m| &m.resume, |m| &mut m.resume),
    Binding::text("role", |m| &m.role, |m| &mut m.role),
];

static MESSAGES: Lazy<SubmissionMessages> = Lazy::new(|| {
    SubmissionMessages::new(
        "Application submitted successfully!",
        "Submission failed ({error}). Please try again.",
    )
});

impl FormModel for JobApplication {
    fn schema() -> &'static FormSchema {
        &SCHEMA
    }

    fn bindings() -> &'static [FieldBinding<Self>] {
        &BINDINGS
    }

    fn messages() -> &'static SubmissionMessages {
        &MESSAGES
    }
}
