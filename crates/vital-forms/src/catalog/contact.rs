use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::binding::{FieldBinding, FormModel, SubmissionMessages};
use crate::fields::FieldSpec;
use crate::schema::FormSchema;

/// A message from the contact page. Same fields as a demo request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub name: String,
    pub phone_number: String,
    pub email: String,
    pub message: String,
}

static SCHEMA: Lazy<FormSchema> = Lazy::new(|| {
    let fields = || -> vital_core::VitalResult<Vec<FieldSpec>> {
        Ok(vec![
            FieldSpec::text("name").min_length(5, "Please enter your full name."),
            FieldSpec::text("phoneNumber")
                .pattern(r"^\d{10}$", "Please enter a valid 10-digit phone number.")?,
            FieldSpec::text("email").email("Please enter a valid email address."),
            FieldSpec::text("message")
                .min_length(20, "Your message must be at least 20 characters long."),
        ])
    };
    fields()
        .and_then(|f| FormSchema::new("contact", f))
        .expect("contact schema is valid")
});

type Binding = FieldBinding<ContactMessage>;

static BINDINGS: [Binding; 4] = [
    Binding::text("name", |m| &m.name, |m| &mut m.name),
    Binding::text("phoneNumber", |m| &m.phone_number, |m| &mut m.phone_number),
    Binding::text("email", |m| &m.email, |m| &mut m.email),
    Binding::text("message", |m| &m.message, |m| &mut m.message),
];

static MESSAGES: Lazy<SubmissionMessages> =
    Lazy::new(|| SubmissionMessages::new("Message sent successfully!", "Error: {error}"));

impl FormModel for ContactMessage {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate;

    #[test]
    fn test_bindings_cover_schema() {
        let names: Vec<_> = ContactMessage::bindings().iter().map(FieldBinding::name).collect();
        assert_eq!(names, ContactMessage::schema().names().collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_form_flags_every_field() {
        let result = validate(ContactMessage::schema(), &ContactMessage::default().field_values());
        assert_eq!(result.error_count(), 4);
    }

    #[test]
    fn test_payload_form_name() {
        assert_eq!(ContactMessage::default().to_payload().form(), "contact");
    }
}
