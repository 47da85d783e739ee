use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::binding::{FieldBinding, FormModel, SubmissionMessages};
use crate::fields::FieldSpec;
use crate::schema::FormSchema;

/// A demo request from the navigation modal.
///
/// Field names match the columns of the spreadsheet the request lands in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoRequest {
    /// The requester's full name.
    pub name: String,
    /// A 10-digit phone number, digits only.
    pub phone_number: String,
    /// The requester's email address.
    pub email: String,
    /// What the requester wants to see.
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
        .and_then(|f| FormSchema::new("demo_request", f))
        .expect("demo request schema is valid")
});

type Binding = FieldBinding<DemoRequest>;

static BINDINGS: [Binding; 4] = [
    Binding::text("name", |m| &m.name, |m| &mut m.name),
    Binding::text("phoneNumber", |m| &m.phone_number, |m| &mut m.phone_number),
    Binding::text("email", |m| &m.email, |m| &mut m.email),
    Binding::text("message", |m| &m.message, |m| &mut m.message),
];

static MESSAGES: Lazy<SubmissionMessages> = Lazy::new(|| {
    SubmissionMessages::new("Demo request submitted successfully!", "Error: {error}")
});

impl FormModel for DemoRequest {
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

    fn valid() -> DemoRequest {
        DemoRequest {
            name: "Jane Doe".into(),
            phone_number: "1234567890".into(),
            email: "jane@x.com".into(),
            message: "Please show me the meal planning features.".into(),
        }
    }

    #[test]
    fn test_bindings_cover_schema() {
        let names: Vec<_> = DemoRequest::bindings().iter().map(FieldBinding::name).collect();
        assert_eq!(names, DemoRequest::schema().names().collect::<Vec<_>>());
    }

    #[test]
    fn test_valid_request() {
        let result = validate(DemoRequest::schema(), &valid().field_values());
        assert!(result.is_valid());
    }

    #[test]
    fn test_short_name() {
        let mut m = valid();
        m.name = "Al".into();
        let result = validate(DemoRequest::schema(), &m.field_values());
        assert_eq!(result.error("name"), Some("Please enter your full name."));
        assert_eq!(result.error_count(), 1);
    }

    #[test]
    fn test_phone_must_be_ten_digits() {
        let mut m = valid();
        m.phone_number = "+1 (555) 000-0000".into();
        let result = validate(DemoRequest::schema(), &m.field_values());
        assert_eq!(
            result.error("phoneNumber"),
            Some("Please enter a valid 10-digit phone number.")
        );
    }

    #[test]
    fn test_message_min_length_boundary() {
        let mut m = valid();
        m.message = "x".repeat(19);
        let result = validate(DemoRequest::schema(), &m.field_values());
        assert!(result.error("message").is_some());

        m.message = "x".repeat(20);
        let result = validate(DemoRequest::schema(), &m.field_values());
        assert!(result.error("message").is_none());
    }

    #[test]
    fn test_payload_uses_column_names() {
        let payload = valid().to_payload();
        assert_eq!(payload.form(), "demo_request");
        assert_eq!(
            payload.to_wire(),
            serde_json::json!({
                "data": [{
                    "name": "Jane Doe",
                    "phoneNumber": "1234567890",
                    "email": "jane@x.com",
                    "message": "Please show me the meal planning features."
                }]
            })
        );
    }

    #[test]
    fn test_serde_matches_field_names() {
        let json = serde_json::to_value(valid()).unwrap();
        assert_eq!(json["phoneNumber"], "1234567890");
    }
}
