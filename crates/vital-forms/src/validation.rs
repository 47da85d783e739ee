//! The field schema validator.
//!
//! [`validate`] is a pure function of a schema and a set of values. It checks
//! every field independently (there is no cross-field validation) and records
//! exactly one outcome per field. Errors accumulate rather than
//! short-circuiting, so every problem is reported at once.

use std::collections::HashMap;

use serde::Serialize;

use crate::fields::{FieldSpec, FieldValue};
use crate::schema::FormSchema;

/// Current field values keyed by field name. Absent keys are untouched fields.
pub type FieldValues = HashMap<String, FieldValue>;

/// The outcome of checking one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "message", rename_all = "lowercase")]
pub enum FieldOutcome {
    /// Every rule passed.
    Valid,
    /// A rule failed; carries its message.
    Invalid(String),
}

impl FieldOutcome {
    /// Returns `true` for [`FieldOutcome::Valid`].
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the failure message, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid(m) => Some(m),
        }
    }
}

/// Per-field outcomes of one validation run.
///
/// An empty result means validation has not run yet: untouched fields are
/// *unvalidated*, not passing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    outcomes: HashMap<String, FieldOutcome>,
}

impl ValidationResult {
    /// Returns `true` if validation ran and every field passed.
    pub fn is_valid(&self) -> bool {
        !self.outcomes.is_empty() && self.outcomes.values().all(FieldOutcome::is_valid)
    }

    /// Returns `true` if validation has not run (or was cleared).
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Returns the number of recorded outcomes.
    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    /// Returns the outcome for one field.
    pub fn get(&self, field: &str) -> Option<&FieldOutcome> {
        self.outcomes.get(field)
    }

    /// Returns the inline error message for one field, if it failed.
    pub fn error(&self, field: &str) -> Option<&str> {
        self.outcomes.get(field).and_then(FieldOutcome::message)
    }

    /// Returns every failing field with its message.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.outcomes
            .iter()
            .filter_map(|(name, outcome)| outcome.message().map(|m| (name.as_str(), m)))
    }

    /// Returns the number of failing fields.
    pub fn error_count(&self) -> usize {
        self.errors().count()
    }
}

/// Checks one field. An absent value is treated as empty.
pub fn validate_field(spec: &FieldSpec, value: Option<&FieldValue>) -> FieldOutcome {
    spec.check(value)
        .map_or(FieldOutcome::Valid, |message| FieldOutcome::Invalid(message.to_string()))
}

/// Validates every field of `schema` against `values`.
///
/// Values for names the schema does not declare are ignored.
pub fn validate(schema: &FormSchema, values: &FieldValues) -> ValidationResult {
    let outcomes = schema
        .fields()
        .iter()
        .map(|spec| (spec.name.clone(), validate_field(spec, values.get(&spec.name))))
        .collect();
    ValidationResult { outcomes }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Attachment, FieldSpec};

    fn schema() -> FormSchema {
        FormSchema::new(
            "demo",
            vec![
                FieldSpec::text("name").min_length(5, "Please enter your full name."),
                FieldSpec::text("email").email("Please enter a valid email address."),
                FieldSpec::file("resume").attachment_required("Resume is required"),
            ],
        )
        .unwrap()
    }

    fn values(pairs: &[(&str, FieldValue)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_all_valid() {
        let vals = values(&[
            ("name", "Jane Doe".into()),
            ("email", "jane@x.com".into()),
            ("resume", Attachment::new("cv.pdf", "application/pdf", 10).into()),
        ]);
        let result = validate(&schema(), &vals);
        assert!(result.is_valid());
        assert_eq!(result.len(), 3);
        assert_eq!(result.error_count(), 0);
    }

    #[test]
    fn test_errors_accumulate() {
        let result = validate(&schema(), &FieldValues::new());
        assert!(!result.is_valid());
        assert_eq!(result.error_count(), 3);
        assert_eq!(result.error("name"), Some("Please enter your full name."));
        assert_eq!(result.error("email"), Some("Please enter a valid email address."));
        assert_eq!(result.error("resume"), Some("Resume is required"));
    }

    #[test]
    fn test_every_field_has_one_entry() {
        let vals = values(&[("name", "Jane Doe".into()), ("nickname", "JD".into())]);
        let result = validate(&schema(), &vals);
        assert_eq!(result.len(), 3);
        assert!(result.get("nickname").is_none());
        assert_eq!(result.get("name"), Some(&FieldOutcome::Valid));
    }

    #[test]
    fn test_partial_valid() {
        let vals = values(&[("name", "Al".into()), ("email", "jane@x.com".into())]);
        let result = validate(&schema(), &vals);
        assert!(result.get("email").unwrap().is_valid());
        assert!(!result.get("name").unwrap().is_valid());
    }

    #[test]
    fn test_validation_is_idempotent() {
        let vals = values(&[("name", "Al".into()), ("email", "nope".into())]);
        let first = validate(&schema(), &vals);
        let second = validate(&schema(), &vals);
        assert_eq!(first, second);
    }

    #[test]
    fn test_default_result_is_unvalidated() {
        let result = ValidationResult::default();
        assert!(result.is_empty());
        assert!(!result.is_valid());
        assert!(result.get("name").is_none());
    }

    #[test]
    fn test_outcome_serializes() {
        let json = serde_json::to_value(FieldOutcome::Invalid("bad".into())).unwrap();
        assert_eq!(json, serde_json::json!({"status": "invalid", "message": "bad"}));
        let json = serde_json::to_value(FieldOutcome::Valid).unwrap();
        assert_eq!(json, serde_json::json!({"status": "valid"}));
    }
}
