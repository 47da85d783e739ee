//! Core error types for the Vital Health site.
//!
//! [`VitalError`] covers every fallible operation in the workspace: schema
//! construction, field binding, submission guards, and configuration loading. [`TransportError`] is the narrower error a submission
//! transport reports back to a form session.
//!
//! Field validation failures are not errors: they are data carried by the
//! validation result and rendered inline next to the offending field.

use thiserror::Error;

/// The error returned by a submission transport.
///
/// Every variant renders as a human-readable description, suitable for
/// inclusion in the failure notification shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// The endpoint answered with a non-2xx status code.
    #[error("Request failed with status code {status}")]
    Status {
        /// The HTTP status code returned by the endpoint.
        status: u16,
        /// The response body, if one could be read.
        body: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("Request timed out after {0} ms")]
    Timeout(u64),
}

impl TransportError {
    /// Returns the HTTP status code, if the failure came from a response.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// The primary error type for the Vital Health site.
#[derive(Error, Debug)]
pub enum VitalError {
    // ── Schema & binding ─────────────────────────────────────────────

    /// A field name does not exist in the form's schema.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A schema was declared with the same field name twice.
    #[error("Duplicate field in schema: {0}")]
    DuplicateField(String),

    /// A schema was declared without any fields.
    #[error("Form schema '{0}' declares no fields")]
    EmptySchema(String),

    /// A pattern constraint carries a regex that does not compile.
    #[error("Invalid pattern for field '{field}': {reason}")]
    InvalidPattern {
        /// The field the pattern belongs to.
        field: String,
        /// The regex compiler's message.
        reason: String,
    },

    /// A value of the wrong kind was bound to a field.
    #[error("Field '{field}' expects {expected}")]
    FieldKindMismatch {
        /// The field being written.
        field: String,
        /// A description of the accepted value kind.
        expected: &'static str,
    },

    // ── Submission ───────────────────────────────────────────────────

    /// The form is submitting; edits and closing are refused until it settles.
    #[error("A submission is already in flight for form '{0}'")]
    SubmissionInFlight(String),

    // ── Site content ─────────────────────────────────────────────────

    /// A careers role id does not match any open role.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred during serialization or deserialization.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<serde_json::Error> for VitalError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A convenience result alias for Vital Health operations.
pub type VitalResult<T> = Result<T, VitalError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_status_display() {
        let err = TransportError::Status {
            status: 503,
            body: "unavailable".into(),
        };
        assert_eq!(err.to_string(), "Request failed with status code 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn test_transport_network_has_no_status() {
        let err = TransportError::Network("connection refused".into());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_transport_timeout_display() {
        let err = TransportError::Timeout(10_000);
        assert_eq!(err.to_string(), "Request timed out after 10000 ms");
    }

    #[test]
    fn test_vital_error_display() {
        let err = VitalError::UnknownField("fax".into());
        assert_eq!(err.to_string(), "Unknown field: fax");

        let err = VitalError::InvalidPattern {
            field: "phoneNumber".into(),
            reason: "unclosed group".into(),
        };
        assert!(err.to_string().contains("phoneNumber"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: VitalError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: VitalError = json_err.into();
        assert!(matches!(err, VitalError::SerializationError(_)));
    }
}
