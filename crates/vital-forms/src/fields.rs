//! Field definitions and per-field constraint checks.
//!
//! A [`FieldSpec`] names one form field, says whether it holds text or an
//! attachment, and lists its [`Rule`]s in evaluation order. Each rule pairs a
//! [`Constraint`] with the message shown when it fails.
//!
//! Every field in this site is mandatory, so an absent value is checked as if
//! it were empty text and fails any length, pattern, or format rule.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use vital_core::{VitalError, VitalResult};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9\-]+(\.[a-zA-Z0-9\-]+)*\.[a-zA-Z]{2,}$")
        .expect("valid regex")
});

/// Metadata for an uploaded file. The bytes themselves are never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// The original file name as chosen by the user.
    pub file_name: String,
    /// The declared MIME content type.
    pub content_type: String,
    /// The size of the file in bytes.
    pub size: u64,
}

impl Attachment {
    /// Creates attachment metadata.
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, size: u64) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            size,
        }
    }
}

/// The current value of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Free text, including numbers typed as text.
    Text(String),
    /// An uploaded file.
    File(Attachment),
}

impl FieldValue {
    /// Returns the text, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::File(_) => None,
        }
    }

    /// Returns the attachment, if this is a file value.
    pub const fn as_file(&self) -> Option<&Attachment> {
        match self {
            Self::File(a) => Some(a),
            Self::Text(_) => None,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Attachment> for FieldValue {
    fn from(a: Attachment) -> Self {
        Self::File(a)
    }
}

/// What kind of value a field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// A text input.
    Text,
    /// A file input.
    File,
}

impl FieldKind {
    /// Returns a description used in kind-mismatch errors.
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Text => "a text value",
            Self::File => "a file attachment",
        }
    }

    /// Returns `true` if `value` is of this kind.
    pub const fn accepts(self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (Self::Text, FieldValue::Text(_)) | (Self::File, FieldValue::File(_))
        )
    }
}

/// A single check applied to a field value.
#[derive(Debug, Clone)]
pub enum Constraint {
    /// The trimmed text must have at least this many characters.
    MinLength(usize),
    /// The text must match this regular expression.
    Pattern(Regex),
    /// The text must be a syntactically valid email address.
    Email,
    /// A file must be attached.
    AttachmentRequired,
    /// The attached file must not exceed this many bytes.
    MaxBytes(u64),
    /// The attached file's content type must be one of these.
    ContentTypes(Vec<String>),
}

impl Constraint {
    /// Returns `true` if `value` satisfies this constraint.
    ///
    /// `None` (the field was never touched) is checked as empty text.
    pub fn is_satisfied_by(&self, value: Option<&FieldValue>) -> bool {
        let text = match value {
            None => Some(""),
            Some(v) => v.as_text(),
        };
        let file = value.and_then(FieldValue::as_file);

        match self {
            Self::MinLength(min) => text.is_some_and(|t| t.trim().chars().count() >= *min),
            Self::Pattern(re) => text.is_some_and(|t| re.is_match(t)),
            Self::Email => text.is_some_and(|t| EMAIL_RE.is_match(t)),
            Self::AttachmentRequired => file.is_some(),
            Self::MaxBytes(max) => file.is_some_and(|f| f.size <= *max),
            Self::ContentTypes(allowed) => file.is_some_and(|f| {
                allowed
                    .iter()
                    .any(|t| t.eq_ignore_ascii_case(f.content_type.trim()))
            }),
        }
    }
}

/// A constraint and the message shown when it fails.
#[derive(Debug, Clone)]
pub struct Rule {
    /// The check to perform.
    pub constraint: Constraint,
    /// The human-readable failure message.
    pub message: String,
}

/// Static description of one form field's validation rules.
///
/// # Examples
///
/// ```
/// use vital_forms::fields::FieldSpec;
///
/// let phone = FieldSpec::text("phoneNumber")
///     .pattern(r"^\d{10}$", "Please enter a valid 10-digit phone number.")
///     .unwrap();
/// assert_eq!(phone.name, "phoneNumber");
/// ```
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// The field name, unique within its schema.
    pub name: String,
    /// Whether the field takes text or a file.
    pub kind: FieldKind,
    /// Rules in evaluation order; the first failure wins.
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            rules: Vec::new(),
        }
    }

    /// Creates a text field with no rules yet.
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    /// Creates a file field with no rules yet.
    pub fn file(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::File)
    }

    /// Appends a rule.
    #[must_use]
    pub fn rule(mut self, constraint: Constraint, message: impl Into<String>) -> Self {
        self.rules.push(Rule {
            constraint,
            message: message.into(),
        });
        self
    }

    /// Requires at least `min` characters after trimming.
    #[must_use]
    pub fn min_length(self, min: usize, message: impl Into<String>) -> Self {
        self.rule(Constraint::MinLength(min), message)
    }

    /// Requires the text to match `pattern`.
    pub fn pattern(self, pattern: &str, message: impl Into<String>) -> VitalResult<Self> {
        let re = Regex::new(pattern).map_err(|e| VitalError::InvalidPattern {
            field: self.name.clone(),
            reason: e.to_string(),
        })?;
        Ok(self.rule(Constraint::Pattern(re), message))
    }

    /// Requires a valid email address.
    #[must_use]
    pub fn email(self, message: impl Into<String>) -> Self {
        self.rule(Constraint::Email, message)
    }

    /// Requires an attachment.
    #[must_use]
    pub fn attachment_required(self, message: impl Into<String>) -> Self {
        self.rule(Constraint::AttachmentRequired, message)
    }

    /// Caps the attachment size.
    #[must_use]
    pub fn max_bytes(self, max: u64, message: impl Into<String>) -> Self {
        self.rule(Constraint::MaxBytes(max), message)
    }

    /// Restricts the attachment's declared content type.
    #[must_use]
    pub fn content_types<I, S>(self, allowed: I, message: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let allowed = allowed.into_iter().map(Into::into).collect();
        self.rule(Constraint::ContentTypes(allowed), message)
    }

    /// Checks `value` against every rule in order and returns the message of
    /// the first rule that fails.
    pub fn check(&self, value: Option<&FieldValue>) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| !rule.constraint.is_satisfied_by(value))
            .map(|rule| rule.message.as_str())
    }
}
