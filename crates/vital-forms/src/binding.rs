//! Typed field bindings.
//!
//! Each concrete form is a plain struct. A [`FieldBinding`] maps one schema
//! field name to a getter/setter pair on that struct, so a session can read
//! and write fields by name without any runtime reflection. The binding table
//! is built once, next to the form's schema.

use serde_json::Value;

use vital_core::{VitalError, VitalResult};
use vital_transport::Payload;

use crate::fields::{Attachment, FieldKind, FieldValue};
use crate::schema::FormSchema;
use crate::validation::FieldValues;

enum Accessor<M> {
    Text {
        get: fn(&M) -> &String,
        get_mut: fn(&mut M) -> &mut String,
    },
    File {
        get: fn(&M) -> &Option<Attachment>,
        get_mut: fn(&mut M) -> &mut Option<Attachment>,
    },
}

/// Maps one field name to a typed accessor pair on the form struct `M`.
pub struct FieldBinding<M> {
    name: &'static str,
    accessor: Accessor<M>,
}

impl<M> std::fmt::Debug for FieldBinding<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldBinding")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

impl<M> FieldBinding<M> {
    /// Binds a text field stored in a `String`.
    pub const fn text(
        name: &'static str,
        get: fn(&M) -> &String,
        get_mut: fn(&mut M) -> &mut String,
    ) -> Self {
        Self {
            name,
            accessor: Accessor::Text { get, get_mut },
        }
    }

    /// Binds a file field stored in an `Option<Attachment>`.
    pub const fn file(
        name: &'static str,
        get: fn(&M) -> &Option<Attachment>,
        get_mut: fn(&mut M) -> &mut Option<Attachment>,
    ) -> Self {
        Self {
            name,
            accessor: Accessor::File { get, get_mut },
        }
    }

    /// Returns the bound field name.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the kind of value this binding holds.
    pub const fn kind(&self) -> FieldKind {
        match self.accessor {
            Accessor::Text { .. } => FieldKind::Text,
            Accessor::File { .. } => FieldKind::File,
        }
    }

    /// Reads the field. Empty text and a missing file read as `None`.
    pub fn get(&self, model: &M) -> Option<FieldValue> {
        match &self.accessor {
            Accessor::Text { get, .. } => {
                let s = get(model);
                (!s.is_empty()).then(|| FieldValue::Text(s.clone()))
            }
            Accessor::File { get, .. } => get(model).clone().map(FieldValue::File),
        }
    }

    /// Writes the field, rejecting a value of the wrong kind.
    pub fn set(&self, model: &mut M, value: FieldValue) -> VitalResult<()> {
        let kind = self.kind();
        if !kind.accepts(&value) {
            return Err(VitalError::FieldKindMismatch {
                field: self.name.to_string(),
                expected: kind.describe(),
            });
        }
        match (&self.accessor, value) {
            (Accessor::Text { get_mut, .. }, FieldValue::Text(s)) => *get_mut(model) = s,
            (Accessor::File { get_mut, .. }, FieldValue::File(a)) => *get_mut(model) = Some(a),
            _ => unreachable!("kind checked above"),
        }
        Ok(())
    }

    /// Empties the field.
    pub fn clear(&self, model: &mut M) {
        match &self.accessor {
            Accessor::Text { get_mut, .. } => get_mut(model).clear(),
            Accessor::File { get_mut, .. } => *get_mut(model) = None,
        }
    }

    fn wire_value(&self, model: &M) -> Value {
        match &self.accessor {
            Accessor::Text { get, .. } => Value::String(get(model).clone()),
            Accessor::File { get, .. } => get(model).as_ref().map_or(Value::Null, |a| {
                serde_json::json!({
                    "fileName": a.file_name,
                    "contentType": a.content_type,
                    "size": a.size,
                })
            }),
        }
    }
}

/// Messages a form shows when a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionMessages {
    /// Shown on success.
    pub success: String,
    /// Shown on failure; `{error}` is replaced with the transport's error.
    pub failure: String,
}

impl SubmissionMessages {
    /// Creates a message pair.
    pub fn new(success: impl Into<String>, failure: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            failure: failure.into(),
        }
    }

    /// Renders the failure message for `error`.
    pub fn failure_for(&self, error: &impl std::fmt::Display) -> String {
        self.failure.replace("{error}", &error.to_string())
    }
}

/// A concrete form: a typed struct with a static schema and binding table.
///
/// Implementors provide the three tables; reading, writing, and payload
/// encoding by field name come for free.
pub trait FormModel: Default + Clone + Send + 'static {
    /// The form's validation schema.
    fn schema() -> &'static FormSchema;

    /// One binding per schema field, in schema order.
    fn bindings() -> &'static [FieldBinding<Self>];

    /// The notifications shown when a submission settles.
    fn messages() -> &'static SubmissionMessages;

    /// Finds the binding for a field name.
    fn binding(name: &str) -> VitalResult<&'static FieldBinding<Self>> {
        Self::bindings()
            .iter()
            .find(|b| b.name() == name)
            .ok_or_else(|| VitalError::UnknownField(name.to_string()))
    }

    /// Reads every non-empty field into a name → value map.
    fn field_values(&self) -> FieldValues {
        Self::bindings()
            .iter()
            .filter_map(|b| b.get(self).map(|v| (b.name().to_string(), v)))
            .collect()
    }

    /// Reads one field by name.
    fn get_field(&self, name: &str) -> VitalResult<Option<FieldValue>> {
        Ok(Self::binding(name)?.get(self))
    }

    /// Writes one field by name.
    fn set_field(&mut self, name: &str, value: FieldValue) -> VitalResult<()> {
        Self::binding(name)?.set(self, value)
    }

    /// Empties one field by name.
    fn clear_field(&mut self, name: &str) -> VitalResult<()> {
        Self::binding(name)?.clear(self);
        Ok(())
    }

    /// Encodes the form as a transport payload (one entry per field).
    fn to_payload(&self) -> Payload {
        let mut payload = Payload::new(Self::schema().name());
        for binding in Self::bindings() {
            payload.insert(binding.name(), binding.wire_value(self));
        }
        payload
    }
}
