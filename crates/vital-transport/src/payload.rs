//! The wire payload delivered to a submission endpoint.
//!
//! The spreadsheet API expects one JSON object per row, wrapped in a `data`
//! array:
//!
//! ```json
//! { "data": [ { "name": "Jane Doe", "email": "jane@x.com" } ] }
//! ```

use serde_json::{Map, Value};

/// The field values of one form submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Payload {
    form: String,
    fields: Map<String, Value>,
}

impl Payload {
    /// Creates an empty payload for the named form.
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            fields: Map::new(),
        }
    }

    /// Adds one field. A later insert for the same name replaces the earlier one.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds one field in place.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    /// Returns the name of the form this payload came from.
    pub fn form(&self) -> &str {
        &self.form
    }

    /// Returns the value of one field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns the field map.
    pub const fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the payload carries no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds the `{"data": [row]}` request body.
    pub fn to_wire(&self) -> Value {
        serde_json::json!({ "data": [Value::Object(self.fields.clone())] })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let payload = Payload::new("demo_request")
            .with_field("name", "Jane Doe")
            .with_field("email", "jane@x.com");

        assert_eq!(
            payload.to_wire(),
            serde_json::json!({
                "data": [{ "name": "Jane Doe", "email": "jane@x.com" }]
            })
        );
    }

    #[test]
    fn test_empty_payload_still_wraps_one_row() {
        let payload = Payload::new("contact");
        assert!(payload.is_empty());
        assert_eq!(payload.to_wire(), serde_json::json!({ "data": [{}] }));
    }

    #[test]
    fn test_insert_replaces() {
        let mut payload = Payload::new("contact");
        payload.insert("name", "first");
        payload.insert("name", "second");
        assert_eq!(payload.len(), 1);
        assert_eq!(payload.get("name"), Some(&Value::from("second")));
        assert_eq!(payload.form(), "contact");
    }
}
