//! Form schemas: the ordered, uniquely-named field list of one form type.

use std::collections::HashSet;

use vital_core::{VitalError, VitalResult};

use crate::fields::FieldSpec;

/// The ordered set of [`FieldSpec`]s for one form type.
///
/// Schemas are built once at form-definition time and never mutated.
#[derive(Debug, Clone)]
pub struct FormSchema {
    name: String,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    /// Builds a schema, rejecting an empty field list and duplicate names.
    ///
    /// A schema with no fields could never validate, so it is refused here.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSpec>) -> VitalResult<Self> {
        let name = name.into();
        if fields.is_empty() {
            return Err(VitalError::EmptySchema(name));
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name.as_str()) {
                return Err(VitalError::DuplicateField(field.name.clone()));
            }
        }
        Ok(Self { name, fields })
    }

    /// Returns the form type's name (used in logs and payloads).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns `true` if the schema declares `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Returns the field names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the schema has no fields. Never true for a schema
    /// built with [`FormSchema::new`].
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
