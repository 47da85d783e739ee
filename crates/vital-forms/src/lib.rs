//! # vital-forms
//!
//! Form schemas, validation, and the submission state machine shared by the
//! contact, careers, and demo-request forms.
//!
//! ## Modules
//!
//! - [`fields`] - Field specs, constraints, and values
//! - [`schema`] - Ordered, uniquely-named field lists
//! - [`validation`] - The pure schema validator
//! - [`binding`] - Typed getter/setter tables and the [`FormModel`] trait
//! - [`session`] - The per-instance submit lifecycle controller
//! - [`catalog`] - The site's concrete forms

pub mod binding;
pub mod catalog;
pub mod fields;
pub mod schema;
pub mod session;
pub mod validation;

pub use binding::{FieldBinding, FormModel, SubmissionMessages};
pub use fields::{Attachment, Constraint, FieldKind, FieldSpec, FieldValue};
pub use schema::FormSchema;
pub use session::{FormSession, Settlement, SubmissionState, SubmitOutcome};
pub use validation::{validate, FieldOutcome, FieldValues, ValidationResult};
