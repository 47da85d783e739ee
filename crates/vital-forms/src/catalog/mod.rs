//! The site's concrete forms.
//!
//! - [`DemoRequest`] - the "Request Demo" modal in the navigation bar
//! - [`ContactMessage`] - the inline form on the contact page
//! - [`JobApplication`] - the careers application modal

mod contact;
mod demo_request;
mod job_application;

pub use contact::ContactMessage;
pub use demo_request::DemoRequest;
pub use job_application::{JobApplication, MAX_RESUME_BYTES, RESUME_CONTENT_TYPE};
