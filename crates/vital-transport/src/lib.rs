//! # vital-transport
//!
//! Submission transports for the Vital Health site forms.
//!
//! A [`Transport`] delivers one [`Payload`] and reports success or a
//! [`TransportError`]. Every call is a single attempt: nothing here retries,
//! the user resubmits by hand.
//!
//! ## Modules
//!
//! - [`payload`] - The `{"data": [row]}` body shared by every endpoint
//! - [`http`] - POST to the third-party spreadsheet API
//! - [`simulated`] - A fixed delay that always succeeds (careers form)

pub mod http;
pub mod payload;
pub mod simulated;

use async_trait::async_trait;

pub use http::HttpTransport;
pub use payload::Payload;
pub use simulated::SimulatedTransport;
pub use vital_core::TransportError;

/// Delivers a form submission to its endpoint.
///
/// This is the only place a form session suspends. Implementations own any
/// timeout policy and surface it as [`TransportError::Timeout`].
#[async_trait]
pub trait Transport: Send + Sync {
    /// Delivers the payload once.
    async fn submit(&self, payload: &Payload) -> Result<(), TransportError>;

    /// Returns a short name for logs.
    fn name(&self) -> &str;
}
