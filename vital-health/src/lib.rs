//! # vital-health
//!
//! The Vital Health Solutions site's form core.
//!
//! This is the meta-crate that re-exports the sub-crates and wires them
//! together at start-up with [`bootstrap`]. Depend on the individual crates
//! for finer-grained control.

/// Settings, errors, and logging.
pub use vital_core as core;

/// Notification queue and sink trait.
pub use vital_notify as notify;

/// Submission transports and the wire payload.
pub use vital_transport as transport;

/// Schemas, validation, and form sessions.
pub use vital_forms as forms;

/// Routes, modals, splash, and page content.
#[cfg(feature = "site")]
pub use vital_site as site;

/// Recording transports and capturing sinks for tests.
#[cfg(feature = "testing")]
pub use vital_test as test;

pub use anyhow;
pub use async_trait;
pub use serde;
pub use serde_json;
pub use tokio;
pub use tracing;

#[cfg(feature = "site")]
mod bootstrap;

#[cfg(feature = "site")]
pub use bootstrap::bootstrap;
