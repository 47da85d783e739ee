//! # vital-core
//!
//! Core types for the Vital Health site: errors, settings, and logging.
//! Every other crate in the workspace builds on this one.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result aliases
//! - [`settings`] - Site settings and global configuration
//! - [`settings_loader`] - TOML/JSON/environment settings loading
//! - [`logging`] - Tracing-based logging integration

pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use error::{TransportError, VitalError, VitalResult};
pub use settings::{Settings, SETTINGS};
