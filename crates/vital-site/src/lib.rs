//! # vital-site
//!
//! The shell around the form core: which page a path shows, which forms are
//! mounted on it, the modals that host them, and the static content of the
//! careers and contact pages.
//!
//! ## Modules
//!
//! - [`routes`] - Path to page resolution and navigation links
//! - [`modal`] - Open/closed modal state and modal-hosted forms
//! - [`splash`] - The one-shot loading splash
//! - [`content`] - Open roles and contact methods
//! - [`careers`] - The careers board: role cards and the application modal
//! - [`site`] - Wires settings, transports, and notifications into one site

pub mod careers;
pub mod content;
pub mod modal;
pub mod routes;
pub mod site;
pub mod splash;

pub use careers::CareersBoard;
pub use modal::{ModalForm, ModalShell};
pub use routes::{resolve, NavLink, Page, NAV_LINKS};
pub use site::{Site, SiteTransports};
pub use splash::LoadingSplash;
