//! # vital-test
//!
//! Test doubles for exercising form sessions without a network or a screen.
//!
//! ## Modules
//!
//! - [`recording_transport`] - A [`Transport`](vital_transport::Transport)
//!   that records every payload and replays scripted outcomes
//! - [`capturing_sink`] - A notification sink with assertion helpers

pub mod capturing_sink;
pub mod recording_transport;

pub use capturing_sink::CapturingSink;
pub use recording_transport::RecordingTransport;
