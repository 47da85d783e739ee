//! A recording transport for testing form submissions.
//!
//! [`RecordingTransport`] stores every payload it is handed and answers with
//! the next scripted outcome (success once the script runs out). A gated
//! transport additionally blocks each call until the test releases it, which
//! lets a test observe a session while its submission is in flight.
//!
//! ## Example
//!
//! ```rust,no_run
//! use vital_test::RecordingTransport;
//! use vital_transport::TransportError;
//!
//! let transport = RecordingTransport::new();
//! transport.push_outcome(Err(TransportError::Network("connection reset".into())));
//! ```

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Semaphore;

use vital_transport::{Payload, Transport, TransportError};

#[derive(Debug, Default)]
struct Recorded {
    calls: Vec<Payload>,
    outcomes: VecDeque<Result<(), TransportError>>,
}

/// An in-memory transport that captures payloads for test verification.
///
/// Cloning yields another handle to the same log and script.
#[derive(Debug, Clone)]
pub struct RecordingTransport {
    recorded: Arc<Mutex<Recorded>>,
    gate: Option<Arc<Semaphore>>,
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingTransport {
    /// Creates a transport that answers immediately.
    pub fn new() -> Self {
        Self {
            recorded: Arc::new(Mutex::new(Recorded::default())),
            gate: None,
        }
    }

    /// Creates a transport whose calls block until [`release`](Self::release)
    /// lets them through.
    pub fn gated() -> Self {
        Self {
            gate: Some(Arc::new(Semaphore::new(0))),
            ..Self::new()
        }
    }

    /// Lets `n` blocked (or future) calls complete. No-op when not gated.
    pub fn release(&self, n: usize) {
        if let Some(gate) = &self.gate {
            gate.add_permits(n);
        }
    }

    /// Queues the outcome of the next unanswered call.
    pub fn push_outcome(&self, outcome: Result<(), TransportError>) {
        self.lock().outcomes.push_back(outcome);
    }

    /// Returns every payload received, oldest first.
    pub fn calls(&self) -> Vec<Payload> {
        self.lock().calls.clone()
    }

    /// Returns how many times `submit` was called.
    pub fn call_count(&self) -> usize {
        self.lock().calls.len()
    }

    /// Returns the most recent payload, if any.
    pub fn last_call(&self) -> Option<Payload> {
        self.lock().calls.last().cloned()
    }

    /// Asserts that `submit` was called exactly `expected` times.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_called_times(&self, expected: usize) {
        let actual = self.call_count();
        assert_eq!(
            actual, expected,
            "Expected {expected} transport call(s), but {actual} were made"
        );
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.recorded
            .lock()
            .expect("RecordingTransport lock poisoned")
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn submit(&self, payload: &Payload) -> Result<(), TransportError> {
        self.lock().calls.push(payload.clone());
        tracing::debug!(form = payload.form(), "payload recorded");

        if let Some(gate) = &self.gate {
            // A closed semaphore just means nobody will ever gate us again.
            if let Ok(permit) = gate.acquire().await {
                permit.forget();
            }
        }

        self.lock().outcomes.pop_front().unwrap_or(Ok(()))
    }

    fn name(&self) -> &str {
        "recording"
    }
}
