//! A transport that pretends to talk to a backend.
//!
//! The careers page has no endpoint yet; applications are "processed" by
//! waiting a fixed delay and then reporting success.

use std::time::Duration;

use async_trait::async_trait;

use crate::{Payload, Transport, TransportError};

/// Waits `delay` and then succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
    delay: Duration,
}

impl SimulatedTransport {
    /// Creates a simulated transport with the given processing delay.
    pub const fn new(delay: Duration) -> Self {
        Self { delay }
    }

    /// Returns the processing delay.
    pub const fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl Transport for SimulatedTransport {
    async fn submit(&self, payload: &Payload) -> Result<(), TransportError> {
        tracing::debug!(
            form = payload.form(),
            delay_ms = u64::try_from(self.delay.as_millis()).unwrap_or(u64::MAX),
            "simulating submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    fn name(&self) -> &str {
        "simulated"
    }
}
