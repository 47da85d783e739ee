//! The loading splash shown once when the site starts.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::OnceCell;

/// A one-shot loading phase.
///
/// The first caller of [`wait_ready`](Self::wait_ready) waits out the splash;
/// every caller after that (and any caller racing the first) sees the same
/// single completion. Cloning yields another handle to the same splash.
#[derive(Debug, Clone)]
pub struct LoadingSplash {
    duration: Duration,
    loaded: Arc<OnceCell<()>>,
}

impl LoadingSplash {
    /// Creates a splash lasting `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            loaded: Arc::new(OnceCell::new()),
        }
    }

    /// Returns the configured splash length.
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Returns `true` once the splash has finished.
    pub fn is_ready(&self) -> bool {
        self.loaded.initialized()
    }

    /// Waits until the splash has finished. Returns immediately afterwards.
    pub async fn wait_ready(&self) {
        self.loaded
            .get_or_init(|| async {
                tracing::debug!(duration = ?self.duration, "loading splash shown");
                tokio::time::sleep(self.duration).await;
            })
            .await;
    }
}
