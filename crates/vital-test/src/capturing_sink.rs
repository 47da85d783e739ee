//! A notification sink that keeps everything it receives.

use std::sync::{Arc, Mutex};

use vital_notify::{Notification, NotificationLevel, NotificationSink};

/// Captures notifications for assertions.
///
/// Cloning yields another handle to the same capture list.
#[derive(Debug, Clone, Default)]
pub struct CapturingSink {
    captured: Arc<Mutex<Vec<Notification>>>,
}

impl CapturingSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every captured notification, oldest first.
    pub fn notifications(&self) -> Vec<Notification> {
        self.captured
            .lock()
            .expect("CapturingSink lock poisoned")
            .clone()
    }

    /// Returns the captured texts at `level`.
    pub fn texts(&self, level: NotificationLevel) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.level == level)
            .map(|n| n.text)
            .collect()
    }

    /// Returns the number of captured notifications.
    pub fn len(&self) -> usize {
        self.captured
            .lock()
            .expect("CapturingSink lock poisoned")
            .len()
    }

    /// Returns `true` if nothing was captured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Asserts that exactly `expected` notifications were raised.
    ///
    /// # Panics
    ///
    /// Panics if the count does not match.
    pub fn assert_count(&self, expected: usize) {
        let actual = self.len();
        assert_eq!(
            actual, expected,
            "Expected {expected} notification(s), but {actual} were raised: {:?}",
            self.notifications()
                .iter()
                .map(|n| &n.text)
                .collect::<Vec<_>>()
        );
    }

    /// Asserts that a success notification with exactly `text` was raised.
    ///
    /// # Panics
    ///
    /// Panics if none was found.
    pub fn assert_success(&self, text: &str) {
        let successes = self.texts(NotificationLevel::Success);
        assert!(
            successes.iter().any(|t| t == text),
            "No success notification '{text}'. Successes: {successes:?}"
        );
    }

    /// Asserts that an error notification containing `substring` was raised.
    ///
    /// # Panics
    ///
    /// Panics if none was found.
    pub fn assert_error_contains(&self, substring: &str) {
        let errors = self.texts(NotificationLevel::Error);
        assert!(
            errors.iter().any(|t| t.contains(substring)),
            "No error notification containing '{substring}'. Errors: {errors:?}"
        );
    }
}

impl NotificationSink for CapturingSink {
    fn notify(&self, notification: Notification) {
        self.captured
            .lock()
            .expect("CapturingSink lock poisoned")
            .push(notification);
    }
}
