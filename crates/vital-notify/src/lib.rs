//! # vital-notify
//!
//! Transient, auto-dismissing notifications ("toasts") for the Vital Health
//! site.
//!
//! Forms only ever *enqueue* notifications through the [`NotificationSink`]
//! trait. A rendering surface owns the other end: it lists what is currently
//! visible with [`NotificationQueue::visible`], lets the user dismiss a toast
//! with [`NotificationQueue::dismiss`], and drains the queue when it has shown
//! everything.
//!
//! A single process-wide queue is created at application start with
//! [`GlobalNotifications::init`] and reached through [`NOTIFICATIONS`].

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, OnceLock};
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How long a notification stays visible when nothing else is configured.
pub const DEFAULT_DISMISS_AFTER: Duration = Duration::from_millis(5_000);

/// The severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    /// Neutral information.
    Info,
    /// An operation completed (e.g. "Demo request submitted successfully!").
    Success,
    /// Something needs attention but nothing failed.
    Warning,
    /// An operation failed.
    Error,
}

impl NotificationLevel {
    /// Returns the CSS tag class for this level.
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for NotificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A single toast message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Identifies the toast so the user can dismiss it.
    pub id: Uuid,
    /// The severity of this notification.
    pub level: NotificationLevel,
    /// The message text.
    pub text: String,
    /// When the notification was raised.
    pub created_at: DateTime<Utc>,
    /// How long the toast stays visible, in milliseconds.
    pub dismiss_after_ms: u64,
}

impl Notification {
    /// Creates a notification raised now with the default lifetime.
    pub fn new(level: NotificationLevel, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            level,
            text: text.into(),
            created_at: Utc::now(),
            dismiss_after_ms: duration_ms(DEFAULT_DISMISS_AFTER),
        }
    }

    /// Creates a success notification.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Success, text)
    }

    /// Creates an error notification.
    pub fn error(text: impl Into<String>) -> Self {
        Self::new(NotificationLevel::Error, text)
    }

    /// Returns the instant after which the toast is no longer shown.
    pub fn expires_at(&self) -> DateTime<Utc> {
        let lifetime = i64::try_from(self.dismiss_after_ms).unwrap_or(i64::MAX);
        self.created_at + chrono::Duration::milliseconds(lifetime)
    }

    /// Returns `true` once the toast has outlived its lifetime.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at()
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Anything that can receive notifications.
///
/// Sinks are fire-and-forget: `notify` never fails and callers never wait on
/// the message being shown.
pub trait NotificationSink: Send + Sync {
    /// Delivers one notification.
    fn notify(&self, notification: Notification);

    /// Delivers an informational notification with the given text.
    fn info(&self, text: &str) {
        self.notify(Notification::new(NotificationLevel::Info, text));
    }

    /// Delivers a success notification with the given text.
    fn success(&self, text: &str) {
        self.notify(Notification::success(text));
    }

    /// Delivers an error notification with the given text.
    fn error(&self, text: &str) {
        self.notify(Notification::error(text));
    }
}

/// An in-memory notification queue shared between forms and the renderer.
///
/// Cloning yields another handle to the same queue.
///
/// # Examples
///
/// ```
/// use vital_notify::{NotificationQueue, NotificationSink};
///
/// let queue = NotificationQueue::new();
/// queue.success("Demo request submitted successfully!");
///
/// let shown = queue.drain();
/// assert_eq!(shown.len(), 1);
/// assert!(queue.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    entries: Arc<Mutex<VecDeque<Notification>>>,
    dismiss_after: Duration,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationQueue {
    /// Creates an empty queue using [`DEFAULT_DISMISS_AFTER`].
    pub fn new() -> Self {
        Self::with_dismiss_after(DEFAULT_DISMISS_AFTER)
    }

    /// Creates an empty queue whose toasts live for `dismiss_after`.
    pub fn with_dismiss_after(dismiss_after: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            dismiss_after,
        }
    }

    /// Returns the lifetime stamped onto every enqueued notification.
    pub const fn dismiss_after(&self) -> Duration {
        self.dismiss_after
    }

    /// Removes and returns every queued notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        self.lock().drain(..).collect()
    }

    /// Returns the notifications still visible at `now`, oldest first,
    /// without consuming them.
    pub fn visible(&self, now: DateTime<Utc>) -> Vec<Notification> {
        self.lock()
            .iter()
            .filter(|n| !n.is_expired(now))
            .cloned()
            .collect()
    }

    /// Drops notifications that have expired at `now`. Returns how many were
    /// removed.
    pub fn prune_expired(&self, now: DateTime<Utc>) -> usize {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|n| !n.is_expired(now));
        before - entries.len()
    }

    /// Removes one notification (the user clicked it away).
    ///
    /// Returns `true` if a notification with that id was queued.
    pub fn dismiss(&self, id: Uuid) -> bool {
        let mut entries = self.lock();
        let before = entries.len();
        entries.retain(|n| n.id != id);
        entries.len() < before
    }

    /// Returns the number of queued notifications, expired or not.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the queue without returning anything.
    pub fn clear(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Notification>> {
        self.entries.lock().expect("notification queue lock poisoned")
    }
}

impl NotificationSink for NotificationQueue {
    fn notify(&self, mut notification: Notification) {
        notification.dismiss_after_ms = duration_ms(self.dismiss_after);
        tracing::debug!(
            level = %notification.level,
            text = %notification.text,
            "notification queued"
        );
        self.lock().push_back(notification);
    }
}

/// The process-wide notification queue.
///
/// Call [`init`](GlobalNotifications::init) once at application start; forms
/// and the renderer then share [`get`](GlobalNotifications::get).
pub struct GlobalNotifications {
    inner: OnceLock<NotificationQueue>,
}

impl Default for GlobalNotifications {
    fn default() -> Self {
        Self::new()
    }
}

impl GlobalNotifications {
    /// Creates an uninitialised global slot.
    pub const fn new() -> Self {
        Self {
            inner: OnceLock::new(),
        }
    }

    /// Initialises the queue. Later calls return the existing queue and keep
    /// its original lifetime setting.
    pub fn init(&self, dismiss_after: Duration) -> &NotificationQueue {
        self.inner
            .get_or_init(|| NotificationQueue::with_dismiss_after(dismiss_after))
    }

    /// Returns the queue.
    ///
    /// # Panics
    ///
    /// Panics if [`init`](Self::init) has not been called.
    pub fn get(&self) -> &NotificationQueue {
        self.inner
            .get()
            .expect("Notifications have not been initialised. Call NOTIFICATIONS.init() first.")
    }

    /// Returns `true` once the queue exists.
    pub fn is_initialised(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global notification queue instance.
pub static NOTIFICATIONS: GlobalNotifications = GlobalNotifications::new();
