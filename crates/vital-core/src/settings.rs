//! Settings for the Vital Health site.
//!
//! This module provides the [`Settings`] struct, which holds all site
//! configuration, and [`LazySettings`], a globally-accessible, lazily-initialized
//! settings instance.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{VitalError, VitalResult};

/// The spreadsheet API endpoint that receives demo requests.
pub const DEFAULT_DEMO_ENDPOINT: &str = "https://sheetdb.io/api/v1/qvfqwmj4aojv8";

/// Submission endpoint configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EndpointSettings {
    /// Where the navigation modal posts demo requests.
    pub demo_request_url: String,
    /// Where the contact page posts messages.
    pub contact_url: String,
    /// Per-request timeout for HTTP submissions, in milliseconds.
    pub timeout_ms: u64,
    /// Simulated processing delay for job applications, in milliseconds.
    pub careers_delay_ms: u64,
}

impl Default for EndpointSettings {
    fn default() -> Self {
        Self {
            demo_request_url: DEFAULT_DEMO_ENDPOINT.to_string(),
            contact_url: DEFAULT_DEMO_ENDPOINT.to_string(),
            timeout_ms: 10_000,
            careers_delay_ms: 2_000,
        }
    }
}

impl EndpointSettings {
    /// Returns the HTTP timeout as a [`Duration`].
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Returns the simulated careers delay as a [`Duration`].
    pub const fn careers_delay(&self) -> Duration {
        Duration::from_millis(self.careers_delay_ms)
    }
}

/// User interface timing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// How long the loading splash is shown on first start, in milliseconds.
    pub splash_ms: u64,
    /// How long a notification stays visible before it auto-dismisses.
    pub notification_dismiss_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            splash_ms: 1_500,
            notification_dismiss_ms: 5_000,
        }
    }
}

impl UiSettings {
    /// Returns the splash duration as a [`Duration`].
    pub const fn splash(&self) -> Duration {
        Duration::from_millis(self.splash_ms)
    }

    /// Returns the notification lifetime as a [`Duration`].
    pub const fn notification_dismiss(&self) -> Duration {
        Duration::from_millis(self.notification_dismiss_ms)
    }
}

/// The complete set of site settings.
///
/// Use [`SETTINGS`] to access the global instance.
///
/// # Examples
///
/// ```
/// use vital_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.log_level, "info");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The log filter directive (e.g. "info", "vital_forms=debug").
    pub log_level: String,
    /// Submission endpoints and their timing.
    pub endpoints: EndpointSettings,
    /// Splash and notification timing.
    pub ui: UiSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            endpoints: EndpointSettings::default(),
            ui: UiSettings::default(),
        }
    }
}

impl Settings {
    /// Checks that the configured endpoints are absolute `http(s)` URLs and
    /// that the HTTP timeout is non-zero.
    pub fn validate(&self) -> VitalResult<()> {
        check_endpoint("endpoints.demo_request_url", &self.endpoints.demo_request_url)?;
        check_endpoint("endpoints.contact_url", &self.endpoints.contact_url)?;
        if self.endpoints.timeout_ms == 0 {
            return Err(VitalError::ConfigurationError(
                "endpoints.timeout_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

fn check_endpoint(key: &str, value: &str) -> VitalResult<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| VitalError::ConfigurationError(format!("{key} is not a valid URL: {e}")))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(VitalError::ConfigurationError(format!(
            "{key} must use http or https, got '{other}'"
        ))),
    }
}

/// A lazily-initialized, globally-accessible settings container.
///
/// Call [`configure`](LazySettings::configure) once at startup to set the
/// settings, then use [`get`](LazySettings::get) to access them.
pub struct LazySettings {
    inner: std::sync::OnceLock<Settings>,
}

impl Default for LazySettings {
    fn default() -> Self {
        Self::new()
    }
}

impl LazySettings {
    /// Creates a new, unconfigured `LazySettings`.
    pub const fn new() -> Self {
        Self {
            inner: std::sync::OnceLock::new(),
        }
    }

    /// Configures the global settings. Must be called exactly once.
    ///
    /// # Panics
    ///
    /// Panics if settings have already been configured.
    pub fn configure(&self, settings: Settings) {
        self.inner
            .set(settings)
            .expect("Settings have already been configured");
    }

    /// Returns a reference to the configured settings.
    ///
    /// # Panics
    ///
    /// Panics if settings have not been configured.
    pub fn get(&self) -> &Settings {
        self.inner
            .get()
            .expect("Settings have not been configured. Call SETTINGS.configure() first.")
    }

    /// Returns the configured settings, or `None` before configuration.
    pub fn try_get(&self) -> Option<&Settings> {
        self.inner.get()
    }

    /// Returns `true` if settings have been configured.
    pub fn is_configured(&self) -> bool {
        self.inner.get().is_some()
    }
}

/// The global settings instance.
pub static SETTINGS: LazySettings = LazySettings::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert!(s.debug);
        assert_eq!(s.log_level, "info");
        assert_eq!(s.endpoints.demo_request_url, DEFAULT_DEMO_ENDPOINT);
        assert_eq!(s.endpoints.timeout(), Duration::from_secs(10));
        assert_eq!(s.endpoints.careers_delay(), Duration::from_millis(2_000));
        assert_eq!(s.ui.splash(), Duration::from_millis(1_500));
        assert!(s.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_url() {
        let mut s = Settings::default();
        s.endpoints.contact_url = "/api/contact".to_string();
        let err = s.validate().unwrap_err();
        assert!(err.to_string().contains("endpoints.contact_url"));
    }

    #[test]
    fn test_validate_rejects_non_http_scheme() {
        let mut s = Settings::default();
        s.endpoints.demo_request_url = "ftp://example.com/drop".to_string();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut s = Settings::default();
        s.endpoints.timeout_ms = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_lazy_settings_configure_and_get() {
        let lazy = LazySettings::new();
        assert!(!lazy.is_configured());
        assert!(lazy.try_get().is_none());

        let mut settings = Settings::default();
        settings.debug = false;
        lazy.configure(settings);

        assert!(lazy.is_configured());
        assert!(!lazy.get().debug);
    }

    #[test]
    #[should_panic(expected = "already been configured")]
    fn test_lazy_settings_double_configure_panics() {
        let lazy = LazySettings::new();
        lazy.configure(Settings::default());
        lazy.configure(Settings::default());
    }

    #[test]
    #[should_panic(expected = "not been configured")]
    fn test_lazy_settings_get_before_configure_panics() {
        let lazy = LazySettings::new();
        let _ = lazy.get();
    }
}
