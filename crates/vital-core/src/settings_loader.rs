//! Settings loading from configuration files.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (overriding defaults).
//! 3. Apply environment variable overrides (highest priority).
//! 4. Validate the result.
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `VITAL_DEBUG` | `debug` |
//! | `VITAL_LOG_LEVEL` | `log_level` |
//! | `VITAL_DEMO_REQUEST_URL` | `endpoints.demo_request_url` |
//! | `VITAL_CONTACT_URL` | `endpoints.contact_url` |
//! | `VITAL_HTTP_TIMEOUT_MS` | `endpoints.timeout_ms` |
//! | `VITAL_CAREERS_DELAY_MS` | `endpoints.careers_delay_ms` |
//! | `VITAL_SPLASH_MS` | `ui.splash_ms` |
//! | `VITAL_NOTIFICATION_DISMISS_MS` | `ui.notification_dismiss_ms` |
//!
//! ## Examples
//!
//! ```rust,no_run
//! use vital_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_file_with_env("config/site.toml").unwrap();
//! ```

use std::path::Path;

use crate::error::VitalError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// Keys missing from the TOML keep their default values.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, VitalError> {
    // Deserialize to a generic value first and merge over the defaults, so a
    // partial table (e.g. only `[ui]`) keeps the rest of the defaults.
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| VitalError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;
    merge_over_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, VitalError> {
    let content = read_config(path.as_ref(), "TOML")?;
    from_toml_str(&content)
}

/// Loads settings from a TOML file, applies environment overrides, and
/// validates the result.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, VitalError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from a JSON string.
pub fn from_json_str(json_str: &str) -> Result<Settings, VitalError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| VitalError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;
    merge_over_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, VitalError> {
    let content = read_config(path.as_ref(), "JSON")?;
    from_json_str(&content)
}

/// Loads settings from a JSON file, applies environment overrides, and
/// validates the result.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, VitalError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Result<Settings, VitalError> {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings.validate()?;
    Ok(settings)
}

/// Applies `VITAL_*` environment variable overrides to a settings struct.
///
/// Numeric variables that fail to parse are ignored with a warning.
pub fn apply_env_overrides(settings: &mut Settings) {
    apply_overrides_from(settings, |key| std::env::var(key).ok());
}

fn apply_overrides_from(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(val) = lookup("VITAL_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Some(val) = lookup("VITAL_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Some(val) = lookup("VITAL_DEMO_REQUEST_URL") {
        settings.endpoints.demo_request_url = val;
    }

    if let Some(val) = lookup("VITAL_CONTACT_URL") {
        settings.endpoints.contact_url = val;
    }

    let millis = |key: &str, target: &mut u64| {
        if let Some(val) = lookup(key) {
            match val.trim().parse::<u64>() {
                Ok(ms) => *target = ms,
                Err(_) => tracing::warn!(key, value = %val, "ignoring non-numeric override"),
            }
        }
    };
    millis("VITAL_HTTP_TIMEOUT_MS", &mut settings.endpoints.timeout_ms);
    millis("VITAL_CAREERS_DELAY_MS", &mut settings.endpoints.careers_delay_ms);
    millis("VITAL_SPLASH_MS", &mut settings.ui.splash_ms);
    millis(
        "VITAL_NOTIFICATION_DISMISS_MS",
        &mut settings.ui.notification_dismiss_ms,
    );
}

// ============================================================
// Helpers
// ============================================================

fn read_config(path: &Path, format: &str) -> Result<String, VitalError> {
    std::fs::read_to_string(path).map_err(|e| {
        VitalError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

fn merge_over_defaults(value: serde_json::Value, format: &str) -> Result<Settings, VitalError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        VitalError::ConfigurationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        VitalError::ConfigurationError(format!("Failed to deserialize settings from {format}: {e}"))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                let merged = if let Some(base_v) = base_map.remove(&key) {
                    merge_json(base_v, override_v)
                } else {
                    override_v
                };
                base_map.insert(key, merged);
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
