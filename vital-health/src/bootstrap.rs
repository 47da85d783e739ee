use std::sync::Arc;

use anyhow::Context;

use vital_core::logging::setup_logging;
use vital_core::{Settings, SETTINGS};
use vital_notify::NOTIFICATIONS;
use vital_site::Site;

/// Starts the site: validates `settings`, installs logging, publishes the
/// process-wide settings and notification queue, and builds the [`Site`].
///
/// Call once per process.
pub fn bootstrap(settings: Settings) -> anyhow::Result<Site> {
    anyhow::ensure!(!SETTINGS.is_configured(), "site has already been bootstrapped");
    settings.validate().context("invalid settings")?;

    setup_logging(&settings);
    SETTINGS.configure(settings);
    let settings = SETTINGS.get();

    let queue = NOTIFICATIONS.init(settings.ui.notification_dismiss());
    let site = Site::from_settings(settings, Arc::new(queue.clone()))
        .context("failed to build site transports")?;

    tracing::info!(
        demo = %settings.endpoints.demo_request_url,
        contact = %settings.endpoints.contact_url,
        "site bootstrapped"
    );
    Ok(site)
}
