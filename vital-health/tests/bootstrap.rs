//! Start-up wiring. Each test binary gets its own globals, so this file holds
//! the single test that bootstraps.

use std::time::Duration;

use vital_health::core::{settings_loader, SETTINGS};
use vital_health::forms::SubmitOutcome;
use vital_health::notify::{NotificationLevel, NOTIFICATIONS};
use vital_health::site::Page;

#[tokio::test(start_paused = true)]
async fn test_bootstrap_wires_globals() {
    let settings = settings_loader::from_toml_str(
        r#"
        debug = false
        log_level = "warn"

        [endpoints]
        careers_delay_ms = 250

        [ui]
        splash_ms = 100
        notification_dismiss_ms = 3000
        "#,
    )
    .unwrap();

    let site = vital_health::bootstrap(settings).unwrap();
    assert!(SETTINGS.is_configured());
    assert_eq!(SETTINGS.get().endpoints.careers_delay_ms, 250);
    assert_eq!(
        NOTIFICATIONS.get().dismiss_after(),
        Duration::from_millis(3_000)
    );
    assert_eq!(site.splash().duration(), Duration::from_millis(100));

    // Job applications go through the simulated transport and land in the
    // global queue.
    assert_eq!(site.navigate("/join-team").unwrap(), Page::JoinTeam);
    let board = site.careers().unwrap();
    board.select_role("ui-ux-designer").unwrap();
    let session = board.application().session();
    session.set_text("fullName", "Jo").unwrap();
    session.set_text("email", "jo@example.com").unwrap();
    session.set_text("phone", "5550001111").unwrap();
    session
        .set_value(
            "resume",
            vital_health::forms::Attachment::new("cv.pdf", "application/pdf", 2_048).into(),
        )
        .unwrap();
    assert_eq!(board.submit().await, SubmitOutcome::Submitted);

    let shown = NOTIFICATIONS.get().drain();
    assert_eq!(shown.len(), 1);
    assert_eq!(shown[0].level, NotificationLevel::Success);
    assert_eq!(shown[0].dismiss_after_ms, 3_000);

    let again = vital_health::bootstrap(vital_health::core::Settings::default());
    assert!(again.is_err());
}
