//! End-to-end submit lifecycle tests for form sessions.

use std::sync::Arc;
use std::time::Duration;

use vital_core::{TransportError, VitalError};
use vital_forms::catalog::{ContactMessage, DemoRequest, JobApplication, RESUME_CONTENT_TYPE};
use vital_forms::{
    Attachment, FieldValue, FormModel, FormSession, Settlement, SubmissionState, SubmitOutcome,
};
use vital_test::{CapturingSink, RecordingTransport};
use vital_transport::SimulatedTransport;

fn demo_session(transport: &RecordingTransport, sink: &CapturingSink) -> FormSession<DemoRequest> {
    FormSession::new(Arc::new(transport.clone()), Arc::new(sink.clone()))
}

fn fill_valid_demo(session: &FormSession<DemoRequest>) {
    session.set_text("name", "Jane Doe").unwrap();
    session.set_text("phoneNumber", "1234567890").unwrap();
    session.set_text("email", "jane@x.com").unwrap();
    session
        .set_text("message", "I'd like a walkthrough of the platform.")
        .unwrap();
}

#[tokio::test]
async fn test_short_name_fails_without_transport_call() {
    let transport = RecordingTransport::new();
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    fill_valid_demo(&session);
    session.set_text("name", "Al").unwrap();

    assert_eq!(session.submit().await, SubmitOutcome::Invalid);

    transport.assert_called_times(0);
    sink.assert_count(0);
    assert!(session.error("name").unwrap().contains("full name"));
    assert_eq!(session.error("email"), None);
    assert_eq!(session.state(), SubmissionState::Idle);
    assert_eq!(session.last_settlement(), None);
}

#[tokio::test]
async fn test_valid_submission_resets_and_notifies_once() {
    let transport = RecordingTransport::new();
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    fill_valid_demo(&session);

    assert_eq!(session.submit().await, SubmitOutcome::Submitted);

    transport.assert_called_times(1);
    let payload = transport.last_call().unwrap();
    assert_eq!(payload.form(), "demo_request");
    assert_eq!(
        payload.get("email").and_then(|v| v.as_str()),
        Some("jane@x.com")
    );

    assert!(session.values().is_empty());
    assert_eq!(session.model(), DemoRequest::default());
    assert!(session.validation().is_empty());
    assert_eq!(session.last_settlement(), Some(Settlement::Success));
    assert!(!session.is_submitting());

    sink.assert_count(1);
    sink.assert_success("Demo request submitted successfully!");
}

#[tokio::test]
async fn test_failed_submission_keeps_values() {
    let transport = RecordingTransport::new();
    transport.push_outcome(Err(TransportError::Status {
        status: 500,
        body: "oops".into(),
    }));
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    fill_valid_demo(&session);
    let before = session.model();

    let outcome = session.submit().await;

    assert!(matches!(
        outcome,
        SubmitOutcome::Failed(TransportError::Status { status: 500, .. })
    ));
    assert_eq!(session.model(), before);
    assert!(!session.is_submitting());
    assert_eq!(session.state(), SubmissionState::Idle);
    assert_eq!(session.last_settlement(), Some(Settlement::Failure));

    sink.assert_count(1);
    sink.assert_error_contains("Error: Request failed with status code 500");
}

#[tokio::test]
async fn test_failed_submission_can_be_retried() {
    let transport = RecordingTransport::new();
    transport.push_outcome(Err(TransportError::Network("connection reset".into())));
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    fill_valid_demo(&session);

    assert!(!session.submit().await.is_submitted());
    assert!(session.submit().await.is_submitted());

    transport.assert_called_times(2);
    sink.assert_error_contains("connection reset");
    sink.assert_success("Demo request submitted successfully!");
}

#[tokio::test]
async fn test_repeated_clicks_call_transport_once() {
    let transport = RecordingTransport::gated();
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    fill_valid_demo(&session);

    let (first, second, third, ()) = tokio::join!(
        session.submit(),
        session.submit(),
        session.submit(),
        async { transport.release(1) },
    );

    assert_eq!(first, SubmitOutcome::Submitted);
    assert_eq!(second, SubmitOutcome::Ignored);
    assert_eq!(third, SubmitOutcome::Ignored);
    transport.assert_called_times(1);
    sink.assert_count(1);
}

#[tokio::test]
async fn test_edits_refused_while_submitting() {
    let transport = RecordingTransport::gated();
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    fill_valid_demo(&session);

    let (outcome, edit) = tokio::join!(session.submit(), async {
        assert!(session.is_submitting());
        let edit = session.set_text("name", "Someone Else");
        assert!(session.reset().is_err());
        transport.release(1);
        edit
    });

    assert!(matches!(edit, Err(VitalError::SubmissionInFlight(ref f)) if f == "demo_request"));
    assert_eq!(outcome, SubmitOutcome::Submitted);
    session.set_text("name", "Someone Else").unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_dropped_submit_returns_to_idle() {
    let transport = RecordingTransport::gated();
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    fill_valid_demo(&session);
    let before = session.model();

    let timed_out = tokio::time::timeout(Duration::from_millis(20), session.submit()).await;

    assert!(timed_out.is_err());
    assert_eq!(session.state(), SubmissionState::Idle);
    assert!(!session.is_submitting());
    assert_eq!(session.model(), before);
    assert_eq!(session.last_settlement(), Some(Settlement::Failure));
    sink.assert_count(0);

    session.set_text("name", "Jane Q. Doe").unwrap();
    transport.release(1);
    assert_eq!(session.submit().await, SubmitOutcome::Submitted);
    transport.assert_called_times(2);
    sink.assert_count(1);
}

#[tokio::test]
async fn test_clones_share_one_instance() {
    let transport = RecordingTransport::new();
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    let handle = session.clone();

    handle.set_text("name", "Jane Doe").unwrap();
    assert_eq!(
        session.value("name").unwrap(),
        Some(FieldValue::Text("Jane Doe".into()))
    );
}

#[tokio::test]
async fn test_instances_are_independent() {
    let transport = RecordingTransport::new();
    let sink = CapturingSink::new();
    let demo = demo_session(&transport, &sink);
    let contact: FormSession<ContactMessage> =
        FormSession::new(Arc::new(transport.clone()), Arc::new(sink.clone()));

    fill_valid_demo(&demo);
    assert_eq!(contact.submit().await, SubmitOutcome::Invalid);

    assert_eq!(demo.validation().len(), 0);
    assert_eq!(contact.validation().error_count(), 4);
    assert_eq!(demo.value("name").unwrap(), Some("Jane Doe".into()));
}

#[tokio::test]
async fn test_contact_success_message() {
    let transport = RecordingTransport::new();
    let sink = CapturingSink::new();
    let session: FormSession<ContactMessage> =
        FormSession::new(Arc::new(transport.clone()), Arc::new(sink.clone()));
    session
        .update(|m| {
            m.name = "Jane Doe".into();
            m.phone_number = "1234567890".into();
            m.email = "jane@x.com".into();
            m.message = "Please call me back about pricing.".into();
        })
        .unwrap();

    assert!(session.submit().await.is_submitted());
    assert_eq!(transport.last_call().unwrap().form(), "contact");
    sink.assert_success("Message sent successfully!");
}

#[tokio::test]
async fn test_min_length_boundary() {
    let transport = RecordingTransport::new();
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    fill_valid_demo(&session);

    // "Jane" trims to four characters, one short of five.
    session.set_text("name", "  Jane  ").unwrap();
    assert_eq!(session.submit().await, SubmitOutcome::Invalid);
    assert!(session.error("name").is_some());

    session.set_text("name", "  Janet ").unwrap();
    assert_eq!(session.submit().await, SubmitOutcome::Submitted);
}

#[tokio::test]
async fn test_revalidation_is_stable() {
    let transport = RecordingTransport::new();
    let sink = CapturingSink::new();
    let session = demo_session(&transport, &sink);
    session.set_text("email", "not-an-email").unwrap();

    session.submit().await;
    let first = session.validation();
    session.submit().await;

    assert_eq!(first, session.validation());
    transport.assert_called_times(0);
}

#[tokio::test]
async fn test_unknown_field_and_kind_mismatch() {
    let session = demo_session(&RecordingTransport::new(), &CapturingSink::new());

    assert!(matches!(
        session.set_text("fax", "x"),
        Err(VitalError::UnknownField(_))
    ));
    let cv = Attachment::new("cv.pdf", RESUME_CONTENT_TYPE, 1);
    assert!(matches!(
        session.set_value("name", cv.into()),
        Err(VitalError::FieldKindMismatch { .. })
    ));
}

#[tokio::test(start_paused = true)]
async fn test_job_application_with_simulated_delay() {
    let sink = CapturingSink::new();
    let session: FormSession<JobApplication> = FormSession::new(
        Arc::new(SimulatedTransport::new(Duration::from_millis(2_000))),
        Arc::new(sink.clone()),
    );
    session.set_text("fullName", "Jo").unwrap();
    session.set_text("email", "jo@example.com").unwrap();
    session.set_text("phone", "5550001111").unwrap();
    session
        .set_value(
            "resume",
            Attachment::new("cv.pdf", RESUME_CONTENT_TYPE, 200_000).into(),
        )
        .unwrap();
    session.set_text("role", "Frontend Engineer").unwrap();

    let started = tokio::time::Instant::now();
    assert_eq!(session.submit().await, SubmitOutcome::Submitted);

    assert!(started.elapsed() >= Duration::from_millis(2_000));
    assert_eq!(session.model(), JobApplication::default());
    sink.assert_success("Application submitted successfully!");
}

#[tokio::test]
async fn test_oversized_resume_is_rejected_inline() {
    let transport = RecordingTransport::new();
    let session: FormSession<JobApplication> =
        FormSession::new(Arc::new(transport.clone()), Arc::new(CapturingSink::new()));
    session
        .set_value(
            "resume",
            Attachment::new("cv.pdf", RESUME_CONTENT_TYPE, 6 * 1024 * 1024).into(),
        )
        .unwrap();

    assert_eq!(session.submit().await, SubmitOutcome::Invalid);
    assert_eq!(
        session.error("resume").as_deref(),
        Some("File size must be less than 5MB")
    );
    assert!(JobApplication::schema().contains("resume"));
    transport.assert_called_times(0);
}
