use httpmock::prelude::*;
use restaurant_site::app::build_site;
use restaurant_site::core::reservation::ReservationOutcome;
use restaurant_site::core::ReservationForm;
use restaurant_site::domain::model::ModalId;
use restaurant_site::{SiteConfig, SiteError, TextRegion};
use tempfile::TempDir;

fn form() -> ReservationForm {
    ReservationForm {
        name: "Ada".to_string(),
        email: "ada@example.com".to_string(),
        phone: "555-0100".to_string(),
        date: "2026-11-02".to_string(),
        time: "19:30".to_string(),
        guests: 4,
        requests: String::new(),
    }
}

fn config(state_dir: &TempDir, endpoint: Option<String>) -> SiteConfig {
    let mut config = SiteConfig::default();
    config.menu.data_path = state_dir
        .path()
        .join("missing_menu.json")
        .to_str()
        .unwrap()
        .to_string();
    config.theme.state_dir = state_dir.path().to_str().unwrap().to_string();
    config.reservation.endpoint = endpoint;
    config.reservation.simulate_delay_ms = 1;
    config.reservation.timeout_seconds = 2;
    config.reservation.button_label = "Reserve".to_string();
    config
}

#[tokio::test]
async fn test_successful_post_shows_modal_and_resets_form() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/exec")
            .header("content-type", "application/x-www-form-urlencoded")
            .body_contains("name=Ada")
            .body_contains("guests=4")
            .body_contains("date=2026-11-02");
        then.status(200);
    });

    let mut site = build_site(
        &config(&temp_dir, Some(server.url("/exec"))),
        TextRegion::new(),
    )
    .unwrap();
    site.set_draft(form());

    let outcome = site.submit_reservation().await.unwrap();

    api_mock.assert();
    assert_eq!(outcome, ReservationOutcome::Confirmed);
    assert!(site.state().modals.is_shown(ModalId::Reservation));
    assert_eq!(site.state().draft, ReservationForm::default());
    assert_eq!(site.state().booking.label(), "Reserve");
    assert!(!site.state().booking.is_disabled());
    assert!(site.state().alert.is_none());
}

#[tokio::test]
async fn test_server_error_raises_alert_and_keeps_form() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(500);
    });

    let mut site = build_site(
        &config(&temp_dir, Some(server.url("/exec"))),
        TextRegion::new(),
    )
    .unwrap();
    site.set_draft(form());

    let outcome = site.submit_reservation().await.unwrap();

    api_mock.assert();
    assert_eq!(
        outcome,
        ReservationOutcome::Failed {
            alert: "Something went wrong. Please try again.".to_string()
        }
    );
    assert!(!site.state().modals.is_shown(ModalId::Reservation));
    assert_eq!(site.state().draft, form());
    assert_eq!(site.state().booking.label(), "Reserve");
    assert!(!site.state().booking.is_disabled());
}

#[tokio::test]
async fn test_unreachable_endpoint_is_a_failed_outcome() {
    let temp_dir = TempDir::new().unwrap();
    // port 9 (discard) is not expected to accept connections on a test host
    let endpoint = Some("http://127.0.0.1:9/exec".to_string());

    let mut site = build_site(&config(&temp_dir, endpoint), TextRegion::new()).unwrap();
    site.set_draft(form());

    let outcome = site.submit_reservation().await.unwrap();
    assert!(matches!(outcome, ReservationOutcome::Failed { .. }));
    assert!(!site.state().booking.is_disabled());
}

#[tokio::test]
async fn test_unconfigured_endpoint_simulates_success() {
    let temp_dir = TempDir::new().unwrap();
    let mut site = build_site(
        &config(
            &temp_dir,
            Some("REPLACE_WITH_YOUR_GOOGLE_SCRIPT_URL".to_string()),
        ),
        TextRegion::new(),
    )
    .unwrap();
    site.set_draft(form());

    let outcome = site.submit_reservation().await.unwrap();

    assert_eq!(outcome, ReservationOutcome::Confirmed);
    assert!(site.state().modals.is_shown(ModalId::Reservation));
    assert_eq!(site.state().draft, ReservationForm::default());
}

#[tokio::test]
async fn test_invalid_form_is_rejected_before_sending() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/exec");
        then.status(200);
    });

    let mut site = build_site(
        &config(&temp_dir, Some(server.url("/exec"))),
        TextRegion::new(),
    )
    .unwrap();
    let mut bad = form();
    bad.email = "not-an-email".to_string();
    site.set_draft(bad);

    let result = site.submit_reservation().await;

    assert!(matches!(
        result,
        Err(SiteError::FormValidationError { ref field, .. }) if field == "email"
    ));
    api_mock.assert_hits(0);
    assert!(!site.state().booking.is_disabled());
}
