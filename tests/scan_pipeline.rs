//! Integration tests for the full scan pipeline.
//!
//! These tests run the session against a mock relay server, so no real
//! network access is needed and the envelope/classification behavior can be
//! controlled precisely.

use httptest::{matchers::*, responders::*, Expectation, Server};
use serde_json::json;

use friction_scan::{
    Config, FrictionStatus, FrictionType, ScanSession, LIKELY_SPA_MESSAGE, NO_FRICTION_MESSAGE,
};

/// Builds a session whose relay endpoint points at the mock server.
fn session_for(server: &Server) -> ScanSession {
    let config = Config {
        proxy_endpoint: server.url("/get").to_string(),
        timeout_seconds: 5,
        ..Default::default()
    };
    let client = friction_scan::initialization::init_http_client(&config)
        .expect("Failed to build HTTP client");
    ScanSession::new(config, client)
}

/// Registers a relay expectation that wraps `contents` in the JSON envelope.
fn expect_envelope(server: &Server, contents: &str) {
    server.expect(
        Expectation::matching(request::method_path("GET", "/get"))
            .respond_with(json_encoded(json!({ "contents": contents }))),
    );
}

#[tokio::test]
async fn test_scan_detects_ambiguous_button_end_to_end() {
    let server = Server::run();
    expect_envelope(&server, "<html><body><button></button></body></html>");

    let mut session = session_for(&server);
    session.start_scan("example.com").await;

    assert!(!session.is_scanning());
    assert!(session.scan_error().is_none());
    assert_eq!(session.scanned_url(), Some("https://example.com"));

    let points = session.points();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].kind, FrictionType::AmbiguousButton);
    assert_eq!(points[0].status, FrictionStatus::Pending);
}

#[tokio::test]
async fn test_operator_answer_round_trip() {
    let server = Server::run();
    expect_envelope(&server, "<html><body><button></button></body></html>");

    let mut session = session_for(&server);
    session.start_scan("example.com").await;

    let id = session.points()[0].id.clone();
    session.update_point_status(&id, FrictionStatus::Answered, Some("Submits the form"));

    let point = &session.points()[0];
    assert_eq!(point.status, FrictionStatus::Answered);
    assert_eq!(point.user_response.as_deref(), Some("Submits the form"));
}

#[tokio::test]
async fn test_clean_page_reports_no_friction() {
    let server = Server::run();
    expect_envelope(
        &server,
        r#"<html><body><a href="/docs">Documentation</a><p>Plain content.</p></body></html>"#,
    );

    let mut session = session_for(&server);
    session.start_scan("example.com").await;

    assert!(!session.is_scanning());
    assert!(session.points().is_empty());
    assert_eq!(session.scan_error(), Some(NO_FRICTION_MESSAGE));
}

#[tokio::test]
async fn test_spa_shell_reports_spa_message_not_no_friction() {
    let server = Server::run();
    expect_envelope(
        &server,
        r#"<html><body><app-root></app-root></body></html>"#,
    );

    let mut session = session_for(&server);
    session.start_scan("example.com").await;

    assert!(session.points().is_empty());
    assert_eq!(session.scan_error(), Some(LIKELY_SPA_MESSAGE));
}

#[tokio::test]
async fn test_spa_heuristic_never_suppresses_detected_points() {
    // SPA markers plus a detectable button: the points win, no message
    let server = Server::run();
    expect_envelope(
        &server,
        r#"<html><body ng-version="18.0.1"><button></button></body></html>"#,
    );

    let mut session = session_for(&server);
    session.start_scan("example.com").await;

    assert_eq!(session.points().len(), 1);
    assert!(session.scan_error().is_none());
}

#[tokio::test]
async fn test_relay_failure_surfaces_status_in_scan_error() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/get"))
            .respond_with(status_code(502)),
    );

    let mut session = session_for(&server);
    session.start_scan("example.com").await;

    assert!(!session.is_scanning());
    assert!(session.points().is_empty());
    let message = session.scan_error().expect("scan_error should be set");
    assert!(message.contains("502"), "message was: {message}");
    // The target is retained for display even after a failure
    assert_eq!(session.scanned_url(), Some("https://example.com"));
}

#[tokio::test]
async fn test_empty_envelope_reports_proxy_blocking() {
    let server = Server::run();
    expect_envelope(&server, "");

    let mut session = session_for(&server);
    session.start_scan("example.com").await;

    let message = session.scan_error().expect("scan_error should be set");
    assert!(message.contains("empty response"), "message was: {message}");
}

#[tokio::test]
async fn test_envelope_without_contents_reports_proxy_blocking() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/get"))
            .respond_with(json_encoded(json!({ "status": { "http_code": 200 } }))),
    );

    let mut session = session_for(&server);
    session.start_scan("example.com").await;

    assert!(session
        .scan_error()
        .is_some_and(|m| m.contains("empty response")));
}

#[tokio::test]
async fn test_is_scanning_is_released_on_every_path() {
    // Success with points
    let server = Server::run();
    expect_envelope(&server, "<button></button>");
    let mut session = session_for(&server);
    session.start_scan("example.com").await;
    assert!(!session.is_scanning());

    // Zero points
    let server = Server::run();
    expect_envelope(&server, "<p>clean</p>");
    let mut session = session_for(&server);
    session.start_scan("example.com").await;
    assert!(!session.is_scanning());

    // Relay failure
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/get"))
            .respond_with(status_code(500)),
    );
    let mut session = session_for(&server);
    session.start_scan("example.com").await;
    assert!(!session.is_scanning());

    // Unreachable relay (connection refused)
    let config = Config {
        proxy_endpoint: "http://127.0.0.1:9".to_string(),
        timeout_seconds: 2,
        ..Default::default()
    };
    let client = friction_scan::initialization::init_http_client(&config).unwrap();
    let mut session = ScanSession::new(config, client);
    session.start_scan("example.com").await;
    assert!(!session.is_scanning());
    assert!(session.scan_error().is_some());
}

#[tokio::test]
async fn test_new_scan_rebuilds_points_wholesale() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path("GET", "/get"))
            .times(2)
            .respond_with(json_encoded(json!({
                "contents": "<button></button><img src=\"x.png\">"
            }))),
    );

    let mut session = session_for(&server);
    session.start_scan("example.com").await;
    let first_ids: Vec<String> = session.points().iter().map(|p| p.id.clone()).collect();
    assert_eq!(session.points().len(), 2);

    // Answer a point, then rescan: the collection is rebuilt, not merged
    session.update_point_status(&first_ids[0], FrictionStatus::Answered, Some("x"));
    session.start_scan("example.com").await;

    assert_eq!(session.points().len(), 2);
    for point in session.points() {
        assert_eq!(point.status, FrictionStatus::Pending);
        assert!(point.user_response.is_none());
    }
}

#[tokio::test]
async fn test_failed_scan_clears_previous_points() {
    let server = Server::run();
    expect_envelope(&server, "<button></button>");
    let mut session = session_for(&server);
    session.start_scan("example.com").await;
    assert_eq!(session.points().len(), 1);

    // Second scan against a failing relay wipes the stale collection
    let failing = Server::run();
    failing.expect(
        Expectation::matching(request::method_path("GET", "/get"))
            .respond_with(status_code(403)),
    );
    let config = Config {
        proxy_endpoint: failing.url("/get").to_string(),
        timeout_seconds: 5,
        ..Default::default()
    };
    let client = friction_scan::initialization::init_http_client(&config).unwrap();
    let mut session = ScanSession::new(config, client);
    session.start_scan("example.com").await;
    assert!(session.points().is_empty());
    assert!(session.scan_error().is_some());
}

#[tokio::test]
async fn test_target_url_is_normalized_before_fetch() {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::query(url_decoded(contains((
            "url",
            "https://example.com",
        )))))
        .respond_with(json_encoded(json!({ "contents": "<button></button>" }))),
    );

    let mut session = session_for(&server);
    session.start_scan("example.com").await;

    assert_eq!(session.points().len(), 1);
}
