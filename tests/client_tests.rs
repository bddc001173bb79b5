//! Integration tests for the terminal client against a wiremock backend.

mod common;

use std::time::Duration;

use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use serde_json::json;
use sitescope::client::{
    self, render_report, AnalysisSession, ApiClient, SubmitOutcome, FALLBACK_ERROR, NO_ADDRESS,
    NO_EMAIL, NO_PHONE, NO_SOCIAL_LINKS, NO_TECH_STACK,
};

// Fast ticks so tests never wait on the cosmetic progress interval.
const TICK: Duration = Duration::from_millis(50);

async fn submit(session: &mut AnalysisSession, server: &MockServer, url: &str) -> SubmitOutcome {
    let api = ApiClient::new(server.uri());
    client::submit(session, &api, url, TICK, |_| {}).await
}

#[tokio::test]
async fn successful_analysis_stores_and_renders_the_report() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .and(body_json(json!({"url": "https://acme.test"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::full_report_json()))
        .mount(&server)
        .await;

    let mut session = AnalysisSession::new();
    let outcome = submit(&mut session, &server, "https://acme.test").await;

    assert_eq!(outcome, SubmitOutcome::Submitted);
    assert!(session.error().is_none());
    let report = session.report().expect("report should be stored");
    assert_eq!(report.company_overview, "Acme builds rockets.");

    let rendered = render_report(report);
    assert!(rendered.contains("Acme builds rockets."));
    assert!(rendered.contains("Reusable boosters"));
    assert!(rendered.contains("hello@acme.test"));
    assert!(rendered.contains("https://twitter.com/acme"));
}

#[tokio::test]
async fn sparse_report_renders_placeholders() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::sparse_report_json()))
        .mount(&server)
        .await;

    let mut session = AnalysisSession::new();
    submit(&mut session, &server, "https://quiet.test").await;

    let rendered = render_report(session.report().unwrap());
    assert!(rendered.contains(NO_ADDRESS));
    assert!(rendered.contains(NO_EMAIL));
    assert!(rendered.contains(NO_PHONE));
    assert!(rendered.contains(NO_SOCIAL_LINKS));
    assert!(rendered.contains(NO_TECH_STACK));
}

#[tokio::test]
async fn backend_detail_is_displayed_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"detail": "Invalid URL"})))
        .mount(&server)
        .await;

    let mut session = AnalysisSession::new();
    submit(&mut session, &server, "nonsense").await;

    assert_eq!(session.error(), Some("Invalid URL"));
    assert!(session.report().is_none());
}

#[tokio::test]
async fn missing_detail_falls_back_to_the_fixed_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let mut session = AnalysisSession::new();
    submit(&mut session, &server, "https://acme.test").await;

    assert_eq!(session.error(), Some(FALLBACK_ERROR));
}

#[tokio::test]
async fn unreachable_backend_falls_back_to_the_fixed_message() {
    // Bind-then-drop leaves a port nothing is listening on.
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let api = ApiClient::new(uri);
    let mut session = AnalysisSession::new();
    client::submit(&mut session, &api, "https://acme.test", TICK, |_| {}).await;

    assert_eq!(session.error(), Some(FALLBACK_ERROR));
}

#[tokio::test]
async fn empty_url_makes_no_request_and_changes_no_state() {
    let server = MockServer::start().await;

    let mut session = AnalysisSession::new();
    session.complete(Default::default());

    let outcome = submit(&mut session, &server, "   ").await;

    assert_eq!(outcome, SubmitOutcome::Skipped);
    assert!(session.report().is_some(), "prior state must be untouched");
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "no network call may be made");
}

#[tokio::test]
async fn new_analysis_clears_prior_report_before_resolving() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(200).set_body_json(common::full_report_json()))
        .mount(&server)
        .await;

    let mut session = AnalysisSession::new();
    session.fail("stale error");
    submit(&mut session, &server, "https://acme.test").await;

    assert!(session.error().is_none());
    assert!(session.report().is_some());

    // A failing follow-up analysis replaces the report with an error.
    let failing = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "crawl broke"})))
        .mount(&failing)
        .await;

    submit(&mut session, &failing, "https://other.test").await;
    assert!(session.report().is_none());
    assert_eq!(session.error(), Some("crawl broke"));
}
