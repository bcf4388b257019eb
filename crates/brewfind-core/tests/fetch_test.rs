#![allow(clippy::unwrap_used)]
// End-to-end fetch tests: real `BreweryClient` through `fetch::load` into a
// `Finder`, against wiremock or a closed port.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use brewfind_api::TransportConfig;
use brewfind_core::{Finder, FinderEvent, LoadStatus, fetch};

// ── Helpers ─────────────────────────────────────────────────────────

async fn serve(response: ResponseTemplate) -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/breweries"))
        .respond_with(response)
        .mount(&server)
        .await;
    let endpoint = format!("{}/v1/breweries", server.uri());
    (server, endpoint)
}

/// Run one fetch against `endpoint` on top of `finder`.
async fn load_into(finder: &mut Finder, endpoint: &str) {
    let client = fetch::client_for(endpoint, &TransportConfig::default()).unwrap();
    finder.apply(FinderEvent::FetchStarted);
    finder.apply(fetch::load(&client).await);
}

fn failure(finder: &Finder) -> String {
    match finder.status() {
        LoadStatus::Failed(message) => message.clone(),
        other => panic!("expected a failed load, got {other:?}"),
    }
}

// ── Failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_malformed_body_fails_the_load() {
    let (_server, endpoint) =
        serve(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>")).await;

    let mut finder = Finder::new();
    load_into(&mut finder, &endpoint).await;

    assert!(failure(&finder).contains("Deserialization error"));
    assert_eq!(finder.total(), 0);
    assert!(finder.filtered().is_empty());
}

#[tokio::test]
async fn test_refused_connection_names_the_cause() {
    // Nothing listens on port 1 on a test host.
    let mut finder = Finder::new();
    load_into(&mut finder, "http://127.0.0.1:1/v1/breweries").await;

    let message = failure(&finder).to_lowercase();
    assert_eq!(message.matches("error sending request").count(), 1, "got: {message}");
    // The url text has no "connect" in it; only the source chain does
    assert!(message.contains("connect"), "cause missing from: {message}");
}

#[tokio::test]
async fn test_failed_reload_keeps_previous_results() {
    let (_ok, good) = serve(ResponseTemplate::new(200).set_body_json(json!([
        {"id": "1", "name": "Hoppy Place", "city": "Austin", "state": "Texas", "brewery_type": "micro"}
    ])))
    .await;
    let (_down, bad) = serve(ResponseTemplate::new(503)).await;

    let mut finder = Finder::new();
    load_into(&mut finder, &good).await;
    assert_eq!(finder.status(), &LoadStatus::Loaded);

    load_into(&mut finder, &bad).await;
    assert_eq!(failure(&finder), "Request failed with status code 503");
    assert_eq!(finder.total(), 1);
    assert_eq!(finder.filtered()[0].name, "Hoppy Place");
}
