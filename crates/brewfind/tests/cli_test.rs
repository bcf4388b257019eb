//! Integration tests for the `brewfind` CLI binary.
//!
//! Argument parsing, help output, completions, and config handling run
//! without a network. Directory-bound commands run against a wiremock
//! server standing in for the brewery endpoint.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `brewfind` binary with env isolation.
///
/// Points config directories at a nonexistent path so tests never touch the
/// user's real configuration, and clears `BREWFIND_*` overrides.
fn brewfind_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("brewfind");
    cmd.env("HOME", "/tmp/brewfind-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/brewfind-cli-test-nonexistent")
        .env_remove("BREWFIND_ENDPOINT")
        .env_remove("BREWFIND_TIMEOUT_SECS")
        .env_remove("BREWFIND_USER_AGENT")
        .env_remove("BREWFIND_OUTPUT")
        .env_remove("RUST_LOG");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn directory() -> Value {
    json!([
        {"id": "1", "name": "Hoppy Place", "city": "Austin", "state": "Texas", "brewery_type": "micro"},
        {"id": "2", "name": "Malt House", "city": "Dallas", "state": "Texas", "brewery_type": "brewpub"},
        {"id": "3", "name": "Hop Yard", "city": "Denver", "state": "Colorado", "brewery_type": "micro"}
    ])
}

async fn directory_server() -> (MockServer, String) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/breweries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(directory()))
        .mount(&server)
        .await;
    let endpoint = format!("{}/v1/breweries", server.uri());
    (server, endpoint)
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = brewfind_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    brewfind_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("breweries")
            .and(predicate::str::contains("list"))
            .and(predicate::str::contains("states"))
            .and(predicate::str::contains("cities")),
    );
}

#[test]
fn test_version_flag() {
    brewfind_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("brewfind"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    brewfind_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    brewfind_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Usage errors ────────────────────────────────────────────────────

#[test]
fn test_city_requires_state() {
    let output = brewfind_cmd()
        .args(["list", "--city", "Austin"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("--state"), "Expected mention of --state:\n{text}");
}

#[test]
fn test_cities_requires_state() {
    brewfind_cmd().arg("cities").assert().failure().code(2);
}

#[test]
fn test_invalid_output_format() {
    let output = brewfind_cmd()
        .args(["--output", "invalid", "states"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("possible values"),
        "Expected error about invalid output format:\n{text}"
    );
}

#[test]
fn test_zero_timeout_is_usage_error() {
    brewfind_cmd()
        .args(["--timeout", "0", "--endpoint", "http://127.0.0.1:1/", "states"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("timeout"));
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_show_no_config() {
    brewfind_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api.openbrewerydb.org"));
}

#[test]
fn test_config_show_applies_flags() {
    let output = brewfind_cmd()
        .args([
            "-o",
            "json",
            "--endpoint",
            "http://localhost:9000/v1/breweries",
            "config",
            "show",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value = stdout_json(&output);
    assert_eq!(value["endpoint"], "http://localhost:9000/v1/breweries");
}

#[test]
fn test_config_init_writes_once() {
    let dir = tempfile::tempdir().unwrap();
    let init = || {
        let mut cmd = brewfind_cmd();
        cmd.env("HOME", dir.path())
            .env("XDG_CONFIG_HOME", dir.path())
            .args(["config", "init"]);
        cmd
    };

    init().assert().success();
    assert!(dir.path().join("brewfind").join("config.toml").exists());

    init()
        .assert()
        .failure()
        .code(6)
        .stderr(predicate::str::contains("already exists"));
}

// ── Directory-bound commands ────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_list_json_preserves_fetch_order() {
    let (_server, endpoint) = directory_server().await;

    let output = brewfind_cmd()
        .args(["--endpoint", &endpoint, "-o", "json", "list"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let value = stdout_json(&output);
    let ids: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, ["1", "2", "3"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_filters_by_state_and_search() {
    let (_server, endpoint) = directory_server().await;

    brewfind_cmd()
        .args([
            "--endpoint",
            &endpoint,
            "-o",
            "plain",
            "list",
            "--state",
            "Texas",
            "--search",
            "HOP",
        ])
        .assert()
        .success()
        .stdout("1\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_table_shows_total() {
    let (_server, endpoint) = directory_server().await;

    brewfind_cmd()
        .args(["--endpoint", &endpoint, "--color", "never", "list", "--search", "house"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Malt House").and(predicate::str::contains("brewpub")))
        .stderr(predicate::str::contains("Showing 1 of 3 breweries"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_list_city_outside_state() {
    let (_server, endpoint) = directory_server().await;

    brewfind_cmd()
        .args(["--endpoint", &endpoint, "list", "--state", "Colorado", "--city", "Austin"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("not found"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_states_first_seen_order() {
    let (_server, endpoint) = directory_server().await;

    brewfind_cmd()
        .args(["--endpoint", &endpoint, "-o", "plain", "states"])
        .assert()
        .success()
        .stdout("Texas\nColorado\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cities_of_state() {
    let (_server, endpoint) = directory_server().await;

    let output = brewfind_cmd()
        .args(["--endpoint", &endpoint, "-o", "json-compact", "cities", "--state", "Texas"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        json!([{"city": "Austin", "breweries": 1}, {"city": "Dallas", "breweries": 1}])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_http_error_exits_with_connection_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    brewfind_cmd()
        .args(["--endpoint", &server.uri(), "list"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("503"));
}

#[test]
fn test_unreachable_endpoint_fails() {
    brewfind_cmd()
        .args(["--endpoint", "http://127.0.0.1:1/v1/breweries", "states"])
        .assert()
        .failure()
        .code(7)
        .stderr(predicate::str::contains("Could not fetch"));
}
