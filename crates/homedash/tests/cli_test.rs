//! Integration tests for the `homedash` CLI binary.
//!
//! Argument parsing, help output and completions run without a backend;
//! the resource commands run against a wiremock server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `homedash` binary with env isolation.
///
/// Clears all `HOMEDASH_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn homedash_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("homedash");
    cmd.env("HOME", "/tmp/homedash-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/homedash-cli-test-nonexistent")
        .env_remove("HOMEDASH_PROFILE")
        .env_remove("HOMEDASH_API_URL")
        .env_remove("HOMEDASH_OUTPUT")
        .env_remove("HOMEDASH_TIMEOUT_MS");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn api_url(server: &MockServer) -> String {
    format!("{}/api/v1", server.uri())
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = homedash_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    homedash_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("SmartHome")
            .and(predicate::str::contains("rooms"))
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("actuators")),
    );
}

#[test]
fn test_version_flag() {
    homedash_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("homedash"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_zsh() {
    homedash_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_bash() {
    homedash_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Manual pages ────────────────────────────────────────────────────

#[test]
fn test_man_prints_top_level_page() {
    homedash_cmd()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH").and(predicate::str::contains("SmartHome")));
}

#[test]
fn test_man_prints_subcommand_page() {
    homedash_cmd()
        .args(["man", "devices", "add"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH"));
}

#[test]
fn test_man_unknown_command_is_not_found() {
    homedash_cmd()
        .args(["man", "garage"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("garage"));
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = homedash_cmd().arg("foobar").output().unwrap();
    assert!(!output.status.success());
    let text = combined_output(&output);
    assert!(
        text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_invalid_api_url_is_usage_error() {
    homedash_cmd()
        .args(["--api-url", "not a url", "rooms", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("api_url"));
}

#[test]
fn test_unreachable_backend_exit_code() {
    // Port 9 (discard) is closed on test machines.
    homedash_cmd()
        .args(["--api-url", "http://127.0.0.1:9/api/v1", "rooms", "list"])
        .assert()
        .failure()
        .code(predicate::in_iter([7, 8]));
}

#[test]
fn test_unknown_profile() {
    homedash_cmd()
        .args(["--profile", "nowhere", "rooms", "list"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("nowhere"));
}

#[test]
fn test_empty_device_name_rejected_locally() {
    homedash_cmd()
        .args([
            "--api-url",
            "http://127.0.0.1:9/api/v1",
            "devices",
            "add",
            "--room",
            "R1",
            "--name",
            "   ",
            "--model",
            "X",
        ])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("deviceName"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_deactivate_without_tty_requires_yes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/devices/D1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deviceId": "D1", "roomId": "R1", "deviceName": "Heater",
            "deviceModel": "H-2", "activationStatus": true
        })))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/devices"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let url = api_url(&server);
    tokio::task::spawn_blocking(move || {
        homedash_cmd()
            .args(["--api-url", &url, "devices", "deactivate", "D1"])
            .write_stdin("")
            .assert()
            .code(2)
            .stderr(predicate::str::contains("requires confirmation"));
    })
    .await
    .unwrap();
}

// ── Backend round trips ─────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_rooms_list_plain() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/houses/H1/rooms"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "roomId": "R1" }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/rooms/R1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roomId": "R1", "roomName": "kitchen", "floorNumber": 0
        })))
        .mount(&server)
        .await;

    let url = api_url(&server);
    tokio::task::spawn_blocking(move || {
        homedash_cmd()
            .args(["--api-url", &url, "-o", "plain", "rooms", "list"])
            .assert()
            .success()
            .stdout("R1\n");
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_room_devices_prints_title() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/rooms/R1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "roomId": "R1", "roomName": "kitchen", "floorNumber": 0
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/rooms/R1/devices"))
        .and(query_param("RoomID", "R1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "id": "D1" }])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/devices/D1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "deviceId": "D1", "roomId": "R1", "deviceName": "Heater",
            "deviceModel": "H-2", "activationStatus": false
        })))
        .mount(&server)
        .await;

    let url = api_url(&server);
    tokio::task::spawn_blocking(move || {
        homedash_cmd()
            .args(["--api-url", &url, "--color", "never", "rooms", "devices", "R1"])
            .assert()
            .success()
            .stdout(
                predicate::str::contains("Devices in Kitchen")
                    .and(predicate::str::contains("Heater"))
                    .and(predicate::str::contains("Deactivated")),
            );
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_device_exit_code() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/devices/D404"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Device not found"))
        .mount(&server)
        .await;

    let url = api_url(&server);
    tokio::task::spawn_blocking(move || {
        homedash_cmd()
            .args(["--api-url", &url, "devices", "get", "D404"])
            .assert()
            .code(4)
            .stderr(predicate::str::contains("D404"));
    })
    .await
    .unwrap();
}

#[tokio::test(flavor = "multi_thread")]
async fn test_blind_value_is_clamped() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/api/v1/actuators/A1"))
        .and(wiremock::matchers::body_json(json!({
            "actuatorID": "A1", "sensorID": "S1", "inputValue": "100"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "actuatorID": "A1" })))
        .expect(1)
        .mount(&server)
        .await;

    let url = api_url(&server);
    tokio::task::spawn_blocking(move || {
        homedash_cmd()
            .args([
                "--api-url", &url, "actuators", "blind", "A1", "--sensor", "S1", "--value", "140",
            ])
            .assert()
            .success()
            .stdout(predicate::str::contains("A1: 100%"));
    })
    .await
    .unwrap();
}
