//! CLI integration tests for the kiwoom binary.
//! Runs the real binary against a mock server and checks the printed envelope.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::path::Path;
use tempfile::TempDir;

// ============================================================
// Helper functions
// ============================================================

const CREDENTIAL_VARS: [&str; 3] = ["KIWOOM_APP_KEY", "KIWOOM_APP_SECRET", "KIWOOM_ENV_FILE"];

/// Build an `assert_cmd::Command` pointing at the `kiwoom` binary, isolated
/// from the caller's environment and `.env` files.
fn kiwoom_cmd(dir: &Path) -> Command {
    let env_file = dir.join(".env");
    std::fs::write(&env_file, "").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("kiwoom");
    cmd.current_dir(dir);
    for var in CREDENTIAL_VARS {
        cmd.env_remove(var);
    }
    cmd.arg("--env-file").arg(env_file);
    cmd
}

/// Run a command, assert a zero exit status, and return the single JSON
/// line printed on stdout.
fn run_json(dir: &Path, args: &[&str]) -> Value {
    let output = kiwoom_cmd(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output).expect("stdout is UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 1, "expected exactly one line, got {stdout:?}");
    serde_json::from_str(lines[0])
        .unwrap_or_else(|e| panic!("Failed to parse JSON from {:?}: {}", args, e))
}

fn token_body() -> String {
    json!({"token": "abc", "token_type": "bearer", "expires_dt": "20241107083713"}).to_string()
}

// ============================================================
// Tests
// ============================================================

#[test]
fn test_help_lists_commands() {
    let dir = TempDir::new().unwrap();
    kiwoom_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("token"))
        .stdout(predicate::str::contains("balance"));
}

#[test]
fn test_balance_success_prints_single_line_envelope() {
    let mut server = mockito::Server::new();
    let _token = server
        .mock("POST", "/oauth2/token")
        .with_status(200)
        .with_body(token_body())
        .create();
    let _account = server
        .mock("POST", "/api/dostk/acnt")
        .match_header("authorization", "Bearer abc")
        .match_header("appkey", "my-key")
        .with_status(200)
        .with_body(r#"{"tot_pur_amt":"100","tot_evlt_amt":"120"}"#)
        .create();

    let dir = TempDir::new().unwrap();
    let envelope = run_json(
        dir.path(),
        &["balance", "my-key", "my-secret", "--host", &server.url()],
    );

    assert_eq!(
        envelope,
        json!({"success": true, "data": {"tot_pur_amt": "100", "tot_evlt_amt": "120"}})
    );
}

#[test]
fn test_balance_reads_credentials_from_env_file() {
    let mut server = mockito::Server::new();
    let _token = server
        .mock("POST", "/oauth2/token")
        .match_body(mockito::Matcher::PartialJson(
            json!({"appkey": "file-key", "secretkey": "file-secret"}),
        ))
        .with_status(200)
        .with_body(token_body())
        .create();
    let _account = server
        .mock("POST", "/api/dostk/acnt")
        .with_status(200)
        .with_body("{}")
        .create();

    let dir = TempDir::new().unwrap();
    let mut cmd = kiwoom_cmd(dir.path());
    std::fs::write(
        dir.path().join(".env"),
        "KIWOOM_APP_KEY=file-key\nKIWOOM_APP_SECRET=file-secret\n",
    )
    .unwrap();

    cmd.args(["balance", "--host", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"success\": true, \"data\": {}}\n"));
}

#[test]
fn test_balance_token_rejection() {
    let mut server = mockito::Server::new();
    let _token = server
        .mock("POST", "/oauth2/token")
        .with_status(401)
        .with_body("unauthorized")
        .create();
    let account = server
        .mock("POST", "/api/dostk/acnt")
        .expect(0)
        .create();

    let dir = TempDir::new().unwrap();
    let envelope = run_json(
        dir.path(),
        &["balance", "my-key", "my-secret", "--host", &server.url()],
    );

    assert_eq!(envelope, json!({"success": false, "message": "토큰 발급 실패"}));
    account.assert();
}

#[test]
fn test_token_command_reports_access_token() {
    let mut server = mockito::Server::new();
    let _token = server
        .mock("POST", "/oauth2/token")
        .with_status(200)
        .with_body(r#"{"access_token":"xyz","token_type":"bearer"}"#)
        .create();

    let dir = TempDir::new().unwrap();
    let envelope = run_json(
        dir.path(),
        &["token", "my-key", "my-secret", "--host", &server.url()],
    );

    assert_eq!(
        envelope,
        json!({"success": true, "data": {"token": "xyz", "token_type": "bearer"}})
    );
}

#[test]
fn test_missing_credentials_still_exit_zero() {
    let dir = TempDir::new().unwrap();
    let envelope = run_json(dir.path(), &["balance", "--host", "http://127.0.0.1:1"]);

    assert_eq!(envelope["success"], json!(false));
    assert!(envelope["message"]
        .as_str()
        .is_some_and(|m| m.contains("KIWOOM_APP_KEY")));
}

#[test]
fn test_unreachable_host_reports_failure() {
    let dir = TempDir::new().unwrap();
    let envelope = run_json(
        dir.path(),
        &["balance", "my-key", "my-secret", "--host", "http://127.0.0.1:1"],
    );

    assert_eq!(envelope["success"], json!(false));
    assert!(envelope.get("data").is_none());
}

#[test]
fn test_invalid_host_reports_failure() {
    let dir = TempDir::new().unwrap();
    let envelope = run_json(dir.path(), &["token", "k", "s", "--host", "not a url"]);

    assert_eq!(envelope["success"], json!(false));
}

#[test]
fn test_pretty_format_is_indented() {
    let dir = TempDir::new().unwrap();
    kiwoom_cmd(dir.path())
        .args(["--format", "pretty", "balance", "--host", "http://127.0.0.1:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\n  \"success\": false"));
}
