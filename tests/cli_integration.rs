mod common;

use assert_cmd::Command;
use common::*;
use predicates::prelude::*;
use std::path::Path;

/// Write a config pointing the binary at the mock server.
fn write_config(home: &Path, server: &mockito::ServerGuard) {
    let config = serde_json::json!({
        "wsdl_url": wsdl_url(server),
        "timeout_secs": 5,
    });
    std::fs::write(home.join("config.json"), config.to_string()).unwrap();
}

fn flightxml(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("flightxml").unwrap();
    cmd.env("FLIGHTXML_HOME", home)
        .env("NO_COLOR", "1")
        .env_remove("FLIGHTXML_LOGIN")
        .env_remove("FLIGHTXML_KEY")
        .env_remove("RUST_LOG");
    cmd
}

fn with_credentials(cmd: &mut Command) -> &mut Command {
    cmd.arg("--login").arg(LOGIN).arg("--key").arg(KEY)
}

#[test]
fn test_tail_owner_prints_result_json() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    write_config(temp_dir.path(), &server);
    let _wsdl = mock_wsdl(&mut server);
    let op = mock_operation(
        &mut server,
        "TailOwner",
        200,
        &soap_result("TailOwner", "<owner>Acme Air</owner>"),
    );

    let mut cmd = flightxml(temp_dir.path());
    let output = with_credentials(&mut cmd)
        .arg("-a")
        .arg("tail-owner")
        .arg("-p")
        .arg(r#"{"ident":"N12345"}"#)
        .output()
        .unwrap();

    assert!(output.status.success());
    op.assert();
    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, serde_json::json!({"owner": "Acme Air"}));
}

#[test]
fn test_compact_output_is_single_line() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    write_config(temp_dir.path(), &server);
    let _wsdl = mock_wsdl(&mut server);
    let _op = mock_operation(
        &mut server,
        "AircraftType",
        200,
        &soap_result(
            "AircraftType",
            "<manufacturer>Boeing</manufacturer><type>737-800</type>",
        ),
    );

    let mut cmd = flightxml(temp_dir.path());
    with_credentials(&mut cmd)
        .arg("--action")
        .arg("aircraft-type")
        .arg("--params")
        .arg(r#"{"type":"B738"}"#)
        .arg("--compact")
        .assert()
        .success()
        .stdout(r#"{"manufacturer":"Boeing","type":"737-800"}"#.to_owned() + "\n");
}

#[test]
fn test_credentials_from_environment() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    write_config(temp_dir.path(), &server);
    let wsdl = mock_wsdl(&mut server);
    let _op = mock_operation(
        &mut server,
        "TailOwner",
        200,
        &soap_result("TailOwner", "<owner>Acme Air</owner>"),
    );

    flightxml(temp_dir.path())
        .env("FLIGHTXML_LOGIN", LOGIN)
        .env("FLIGHTXML_KEY", KEY)
        .arg("-a")
        .arg("tail-owner")
        .arg("-p")
        .arg(r#"{"ident":"N12345"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("Acme Air"));

    wsdl.assert();
}

#[test]
fn test_unknown_action_lists_available_actions() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    write_config(temp_dir.path(), &server);
    let _wsdl = mock_wsdl(&mut server);
    let op = server.mock("POST", "/op").expect(0).create();

    let mut cmd = flightxml(temp_dir.path());
    let output = with_credentials(&mut cmd)
        .arg("-a")
        .arg("not-a-real-action")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    op.assert();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Invalid Action: not-a-real-action"));
    assert!(stderr.contains("Available Actions:"));
    assert_eq!(stderr.matches("#op_").count(), 3);
    assert!(output.stdout.is_empty());
}

#[test]
fn test_missing_params_never_calls_service() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    write_config(temp_dir.path(), &server);
    let _wsdl = mock_wsdl(&mut server);
    let op = server.mock("POST", "/op").expect(0).create();

    let mut cmd = flightxml(temp_dir.path());
    with_credentials(&mut cmd)
        .arg("-a")
        .arg("aircraft-type")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing Params: type"));

    op.assert();
}

#[test]
fn test_invalid_params_fail_before_connecting() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    write_config(temp_dir.path(), &server);
    let wsdl = server.mock("GET", "/wsdl").expect(0).create();

    let mut cmd = flightxml(temp_dir.path());
    with_credentials(&mut cmd)
        .arg("-a")
        .arg("tail-owner")
        .arg("-p")
        .arg("{not json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Unable to parse params"));

    wsdl.assert();
}

#[test]
fn test_remote_fault_message_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    write_config(temp_dir.path(), &server);
    let _wsdl = mock_wsdl(&mut server);
    let _op = mock_operation(
        &mut server,
        "AirlineFlightInfo",
        500,
        &soap_fault("INVALID: unknown faFlightID"),
    );

    let mut cmd = flightxml(temp_dir.path());
    with_credentials(&mut cmd)
        .arg("-a")
        .arg("airline-flight-info")
        .arg("-p")
        .arg(r#"{"faFlightID":"NOPE-0000"}"#)
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("INVALID: unknown faFlightID"));
}

#[test]
fn test_rejected_credentials_fail() {
    let temp_dir = tempfile::tempdir().unwrap();
    let mut server = mockito::Server::new();
    write_config(temp_dir.path(), &server);
    let _wsdl = server
        .mock("GET", "/wsdl")
        .with_status(401)
        .with_body("Unauthorized")
        .create();

    let mut cmd = flightxml(temp_dir.path());
    with_credentials(&mut cmd)
        .arg("-a")
        .arg("tail-owner")
        .arg("-p")
        .arg(r#"{"ident":"N12345"}"#)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("401"));
}

#[test]
fn test_help_lists_actions_without_network() {
    let temp_dir = tempfile::tempdir().unwrap();

    flightxml(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--login"))
        .stdout(predicate::str::contains("Available Actions:"))
        .stdout(predicate::str::contains("tail-owner"))
        .stdout(predicate::str::contains("#op_AirlineFlightInfo"));
}

#[test]
fn test_missing_login_is_usage_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    flightxml(temp_dir.path())
        .arg("--key")
        .arg(KEY)
        .arg("--action")
        .arg("tail-owner")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("--login"));
}

#[test]
fn test_missing_action_is_usage_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = flightxml(temp_dir.path());
    with_credentials(&mut cmd)
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("--action"));
}
