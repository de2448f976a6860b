//! Integration tests for the `uniflux` CLI binary.
//!
//! Argument parsing, conversion of fixture dumps, config handling and exit
//! codes, all against files under `tests/fixtures`.
#![allow(clippy::unwrap_used)]

use std::path::PathBuf;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `uniflux` binary with env isolation.
///
/// Clears all `UNIFLUX_*` env vars and points the config file at a
/// nonexistent path so tests never touch the user's real configuration.
fn uniflux_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("uniflux");
    cmd.env("HOME", "/tmp/uniflux-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/uniflux-cli-test-nonexistent")
        .env(
            "UNIFLUX_CONFIG",
            "/tmp/uniflux-cli-test-nonexistent/config.toml",
        )
        .env_remove("UNIFLUX_DEFAULTS__OUTPUT")
        .env_remove("UNIFLUX_INFLUX__SITE_NAME")
        .env_remove("UNIFLUX_INFLUX__DEAD_PORTS")
        .env_remove("RUST_LOG");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn tables(points: &serde_json::Value) -> Vec<String> {
    points
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["table"].as_str().unwrap().to_owned())
        .collect()
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = uniflux_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    uniflux_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("convert")
            .and(predicate::str::contains("config"))
            .and(predicate::str::contains("completions")),
    );
}

#[test]
fn test_version_flag() {
    uniflux_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("uniflux"));
}

#[test]
fn test_invalid_output_format_is_usage_error() {
    uniflux_cmd()
        .args(["-o", "xml", "convert"])
        .arg(fixture("devices.json"))
        .assert()
        .code(2);
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    uniflux_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    uniflux_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

// ── Man pages ───────────────────────────────────────────────────────

#[test]
fn test_man_page_root() {
    uniflux_cmd()
        .arg("man")
        .assert()
        .success()
        .stdout(predicate::str::contains(".TH").and(predicate::str::contains("convert")));
}

#[test]
fn test_man_page_subcommand() {
    uniflux_cmd()
        .args(["man", "convert"])
        .assert()
        .success()
        .stdout(
            predicate::str::is_match(r"uniflux\\?-convert")
                .unwrap()
                .and(predicate::str::is_match(r"dead\\?-ports").unwrap()),
        );
}

#[test]
fn test_man_page_unknown_subcommand() {
    uniflux_cmd()
        .args(["man", "frobnicate"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("frobnicate"));
}

// ── Convert ─────────────────────────────────────────────────────────

#[test]
fn test_convert_line_protocol() {
    let output = uniflux_cmd()
        .arg("convert")
        .arg(fixture("devices.json"))
        .args(["--timestamp", "1700000000000000000"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9, "unexpected output:\n{stdout}");
    assert!(lines[0].starts_with("usg,mac=74:ac:b9:00:00:01,model=UDMPRO,name=Dream\\ Machine,"));
    assert!(lines.iter().all(|l| l.ends_with(" 1700000000000000000")));
    assert!(lines.iter().any(|l| l.starts_with("usw_ports,")));
    assert!(lines.iter().all(|l| !l.contains("Desk Phone")));
}

#[test]
fn test_convert_fills_missing_site_name() {
    let output = uniflux_cmd()
        .args(["-o", "json", "convert", "--site-name", "lab"])
        .arg(fixture("devices.json"))
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let points = stdout_json(&output);
    let points = points.as_array().unwrap();
    let usg = points.iter().find(|p| p["table"] == "usg").unwrap();
    assert_eq!(usg["tags"]["site_name"], "lab");
    let lobby = points
        .iter()
        .find(|p| p["tags"]["name"] == "Lobby AP")
        .unwrap();
    assert_eq!(lobby["tags"]["site_name"], "branch");
}

#[test]
fn test_convert_json_emission_order() {
    let output = uniflux_cmd()
        .args(["-o", "json", "convert"])
        .arg(fixture("devices.json"))
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    assert_eq!(
        tables(&stdout_json(&output)),
        [
            "usg",
            "usg_networks",
            "usg_wan_ports",
            "usw",
            "usw_ports",
            "uap",
            "uap_radios",
            "uap_vaps",
            "uap",
        ]
    );
}

#[test]
fn test_convert_dead_ports() {
    let output = uniflux_cmd()
        .args(["-o", "json-compact", "convert", "--dead-ports"])
        .arg(fixture("devices.json"))
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let tables = tables(&stdout_json(&output));
    assert_eq!(tables.len(), 10);
    assert_eq!(tables.iter().filter(|t| *t == "usw_ports").count(), 2);
}

#[test]
fn test_convert_table_output() {
    uniflux_cmd()
        .args(["-o", "table", "convert"])
        .arg(fixture("devices.json"))
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Points")
                .and(predicate::str::contains("usw_ports"))
                .and(predicate::str::contains("uap_vaps")),
        );
}

#[test]
fn test_convert_reads_stdin() {
    let body = std::fs::read_to_string(fixture("devices.json")).unwrap();
    let output = uniflux_cmd()
        .args(["convert", "-"])
        .write_stdin(body)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 9);
}

#[test]
fn test_convert_quiet_suppresses_output() {
    uniflux_cmd()
        .args(["-q", "convert"])
        .arg(fixture("devices.json"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_missing_input_file() {
    let output = uniflux_cmd()
        .args(["convert", "/tmp/uniflux-cli-test-nonexistent/devices.json"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(4));
    assert!(combined_output(&output).contains("not found"));
}

#[test]
fn test_truncated_json_is_data_error() {
    uniflux_cmd()
        .arg("convert")
        .arg(fixture("truncated.json"))
        .assert()
        .code(65)
        .stderr(predicate::str::contains("Invalid device data"));
}

#[test]
fn test_controller_error_envelope_is_data_error() {
    uniflux_cmd()
        .arg("convert")
        .arg(fixture("login_required.json"))
        .assert()
        .code(65)
        .stderr(predicate::str::contains("api.err.LoginRequired"));
}

#[test]
fn test_empty_site_name_is_rejected() {
    uniflux_cmd()
        .args(["convert", "--site-name", ""])
        .arg(fixture("devices.json"))
        .assert()
        .code(2);
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honors_flag() {
    uniflux_cmd()
        .args(["config", "path", "--config", "/tmp/somewhere/uniflux.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/tmp/somewhere/uniflux.toml"));
}

#[test]
fn test_config_init_then_show() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    uniflux_cmd()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));
    assert!(path.exists());

    uniflux_cmd()
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    uniflux_cmd()
        .args(["config", "init", "--force", "--config"])
        .arg(&path)
        .assert()
        .success();

    uniflux_cmd()
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[influx]").and(predicate::str::contains("site_name = \"default\"")),
        );
}

#[test]
fn test_config_file_sets_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[defaults]\noutput = \"json-compact\"\n\n[influx]\nsite_name = \"hq\"\ndead_ports = true\n",
    )
    .unwrap();

    let output = uniflux_cmd()
        .arg("convert")
        .arg(fixture("devices.json"))
        .env("UNIFLUX_CONFIG", &path)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));

    let points = stdout_json(&output);
    assert_eq!(points[0]["tags"]["site_name"], "hq");
    assert_eq!(tables(&points).iter().filter(|t| *t == "usw_ports").count(), 2);
}

#[test]
fn test_env_overrides_config() {
    let output = uniflux_cmd()
        .args(["-o", "json", "convert"])
        .arg(fixture("devices.json"))
        .env("UNIFLUX_INFLUX__SITE_NAME", "from-env")
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(stdout_json(&output)[0]["tags"]["site_name"], "from-env");
}

#[test]
fn test_invalid_config_output_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[defaults]\noutput = \"csv\"\n").unwrap();

    uniflux_cmd()
        .arg("convert")
        .arg(fixture("devices.json"))
        .env("UNIFLUX_CONFIG", &path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("defaults.output"));
}
