use assert_cmd::cargo::cargo_bin_cmd;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_cmd(config_home: &Path, args: &[&str]) -> String {
    let output = cargo_bin_cmd!("telinput")
        .env("XDG_CONFIG_HOME", config_home)
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    String::from_utf8(output.stdout).expect("utf8")
}

fn run_cmd_json(config_home: &Path, args: &[&str]) -> Value {
    let output = cargo_bin_cmd!("telinput")
        .env("XDG_CONFIG_HOME", config_home)
        .arg("--json")
        .args(args)
        .output()
        .expect("run command");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("parse json")
}

#[test]
fn cli_normalize_reports_canonical_value() {
    let temp = TempDir::new().expect("temp dir");

    let report = run_cmd_json(
        temp.path(),
        &["normalize", "2025551234", "--country", "us"],
    );
    assert_eq!(report["country"], "us");
    assert_eq!(report["canonical"], "+12025551234");
    assert_eq!(report["valid"], true);
}

#[test]
fn cli_normalize_rejects_unknown_country() {
    let temp = TempDir::new().expect("temp dir");

    let output = cargo_bin_cmd!("telinput")
        .env("XDG_CONFIG_HOME", temp.path())
        .args(["normalize", "2025551234", "--country", "zz"])
        .output()
        .expect("run command");
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn cli_countries_search_filters_rows() {
    let temp = TempDir::new().expect("temp dir");

    let rows = run_cmd_json(temp.path(), &["countries", "--search", "kingdom"]);
    let items = rows.as_array().expect("array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["iso2"], "gb");
    assert_eq!(items[0]["dial_code"], "44");
}

#[test]
fn cli_countries_marks_configured_preferred_first() {
    let temp = TempDir::new().expect("temp dir");
    let config_dir = temp.path().join("telinput");
    fs::create_dir_all(&config_dir).expect("config dir");
    fs::write(
        config_dir.join("config.toml"),
        "preferred_countries = [\"gb\", \"us\"]\n",
    )
    .expect("write config");

    let rows = run_cmd_json(temp.path(), &["countries"]);
    let items = rows.as_array().expect("array");
    assert_eq!(items[0]["iso2"], "gb");
    assert_eq!(items[0]["preferred"], true);
    assert_eq!(items[1]["iso2"], "us");
    assert_eq!(items[1]["preferred"], true);
    assert_eq!(items[2]["preferred"], false);
}

#[test]
fn cli_example_prints_national_digits() {
    let temp = TempDir::new().expect("temp dir");

    let report = run_cmd_json(temp.path(), &["example", "US"]);
    assert_eq!(report["iso2"], "us");
    let example = report["example"].as_str().expect("example");
    assert!(!example.is_empty());
}

#[test]
fn cli_session_script_replays_events() {
    let temp = TempDir::new().expect("temp dir");
    let script = temp.path().join("session.txt");
    fs::write(&script, "type 2025551234\nselect us\nreset\n").expect("write script");

    let output = run_cmd(
        temp.path(),
        &["session", "--script", script.to_str().expect("script path")],
    );
    assert!(output.contains("country-changed us"));
    assert!(output.contains("focus-requested 0"));
    assert!(output.contains("reset: value-changed null"));
}
