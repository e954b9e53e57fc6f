mod common;

use common::ArcDiemProcess;

// ============================================================================
// form command
// ============================================================================

#[test]
fn form_json_is_descriptor_array() {
    let output = ArcDiemProcess::spawn_command(&["form"]);
    assert!(
        output.status.success(),
        "form should exit 0: {}",
        ArcDiemProcess::stderr(&output)
    );

    let stdout = ArcDiemProcess::stdout(&output);
    let parsed: serde_json::Value =
        serde_json::from_str(&stdout).expect("form JSON should be valid");
    let items = parsed.as_array().expect("form should be an array");
    assert_eq!(items.len(), 4);
    assert_eq!(items[0]["defaultValue"], "Arc Diem Configuration");
    assert_eq!(items[3]["type"], "submit");
}

#[test]
fn form_clay_module() {
    let output = ArcDiemProcess::spawn_command(&["form", "--format", "clay"]);
    assert!(output.status.success());

    let stdout = ArcDiemProcess::stdout(&output);
    assert!(stdout.starts_with("module.exports = ["), "{stdout}");
    assert!(stdout.trim_end().ends_with("];"), "{stdout}");
}

#[test]
fn form_yaml_mentions_every_key() {
    let output = ArcDiemProcess::spawn_command(&["form", "-f", "yaml"]);
    assert!(output.status.success());

    let stdout = ArcDiemProcess::stdout(&output);
    for key in [
        "DayStart",
        "DayEnd",
        "BatteryStatus",
        "BluetoothStatus",
        "BluetoothDisconnect",
        "BluetoothConnect",
    ] {
        assert!(stdout.contains(key), "yaml form should mention {key}");
    }
}

#[test]
fn form_output_file_validates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.js");
    let path_str = path.to_str().unwrap();

    let output =
        ArcDiemProcess::spawn_command(&["form", "--format", "clay", "--output", path_str]);
    assert!(output.status.success(), "{}", ArcDiemProcess::stderr(&output));
    assert!(ArcDiemProcess::stdout(&output).is_empty());

    let output = ArcDiemProcess::spawn_command(&["validate", "--strict", path_str]);
    assert!(
        output.status.success(),
        "written form should validate: {}",
        ArcDiemProcess::stdout(&output)
    );
}

// ============================================================================
// validate command
// ============================================================================

#[test]
fn validate_builtin_form() {
    let output = ArcDiemProcess::spawn_command(&["validate"]);
    assert!(output.status.success());

    let stdout = ArcDiemProcess::stdout(&output);
    assert!(stdout.contains("<built-in>: ok"), "{stdout}");
    assert!(stdout.contains("1 checked, 1 passed, 0 failed"), "{stdout}");
}

#[test]
fn validate_original_config() {
    let fixture = ArcDiemProcess::fixture_path("config.js");
    let output = ArcDiemProcess::spawn_command(&["validate", "--strict", fixture.to_str().unwrap()]);
    assert!(
        output.status.success(),
        "config.js should validate: {}",
        ArcDiemProcess::stdout(&output)
    );
}

#[test]
fn validate_reports_all_files_then_fails() {
    let good = ArcDiemProcess::fixture_path("config.js");
    let bad = ArcDiemProcess::fixture_path("bad_default.json");
    let output = ArcDiemProcess::spawn_command(&[
        "validate",
        bad.to_str().unwrap(),
        good.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2), "validation failure exits 2");

    let stdout = ArcDiemProcess::stdout(&output);
    assert!(stdout.contains("bad_default.json: FAILED"), "{stdout}");
    assert!(stdout.contains("config.js: ok"), "{stdout}");
    assert!(stdout.contains("Slider default 30 is outside 0..=23"), "{stdout}");
    assert!(stdout.contains("Default value 'sometimes'"), "{stdout}");
    assert!(stdout.contains("2 checked, 1 passed, 1 failed"), "{stdout}");
}

#[test]
fn validate_json_report() {
    let bad = ArcDiemProcess::fixture_path("duplicate_keys.json");
    let output =
        ArcDiemProcess::spawn_command(&["validate", "--format", "json", bad.to_str().unwrap()]);
    assert!(!output.status.success());

    let report: serde_json::Value = serde_json::from_str(&ArcDiemProcess::stdout(&output))
        .expect("validate JSON should be valid");
    assert_eq!(report["summary"]["total"], 1);
    assert_eq!(report["summary"]["failed"], 1);
    let errors = report["files"][0]["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 1);
    assert!(
        errors[0]
            .as_str()
            .unwrap()
            .contains("Duplicate message key 'DayStart'"),
        "{errors:?}"
    );
}

#[test]
fn validate_strict_promotes_warnings() {
    let fixture = ArcDiemProcess::fixture_path("no_submit.yaml");
    let path = fixture.to_str().unwrap();

    let lenient = ArcDiemProcess::spawn_command(&["validate", path]);
    assert!(lenient.status.success(), "{}", ArcDiemProcess::stdout(&lenient));
    assert!(ArcDiemProcess::stdout(&lenient).contains("warning:"));

    let strict = ArcDiemProcess::spawn_command(&["validate", "--strict", path]);
    assert_eq!(strict.status.code(), Some(2));
}

#[test]
fn validate_unparseable_and_empty_files() {
    let syntax = ArcDiemProcess::fixture_path("bad_syntax.json");
    let empty = ArcDiemProcess::fixture_path("empty.json");
    let output = ArcDiemProcess::spawn_command(&[
        "validate",
        syntax.to_str().unwrap(),
        empty.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(2));

    let stdout = ArcDiemProcess::stdout(&output);
    assert!(stdout.contains("parse error"), "{stdout}");
    assert!(stdout.contains("form document is empty"), "{stdout}");
    assert!(stdout.contains("2 checked, 0 passed, 2 failed"), "{stdout}");
}

#[test]
fn validate_forced_input_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("form.txt");
    std::fs::copy(ArcDiemProcess::fixture_path("reversed_range.yaml"), &path).unwrap();

    let output = ArcDiemProcess::spawn_command(&[
        "validate",
        "--input-format",
        "yaml",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", ArcDiemProcess::stdout(&output));
}

// ============================================================================
// defaults / apply commands
// ============================================================================

#[test]
fn defaults_human() {
    let output = ArcDiemProcess::spawn_command(&["defaults"]);
    assert!(output.status.success());

    let stdout = ArcDiemProcess::stdout(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        [
            "DayStart = 7",
            "DayEnd = 23",
            "BatteryStatus = low",
            "BluetoothStatus = disconnected",
            "BluetoothDisconnect = yes",
            "BluetoothConnect = yes",
        ]
    );
}

#[test]
fn defaults_json() {
    let output = ArcDiemProcess::spawn_command(&["defaults", "--format", "json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_str(&ArcDiemProcess::stdout(&output)).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({
            "DayStart": 7,
            "DayEnd": 23,
            "BatteryStatus": "low",
            "BluetoothStatus": "disconnected",
            "BluetoothDisconnect": "yes",
            "BluetoothConnect": "yes",
        })
    );
}

#[test]
fn defaults_from_form_document() {
    let fixture = ArcDiemProcess::fixture_path("reversed_range.yaml");
    let output = ArcDiemProcess::spawn_command(&[
        "defaults",
        "--form",
        fixture.to_str().unwrap(),
        "-f",
        "json",
    ]);
    assert!(output.status.success(), "{}", ArcDiemProcess::stderr(&output));

    let parsed: serde_json::Value =
        serde_json::from_str(&ArcDiemProcess::stdout(&output)).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!({ "DayStart": 22, "BluetoothConnect": "no" })
    );
}

#[test]
fn defaults_rejects_invalid_form_document() {
    let fixture = ArcDiemProcess::fixture_path("bad_default.json");
    let output = ArcDiemProcess::spawn_command(&["defaults", "--form", fixture.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(ArcDiemProcess::stderr(&output).contains("validation failed"));
}

#[test]
fn defaults_missing_form_document_is_io_error() {
    let output = ArcDiemProcess::spawn_command(&["defaults", "--form", "/nonexistent/form.json"]);
    assert_eq!(output.status.code(), Some(3));
    assert!(ArcDiemProcess::stderr(&output).contains("file not found"));
}

#[test]
fn validate_clay_parse_error_reports_source_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.js");
    let original = std::fs::read_to_string(ArcDiemProcess::fixture_path("config.js")).unwrap();
    // break the last option, which sits below a commented-out block
    let needle = r#""label":"No","#;
    let at = original.rfind(needle).unwrap() + needle.len();
    let mut broken = original;
    broken.insert(at, ',');
    let line = broken[..at].lines().count();
    std::fs::write(&path, broken).unwrap();

    let output = ArcDiemProcess::spawn_command(&["validate", path.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    let stdout = ArcDiemProcess::stdout(&output);
    assert!(stdout.contains(&format!("(line {line})")), "{stdout}");
}

#[test]
fn apply_overnight_day() {
    let output = ArcDiemProcess::spawn_command(&[
        "apply",
        "--set",
        "DayEnd=6",
        "--set",
        "DayStart=22",
    ]);
    assert!(output.status.success(), "{}", ArcDiemProcess::stderr(&output));

    let stdout = ArcDiemProcess::stdout(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "DayStart = 22");
    assert_eq!(lines[1], "DayEnd = 6");
    assert!(
        stdout.contains("day 22:00 -> 06:00 (8h day, 16h night)"),
        "{stdout}"
    );
}

#[test]
fn apply_json_has_no_watchface_summary() {
    let output = ArcDiemProcess::spawn_command(&[
        "apply",
        "-s",
        "BatteryStatus=yes",
        "--format",
        "json",
    ]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_str(&ArcDiemProcess::stdout(&output)).unwrap();
    assert_eq!(parsed["BatteryStatus"], "yes");
    assert_eq!(parsed["DayStart"], 7);
}

#[test]
fn apply_out_of_range_fails() {
    let output = ArcDiemProcess::spawn_command(&["apply", "--set", "DayStart=24"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(ArcDiemProcess::stdout(&output).is_empty());

    let stderr = ArcDiemProcess::stderr(&output);
    assert!(
        stderr.contains("must be between 0 and 23, got 24"),
        "{stderr}"
    );
}

#[test]
fn apply_unknown_key_suggests() {
    let output = ArcDiemProcess::spawn_command(&["apply", "--set", "DayStrat=8"]);
    assert_eq!(output.status.code(), Some(4));

    let stderr = ArcDiemProcess::stderr(&output);
    assert!(stderr.contains("did you mean 'DayStart'?"), "{stderr}");
}

#[test]
fn apply_malformed_assignment_is_usage_error() {
    let output = ArcDiemProcess::spawn_command(&["apply", "--set", "DayStart"]);
    assert_eq!(output.status.code(), Some(64));
    assert!(ArcDiemProcess::stderr(&output).contains("expected KEY=VALUE"));
}

// ============================================================================
// version / completions commands
// ============================================================================

#[test]
fn version_human() {
    let output = ArcDiemProcess::spawn_command(&["version"]);
    assert!(output.status.success());

    let stdout = ArcDiemProcess::stdout(&output);
    assert!(stdout.starts_with("arc-diem-config "), "{stdout}");
    assert!(stdout.contains("DayStart, DayEnd"), "{stdout}");
}

#[test]
fn version_json() {
    let output = ArcDiemProcess::spawn_command(&["version", "--format", "json"]);
    assert!(output.status.success());

    let parsed: serde_json::Value =
        serde_json::from_str(&ArcDiemProcess::stdout(&output)).expect("version JSON should be valid");
    assert_eq!(parsed["name"], "arc-diem-config");
    assert_eq!(parsed["messageKeys"].as_array().unwrap().len(), 6);
}

#[test]
fn completions_bash() {
    let output = ArcDiemProcess::spawn_command(&["completions", "bash"]);
    assert!(output.status.success());
    assert!(ArcDiemProcess::stdout(&output).contains("arc-diem-config"));
}

#[test]
fn completions_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let output = ArcDiemProcess::spawn_command(&[
        "completions",
        "zsh",
        "--out-dir",
        dir.path().to_str().unwrap(),
    ]);
    assert!(output.status.success(), "{}", ArcDiemProcess::stderr(&output));
    assert!(dir.path().join("_arc-diem-config").exists());
}

#[test]
fn unknown_subcommand_fails() {
    let output = ArcDiemProcess::spawn_command(&["frobnicate"]);
    assert!(!output.status.success());
}
