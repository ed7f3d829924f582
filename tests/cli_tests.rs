use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn report_cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bookkeeping_report").unwrap();
    cmd.env("BOOKKEEPING_CORE_HOME", home.path())
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn text_report_lists_sections() {
    let home = TempDir::new().unwrap();
    report_cmd(&home)
        .args(["--date", "2024-01-18"])
        .assert()
        .success()
        .stdout(contains("=== Cash flow ==="))
        .stdout(contains("8700.00"))
        .stdout(contains("=== Upcoming obligations ==="));
}

#[test]
fn json_report_is_parseable_and_scoped() {
    let home = TempDir::new().unwrap();
    let output = report_cmd(&home)
        .args(["--json", "--client", "empresa-a", "--date", "2024-02-20"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["scope"], "empresa-a");
    assert_eq!(report["roster"]["total"], 4);
    assert_eq!(report["due_today"].as_array().map(Vec::len), Some(1));
}

#[test]
fn custom_config_changes_firm_label() {
    let home = TempDir::new().unwrap();
    let config = home.path().join("custom.json");
    std::fs::write(&config, r#"{ "firm_label": "Escritório" }"#).unwrap();
    report_cmd(&home)
        .args(["--date", "2024-01-18", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(contains("Escritório"));
}

#[test]
fn bad_date_is_a_usage_error() {
    let home = TempDir::new().unwrap();
    report_cmd(&home)
        .args(["--date", "18/01/2024"])
        .assert()
        .code(2)
        .stderr(contains("expected YYYY-MM-DD").and(contains("Usage:")));
}
