use armory::config::Config;
use armory::issue::ValidationReport;
use armory::output::{self, OutputFormat};
use std::path::Path;

fn get_dirty_report() -> ValidationReport {
    let config = Config::default().with_workspace_root("tests/fixtures/dirty");
    armory::validator::run_validation(&config).unwrap()
}

fn get_clean_report() -> ValidationReport {
    let config = Config::default().with_workspace_root(Path::new("tests/fixtures/clean"));
    armory::validator::run_validation(&config).unwrap()
}

#[test]
fn json_output_is_the_envelope() {
    let report = get_dirty_report();
    let json = output::format_report(&report, &OutputFormat::Json);

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");
    let mut keys: Vec<&str> = parsed
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort();
    assert_eq!(keys, ["errors", "extra_data", "is_passed", "issues", "metrics"]);
    assert_eq!(parsed["issues"].as_array().unwrap().len(), 4);
    assert!(parsed["is_passed"].as_bool().unwrap());
    assert_eq!(parsed["metrics"], serde_json::json!([]));
}

#[test]
fn json_clean_workspace() {
    let report = get_clean_report();
    let json = output::format_report(&report, &OutputFormat::Json);

    let parsed: serde_json::Value = serde_json::from_str(&json).expect("JSON should be valid");
    assert!(!parsed["is_passed"].as_bool().unwrap());
    assert!(parsed["issues"].as_array().unwrap().is_empty());
}

#[test]
fn json_issue_codes() {
    let report = get_dirty_report();
    let json = output::format_report(&report, &OutputFormat::Json);

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let issues = parsed["issues"].as_array().unwrap();

    for code in ["ARMORY-001", "ARMORY-002", "ARMORY-003"] {
        assert!(
            issues.iter().any(|i| i["issue_code"] == code),
            "Should have at least one {code} issue"
        );
    }
}

#[test]
fn sarif_output_is_valid() {
    let report = get_dirty_report();
    let sarif = output::format_report(&report, &OutputFormat::Sarif);

    let parsed: serde_json::Value =
        serde_json::from_str(&sarif).expect("SARIF JSON should be valid");
    assert_eq!(parsed["version"], "2.1.0");
    assert_eq!(parsed["runs"][0]["tool"]["driver"]["name"], "armory");
    assert_eq!(parsed["runs"][0]["results"].as_array().unwrap().len(), 4);
    assert_eq!(
        parsed["runs"][0]["tool"]["driver"]["rules"]
            .as_array()
            .unwrap()
            .len(),
        3
    );
}

#[test]
fn sarif_location_is_relative_and_one_based() {
    let report = get_dirty_report();
    let sarif = output::format_report(&report, &OutputFormat::Sarif);

    let parsed: serde_json::Value = serde_json::from_str(&sarif).unwrap();
    let location = &parsed["runs"][0]["results"][0]["locations"][0]["physicalLocation"];
    assert!(location["artifactLocation"]["uri"]
        .as_str()
        .unwrap()
        .starts_with(".deepsource/analyzer/issues/"));
    assert_eq!(location["region"]["startLine"], 1);
    assert_eq!(location["region"]["startColumn"], 1);
}

#[test]
fn pretty_output_lists_issues() {
    let report = get_dirty_report();
    let pretty = output::format_report(&report, &OutputFormat::Pretty);

    assert!(pretty.contains("ARMORY-001"));
    assert!(pretty.contains("Title should not end with a period."));
    assert!(pretty.contains(".deepsource/analyzer/issues/FOO-001.toml:1:0"));
    assert!(pretty.contains("ISSUES FOUND"));
}

#[test]
fn pretty_output_clean() {
    let report = get_clean_report();
    let pretty = output::format_report(&report, &OutputFormat::Pretty);

    assert!(pretty.contains("CLEAN"));
    assert!(pretty.contains("3 files scanned, 1 archived"));
}
