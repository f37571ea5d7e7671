// Output format tests: text, JSON and CSV renderings of the summary

use assert_cmd::Command;
use predicates::prelude::*;

#[allow(deprecated)]
fn hypotest() -> Command {
    Command::cargo_bin("hypotest").unwrap()
}

#[test]
fn test_text_rows_in_order() {
    let output = hypotest().arg("--data").arg("10,20;30,40").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let labels = [
        "Summary",
        "Type Test",
        "Level of Significance",
        "Probability",
        "Calculated Value",
        "Critical Value",
        "p Value",
        "Decision",
    ];
    let mut last = 0;
    for label in labels {
        let pos = stdout[last..]
            .find(label)
            .unwrap_or_else(|| panic!("{} missing or out of order in:\n{}", label, stdout));
        last += pos + label.len();
    }
}

#[test]
fn test_json_output_parses() {
    let output = hypotest()
        .arg("--format")
        .arg("json")
        .arg("--test")
        .arg("ttest")
        .arg("--data")
        .arg("1,2,3,4,5;2,4,6,8,10")
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["format"], "hypotest-json-v1");
    assert_eq!(parsed["result"]["test_kind"], "ttest");
    assert_eq!(parsed["result"]["degrees_of_freedom"], 8.0);
    assert_eq!(parsed["result"]["statistic"], -1.897);
    assert_eq!(parsed["result"]["decision"], "AcceptNull");
    assert_eq!(parsed["summary"].as_array().unwrap().len(), 8);
    assert_eq!(parsed["summary"][1]["value"], "T Test (independant)");
}

#[test]
fn test_csv_output() {
    hypotest()
        .arg("--format")
        .arg("csv")
        .arg("--data")
        .arg("10,20;30,40")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(" ,Summary\n"))
        .stdout(predicate::str::contains("Type Test,Chi2 Test\n"))
        .stdout(predicate::str::contains("Calculated Value,0.794\n"))
        .stdout(predicate::str::contains("Decision,Accept H0\n"));
}

#[test]
fn test_decimals_flag() {
    hypotest()
        .arg("--decimals")
        .arg("5")
        .arg("--format")
        .arg("csv")
        .arg("--data")
        .arg("10,20;30,40")
        .assert()
        .success()
        .stdout(predicate::str::contains("Calculated Value,0.79365\n"));
}

#[test]
fn test_debug_tracing_goes_to_stderr() {
    hypotest()
        .arg("--debug")
        .arg("--format")
        .arg("json")
        .arg("--data")
        .arg("10,20;30,40")
        .assert()
        .success()
        .stderr(predicate::str::contains("hypothesis test computed"))
        .stdout(predicate::str::starts_with("{"));
}
