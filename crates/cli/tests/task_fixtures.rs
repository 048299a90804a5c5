use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_fixtures(dir: &Path) -> (PathBuf, PathBuf) {
    let input_path = dir.join("tasks-input.json");
    let output_path = dir.join("tasks-output.json");
    fs::write(
        &input_path,
        r#"[
          {
            "id": "t1",
            "file_path": "src/demo.py",
            "old_code": "def f():\n    return 1\n",
            "new_code": "def f():\n    x = 1\n    return x\n",
            "old_start_line": "10",
            "new_start_line": 10
          }
        ]"#,
    )
    .unwrap();
    fs::write(
        &output_path,
        r#"[
          {
            "task_id": "t1",
            "old_code": {
              "summary": {"medium_structured": "returns one"},
              "mappings": {}
            },
            "new_code": {
              "summary": {"medium_structured": "stores one in x and returns it"},
              "mappings": {
                "medium_structured": [
                  {
                    "summaryComponent": "stores one",
                    "codeSegments": [{"code": "x = 1"}]
                  },
                  {
                    "summaryComponent": "returns it",
                    "codeSegments": [{"code": "return x"}]
                  }
                ]
              }
            }
          }
        ]"#,
    )
    .unwrap();
    (input_path, output_path)
}

#[test]
fn regions_json_reports_resolved_spans() {
    let temp = tempdir().unwrap();
    let (input_path, output_path) = write_fixtures(temp.path());

    let output = Command::cargo_bin("sumlens")
        .expect("binary")
        .arg("regions")
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .arg("--json")
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["task_id"], "t1");
    assert_eq!(body["key"], "medium_structured");
    assert_eq!(body["version"], "new");

    let regions = body["regions"].as_array().expect("regions array");
    assert_eq!(regions.len(), 2);
    // new code: "def f():\n    x = 1\n    return x\n"
    assert_eq!(regions[0]["start"], 13);
    assert_eq!(regions[0]["end"], 18);
    assert_eq!(regions[0]["phrase"], "stores one");
    assert_eq!(regions[1]["start"], 23);
    assert_eq!(regions[1]["end"], 31);
    assert_eq!(regions[1]["phrase"], "returns it");
}

#[test]
fn regions_old_version_has_no_mappings() {
    let temp = tempdir().unwrap();
    let (input_path, output_path) = write_fixtures(temp.path());

    let output = Command::cargo_bin("sumlens")
        .expect("binary")
        .arg("regions")
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .arg("--version")
        .arg("old")
        .arg("--json")
        .output()
        .expect("command run");
    assert!(output.status.success());

    let body: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(body["regions"].as_array().map(Vec::len), Some(0));
}

#[test]
fn regions_unknown_task_fails() {
    let temp = tempdir().unwrap();
    let (input_path, output_path) = write_fixtures(temp.path());

    Command::cargo_bin("sumlens")
        .expect("binary")
        .arg("regions")
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .arg("--task")
        .arg("nope")
        .assert()
        .failure()
        .stderr(predicates::str::contains("no task with id"));
}

#[test]
fn show_prints_full_summary_text() {
    let temp = tempdir().unwrap();
    let (input_path, output_path) = write_fixtures(temp.path());

    // stdout is piped, so styling collapses to plain text; the overlay must
    // still carry the whole new summary verbatim
    Command::cargo_bin("sumlens")
        .expect("binary")
        .arg("show")
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .assert()
        .success()
        .stdout(predicates::str::contains("stores one in x and returns it"));
}

#[test]
fn show_with_code_prints_annotated_version() {
    let temp = tempdir().unwrap();
    let (input_path, output_path) = write_fixtures(temp.path());

    Command::cargo_bin("sumlens")
        .expect("binary")
        .arg("show")
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .arg("--code")
        .arg("--active")
        .arg("0")
        .arg("--spotlight")
        .assert()
        .success()
        .stdout(predicates::str::contains("return x"));
}
