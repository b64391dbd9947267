use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

const COURSE: &str = r#"{
    "course": {
        "id": 42,
        "fullname": "Organic Chemistry",
        "marker": 2,
        "enable_completion": true,
        "options": {"print_progress": true, "print_overall_progress": true}
    },
    "sections": [
        {"id": 100, "section": 0, "modules": [1]},
        {"id": 101, "section": 1, "name": "Foundations", "modules": [2, 3, 4, 5]},
        {"id": 102, "section": 2, "summary": "<p>Reactions</p><img src=\"flask.png\">", "modules": [6]},
        {"id": 103, "section": 3, "uservisible": false, "available": false,
         "available_info": "Available after the midterm", "modules": [7]}
    ],
    "modules": [
        {"id": 1, "modname": "forum", "name": "Announcements"},
        {"id": 2, "modname": "page", "name": "Syllabus", "completion": "manual", "state": "complete"},
        {"id": 3, "modname": "label", "content": "<h2>Bonding</h2>"},
        {"id": 4, "modname": "quiz", "name": "Bonding quiz", "completion": "automatic", "state": "complete_fail"},
        {"id": 5, "modname": "label", "content": "<p>Just a note</p>"},
        {"id": 6, "modname": "page", "name": "Reaction types"},
        {"id": 7, "modname": "quiz", "name": "Midterm"}
    ]
}"#;

fn write_snapshot(dir: &Path) -> PathBuf {
    let path = dir.join("course.json");
    fs::write(&path, COURSE).unwrap();
    path
}

fn menutab() -> Command {
    let mut cmd = Command::cargo_bin("menutab").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_home_html() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(temp_dir.path());

    menutab()
        .arg(&snapshot)
        .arg("home")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"id="card-1""#))
        .stdout(predicate::str::contains(r#"id="card-3""#))
        .stdout(predicate::str::contains("Available after the midterm"))
        .stdout(predicate::str::contains(r#"<img src="flask.png" class="card-image-top""#))
        .stdout(predicate::str::contains("progress-circle overall"))
        .stdout(predicate::str::contains("Announcements"));
}

#[test]
fn test_home_json_context() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(temp_dir.path());

    let output = menutab()
        .arg(&snapshot)
        .args(["home", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["courseid"], 42);
    assert_eq!(json["sectionrows"][0]["sections"].as_array().unwrap().len(), 3);
    assert_eq!(json["sectionrows"][0]["sections"][1]["current"], true);
    assert_eq!(json["sectionrows"][0]["sections"][2]["restricted"], true);
    // Only section 1 has tracked modules: one complete, one failed.
    assert_eq!(json["overall_progress"]["completed"], 1);
    assert_eq!(json["overall_progress"]["outof"], 2);
    assert_eq!(json["overall_progress_indicator"]["percent"], 50);
}

#[test]
fn test_section_tabs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(temp_dir.path());

    let output = menutab()
        .arg(&snapshot)
        .args(["section", "1", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "found");
    assert_eq!(json["title"], "Foundations");
    let tabs = json["tabs"].as_array().unwrap();
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0]["title"], "Contents");
    assert_eq!(tabs[1]["title"], "Bonding");
    assert_eq!(tabs[1]["modules"].as_array().unwrap().len(), 2);
    assert_eq!(json["progress"]["numOutOf"], 2);
}

#[test]
fn test_missing_section_is_not_an_error() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(temp_dir.path());

    menutab()
        .arg(&snapshot)
        .args(["section", "9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("section-not-found"))
        .stderr(predicate::str::contains("Section 9 does not exist"));
}

#[test]
fn test_strict_missing_section_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(temp_dir.path());

    menutab()
        .arg(&snapshot)
        .args(["section", "9", "--strict"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Section not found: 9"));
}

#[test]
fn test_preview_output() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(temp_dir.path());

    menutab()
        .arg(&snapshot)
        .args(["home", "--format", "preview", "--no-color"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Organic Chemistry"))
        .stdout(predicate::str::contains("1. Foundations"))
        .stdout(predicate::str::contains("1/2 (50%)"))
        .stdout(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn test_config_dir_overrides_options() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(temp_dir.path());
    let config_dir = temp_dir.path().join("config");
    fs::create_dir(&config_dir).unwrap();
    fs::write(config_dir.join("config.json"), r#"{"numcolumns": 2}"#).unwrap();

    let output = menutab()
        .arg(&snapshot)
        .args(["home", "--format", "json", "--config"])
        .arg(&config_dir)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["columns"], 2);
    assert_eq!(json["sectionrows"].as_array().unwrap().len(), 2);
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let snapshot = write_snapshot(temp_dir.path());
    fs::write(temp_dir.path().join("config.json"), r#"{"numcolumns": 0}"#).unwrap();

    menutab()
        .arg(&snapshot)
        .arg("home")
        .arg("--config")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Config error"));
}

#[test]
fn test_missing_snapshot_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    menutab()
        .arg(temp_dir.path().join("missing.json"))
        .arg("home")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: IO error"));
}

#[test]
fn test_malformed_snapshot_fails() {
    let temp_dir = tempfile::tempdir().unwrap();
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ \"course\": ").unwrap();

    menutab()
        .arg(&path)
        .arg("home")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error: Serialization error"));
}
