//! CLI behavior tests: exit codes, output formats, init.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const GOOD_DOC: &str = "test-fixtures/good.json";
const MINIMAL_DOC: &str = "test-fixtures/minimal.json";
const INVALID_DOC: &str = "test-fixtures/invalid.json";
const BLOG_DIR: &str = "test-fixtures/blog";

fn seoscope_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_seoscope"));
    cmd.env_remove("SEOSCOPE_LOG");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "command failed: {:?}", output);
    let s = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(s.trim()).expect("valid JSON")
}

#[test]
fn no_args_returns_error_not_panic() {
    seoscope_cmd()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("<PATH>"));
}

#[test]
fn below_threshold_exit_1() {
    seoscope_cmd()
        .arg(MINIMAL_DOC)
        .arg("--threshold")
        .arg("90")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("below threshold"));
}

#[test]
fn zero_threshold_exit_0() {
    seoscope_cmd()
        .arg(MINIMAL_DOC)
        .arg("--threshold")
        .arg("0")
        .assert()
        .success();
}

#[test]
fn json_output_valid() {
    let parsed = json_stdout(seoscope_cmd().arg(GOOD_DOC).arg("--json"));
    assert_eq!(parsed["filePath"], GOOD_DOC);
    assert!(parsed["insights"]["wordCount"].as_u64().unwrap() > 0);
    assert_eq!(
        parsed["keyphraseAnalysis"]["criteria"]["slug"]["status"],
        "favorable"
    );
    assert!(parsed["readability"]["summary"]["percentage"].is_number());
}

#[test]
fn compact_json_is_single_line() {
    let output = seoscope_cmd().arg(GOOD_DOC).arg("--json").output().unwrap();
    let s = String::from_utf8_lossy(&output.stdout);
    assert_eq!(s.trim().lines().count(), 1);

    let output = seoscope_cmd()
        .arg(GOOD_DOC)
        .arg("--json")
        .arg("--pretty")
        .output()
        .unwrap();
    let s = String::from_utf8_lossy(&output.stdout);
    assert!(s.trim().lines().count() > 1);
}

#[test]
fn site_domain_flag_classifies_internal_links() {
    let without = json_stdout(seoscope_cmd().arg(GOOD_DOC).arg("--json"));
    assert_eq!(
        without["keyphraseAnalysis"]["criteria"]["internal-links"]["status"],
        "unfavorable"
    );

    let with = json_stdout(
        seoscope_cmd()
            .arg(GOOD_DOC)
            .arg("--json")
            .arg("--site-domain")
            .arg("coffee.example"),
    );
    let internal = &with["keyphraseAnalysis"]["criteria"]["internal-links"];
    assert_eq!(internal["status"], "favorable");
    assert_eq!(internal["totalInternalLinks"], 1);
}

#[test]
fn no_summary_drops_section_summaries() {
    let parsed = json_stdout(seoscope_cmd().arg(GOOD_DOC).arg("--json").arg("--no-summary"));
    assert!(parsed["keyphraseAnalysis"].get("summary").is_none());
    assert!(parsed["readability"].get("summary").is_none());
}

#[test]
fn invalid_document_exit_2() {
    seoscope_cmd()
        .arg(INVALID_DOC)
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid document JSON"));
}

#[test]
fn file_not_found_exit_2() {
    seoscope_cmd()
        .arg("test-fixtures/does-not-exist.json")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Path does not exist"));
}

#[test]
fn quiet_prints_one_line_per_document() {
    seoscope_cmd()
        .arg(GOOD_DOC)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("good.json: keyphrase"));
}

#[test]
fn console_output_lists_sections() {
    seoscope_cmd()
        .arg(GOOD_DOC)
        .assert()
        .success()
        .stdout(predicate::str::contains("Keyphrase Analysis"))
        .stdout(predicate::str::contains("Readability"))
        .stdout(predicate::str::contains("[slug]"));
}

#[test]
fn directory_uses_config_and_ignores_drafts() {
    let parsed = json_stdout(seoscope_cmd().arg(BLOG_DIR).arg("--json"));

    let results = parsed["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results
        .iter()
        .all(|r| !r["filePath"].as_str().unwrap().contains("drafts")));
    assert_eq!(parsed["summary"]["documentsAnalyzed"], 2);

    // siteDomain comes from the directory's config; relative links are internal anyway
    let grinders = results
        .iter()
        .find(|r| r["filePath"].as_str().unwrap().ends_with("grinders.json"))
        .unwrap();
    assert_eq!(
        grinders["keyphraseAnalysis"]["criteria"]["internal-links"]["status"],
        "favorable"
    );
}

#[test]
fn parallel_matches_sequential() {
    let sequential = json_stdout(seoscope_cmd().arg(BLOG_DIR).arg("--json"));
    let parallel = json_stdout(
        seoscope_cmd()
            .arg(BLOG_DIR)
            .arg("--json")
            .arg("--parallel")
            .arg("--jobs")
            .arg("2"),
    );
    assert_eq!(sequential, parallel);
}

#[test]
fn config_rules_disable_criteria() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(".seoscoperc.json"),
        r#"{ "rules": { "title-width": "off", "passive-voice": "off" } }"#,
    )
    .unwrap();
    let doc = dir.path().join("post.json");
    fs::copy(GOOD_DOC, &doc).unwrap();

    let parsed = json_stdout(seoscope_cmd().arg(&doc).arg("--json"));
    assert!(parsed["keyphraseAnalysis"]["criteria"]
        .get("title-width")
        .is_none());
    assert!(parsed["readability"]["criteria"].get("passive-voice").is_none());
    assert_eq!(parsed["keyphraseAnalysis"]["summary"]["total"], 16);
    assert_eq!(parsed["readability"]["summary"]["total"], 7);
}

#[test]
fn init_creates_config() {
    let dir = tempfile::tempdir().unwrap();
    seoscope_cmd()
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .arg("--site-domain")
        .arg("coffee.example")
        .arg("--threshold")
        .arg("80")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));

    let written = fs::read_to_string(dir.path().join(".seoscoperc.json")).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed["threshold"], 80);
    assert_eq!(parsed["siteDomain"], "coffee.example");
}

#[test]
fn init_does_not_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".seoscoperc.json");
    fs::write(&path, "{}").unwrap();

    seoscope_cmd()
        .arg("init")
        .arg("--dir")
        .arg(dir.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn threshold_from_config_applies() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(".seoscoperc.json"), r#"{ "threshold": 100 }"#).unwrap();
    let doc = dir.path().join("post.json");
    fs::copy(MINIMAL_DOC, &doc).unwrap();

    seoscope_cmd().arg(&doc).assert().failure().code(1);
    seoscope_cmd()
        .arg(&doc)
        .arg("--threshold")
        .arg("0")
        .assert()
        .success();
}
