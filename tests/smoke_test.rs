//! Smoke test - runs the steplist binary end-to-end
//!
//! Covers the `catalog`, `init` and `check` commands and their exit codes.
//! Run with: cargo test --test smoke_test

use std::path::PathBuf;
use std::process::{Command, Output};

fn steplist(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_steplist"))
        .args(args)
        .output()
        .expect("steplist binary should run")
}

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("steplist_smoke_{}_{}", std::process::id(), name))
}

#[test]
fn smoke_test_init_prints_definition() {
    let output = steplist(&["init", "--platform", "android", "--name", "Smoke App"]);
    assert!(output.status.success(), "init should succeed: {:?}", output);

    let stdout = String::from_utf8(output.stdout).unwrap();
    let yaml: serde_yaml::Value = serde_yaml::from_str(&stdout).expect("stdout should be YAML");

    assert_eq!(yaml["app"]["envs"][0]["BITRISE_APP_TITLE"].as_str(), Some("Smoke App"));
    let steps = yaml["workflows"]["primary"]["steps"].as_sequence().unwrap();
    assert!(steps.iter().any(|s| s.get("gradle-runner@1.3.1").is_some()));
}

#[test]
fn smoke_test_init_from_project_file_then_check() {
    let project = temp_path("project.yml");
    let definition = temp_path("bitrise.yml");
    std::fs::write(
        &project,
        r#"
platform: ios
inputs:
  xcode-archive:
    - scheme: Smoke
"#,
    )
    .unwrap();

    let init = steplist(&[
        "init",
        "--file",
        project.to_str().unwrap(),
        "--output",
        definition.to_str().unwrap(),
    ]);
    assert!(init.status.success(), "init should succeed: {:?}", init);

    let written = std::fs::read_to_string(&definition).expect("definition should be written");
    assert!(written.contains("xcode-archive@1.8.3"));

    let check = steplist(&["check", "--file", definition.to_str().unwrap()]);
    assert_eq!(check.status.code(), Some(0), "scaffolded definition should pass: {:?}", check);

    std::fs::remove_file(&project).ok();
    std::fs::remove_file(&definition).ok();
}

#[test]
fn smoke_test_check_fails_on_findings() {
    let definition = temp_path("stale.yml");
    std::fs::write(
        &definition,
        r#"
format_version: 1.3.1
workflows:
  primary:
    steps:
      - https://github.com/bitrise-io/bitrise-steplib.git::git-clone@3.2.0:
      - xcode-test@1.0.0:
          inputs:
            - scheme: Smoke
              opts:
                is_expand: false
"#,
    )
    .unwrap();

    let output = steplist(&["check", "--file", definition.to_str().unwrap(), "--json"]);
    assert_eq!(output.status.code(), Some(1), "findings should fail check: {:?}", output);

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let findings = report["findings"].as_array().unwrap();
    assert_eq!(findings.len(), 1);
    assert_eq!(findings[0]["key"], "xcode-test@1.0.0");
    assert_eq!(findings[0]["kind"], "outdated");
    assert_eq!(findings[0]["pinned"], "xcode-test@1.13.8");

    std::fs::remove_file(&definition).ok();
}

#[test]
fn smoke_test_check_missing_file_fails() {
    let output = steplist(&["check", "--file", "/nonexistent/steplist/bitrise.yml"]);
    assert!(!output.status.success());
}

#[test]
fn smoke_test_catalog_json() {
    let output = steplist(&["catalog", "--category", "xamarin", "--json"]);
    assert!(output.status.success());

    let entries: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let keys: Vec<_> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["key"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        keys,
        vec![
            "xamarin-user-management@1.0.2",
            "nuget-restore@0.9.2",
            "xamarin-components-restore@0.9.0",
            "xamarin-builder@1.3.5",
        ]
    );
}
