use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Temporary workspace holding an empty config file and a scaffold root
struct CliTestEnvironment {
    temp_dir: TempDir,
    config: PathBuf,
    root: PathBuf,
}

impl CliTestEnvironment {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temporary directory");
        let config = temp_dir.path().join("config.json");
        std::fs::write(&config, "{}").expect("Failed to write config");
        let root = temp_dir.path().join("project");
        Self {
            temp_dir,
            config,
            root,
        }
    }

    /// Command with --no-color and the environment's config and root
    fn bp_cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("bp").expect("Failed to find bp binary");
        cmd.arg("--no-color")
            .arg("--config")
            .arg(&self.config)
            .arg("--root")
            .arg(&self.root);
        cmd
    }

    fn write_json(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write json file");
        path
    }
}

const VAGUE_RAW_PLAN: &str = r#"{
    "milestones": [
        {"id": 1, "title": "Core", "tasks": [
            {"step": 1, "description": "Handle stuff", "output": "src/a.rs", "priority": "high"}
        ]}
    ],
    "artifacts": ["src/a.rs", "tests/", "README.md"]
}"#;

const APPROVED_PLAN: &str = r#"{
    "feature": "Add login",
    "status": "draft",
    "milestones": [
        {"id": 1, "title": "Core", "tasks": [
            {"step": 1, "description": "Implement login", "output": "src/login.rs", "priority": "high"}
        ]}
    ],
    "artifacts": ["src/login.rs"]
}"#;

fn path_arg(path: &Path) -> &str {
    path.to_str().expect("Non UTF-8 temp path")
}

#[test]
fn test_cli_plan_preview_lists_manifest() {
    let env = CliTestEnvironment::new();

    env.bp_cmd()
        .args(["plan", "Add login"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# Plan: Add login"))
        .stdout(predicate::str::contains("## Scaffold preview (dry run)"))
        .stdout(predicate::str::contains("[would create] src/"))
        .stdout(predicate::str::contains("[would create] README.md"));

    assert!(!env.root.exists());
}

#[test]
fn test_cli_plan_execute_creates_scaffold() {
    let env = CliTestEnvironment::new();

    env.bp_cmd()
        .args(["plan", "Add login", "--execute"])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Scaffold executed"))
        .stdout(predicate::str::contains("[create dir] src/"))
        .stdout(predicate::str::contains("[create file] tests/test_core.py"));

    assert!(env.root.join("src").is_dir());
    assert_eq!(
        std::fs::read_to_string(env.root.join("src/core.py")).unwrap(),
        "# TODO: Implement core.py\n"
    );
    assert!(env.root.join("README.md").is_file());

    env.bp_cmd()
        .args(["plan", "Add login", "--execute"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[skip] README.md (already exists)"));
}

#[test]
fn test_cli_dry_run_conflicts_with_execute() {
    let env = CliTestEnvironment::new();

    env.bp_cmd()
        .args(["plan", "Add login", "--dry-run", "--execute"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_cli_plan_json_output() {
    let env = CliTestEnvironment::new();

    let output = env
        .bp_cmd()
        .args(["plan", "Add login", "--json"])
        .output()
        .expect("Failed to run bp");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("Output is not JSON");
    assert_eq!(value["mode"], "preview");
    assert_eq!(value["plan"]["feature"], "Add login");
    assert_eq!(value["plan"]["status"], "draft");
    assert_eq!(
        value["manifest"],
        serde_json::json!(["src/", "src/core.py", "tests/", "tests/test_core.py", "README.md"])
    );
}

#[test]
fn test_cli_prompts_for_feature_when_omitted() {
    let env = CliTestEnvironment::new();

    env.bp_cmd()
        .write_stdin("Add search\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("Enter your feature request: "))
        .stdout(predicate::str::contains("# Plan: Add search"))
        .stdout(predicate::str::contains("Enter your feature request").not());
}

#[test]
fn test_cli_prompted_feature_with_json_keeps_stdout_parseable() {
    let env = CliTestEnvironment::new();

    let output = env
        .bp_cmd()
        .args(["plan", "--json"])
        .write_stdin("Add login\n")
        .output()
        .expect("Failed to run bp");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("Output is not UTF-8");
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("Output is not JSON");
    assert_eq!(value["plan"]["feature"], "Add login");
    assert_eq!(value["mode"], "preview");
}

#[test]
fn test_cli_empty_feature_request_fails() {
    let env = CliTestEnvironment::new();

    env.bp_cmd()
        .arg("plan")
        .write_stdin("   \n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Empty feature request."));

    assert!(!env.root.exists());
}

#[test]
fn test_cli_plan_file_rejected_after_refinements() {
    let env = CliTestEnvironment::new();
    let plan_file = env.write_json("raw.json", VAGUE_RAW_PLAN);

    env.bp_cmd()
        .args([
            "plan",
            "Add login",
            "--execute",
            "--plan-file",
            path_arg(&plan_file),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("## Plan review failed after 2 refinement(s)"))
        .stdout(predicate::str::contains("has vague description"))
        .stderr(predicate::str::contains("not approved"));

    assert!(!env.root.exists());
}

#[test]
fn test_cli_max_refinements_flag_is_reported() {
    let env = CliTestEnvironment::new();
    let plan_file = env.write_json("raw.json", VAGUE_RAW_PLAN);

    env.bp_cmd()
        .args([
            "plan",
            "Add login",
            "--max-refinements",
            "0",
            "--plan-file",
            path_arg(&plan_file),
        ])
        .assert()
        .failure()
        .stdout(predicate::str::contains("## Plan review failed after 0 refinement(s)"))
        .stdout(predicate::str::contains("Task 'Handle stuff' has vague description"));
}

#[test]
fn test_cli_invalid_plan_file_reports_path() {
    let env = CliTestEnvironment::new();
    let plan_file = env.write_json(
        "raw.json",
        r#"{"milestones": [{"id": 1, "title": "Core", "tasks": []}], "artifacts": ["a"]}"#,
    );

    env.bp_cmd()
        .args(["plan", "Add login", "--plan-file", path_arg(&plan_file)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Plan validation failed"))
        .stderr(predicate::str::contains("milestones[0].tasks"));
}

#[test]
fn test_cli_review_approved_plan() {
    let env = CliTestEnvironment::new();
    let plan_file = env.write_json("plan.json", APPROVED_PLAN);

    env.bp_cmd()
        .args(["review", path_arg(&plan_file)])
        .assert()
        .success()
        .stdout(predicate::str::contains("## Review: Approved"))
        .stdout(predicate::str::contains("Consider adding test files to artifacts"));
}

#[test]
fn test_cli_review_rejected_plan_fails() {
    let env = CliTestEnvironment::new();
    let plan_file = env.write_json(
        "plan.json",
        &APPROVED_PLAN.replace(r#""artifacts": ["src/login.rs"]"#, r#""artifacts": ["README.md"]"#),
    );

    env.bp_cmd()
        .args(["review", path_arg(&plan_file)])
        .assert()
        .failure()
        .stdout(predicate::str::contains("## Review: Changes requested"))
        .stdout(predicate::str::contains(
            "Task output 'src/login.rs' not in artifacts list",
        ))
        .stderr(predicate::str::contains("1 unresolved issue(s)"));
}

#[test]
fn test_cli_schema_describes_plan() {
    let env = CliTestEnvironment::new();

    env.bp_cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"milestones\""))
        .stdout(predicate::str::contains("\"artifacts\""));
}

#[test]
fn test_cli_invalid_config_fails() {
    let env = CliTestEnvironment::new();
    std::fs::write(&env.config, r#"{"unknown": true}"#).expect("Failed to write config");

    env.bp_cmd()
        .args(["plan", "Add login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to initialize blueprint"));
}
