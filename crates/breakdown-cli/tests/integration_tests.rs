//! End-to-end tests for the `breakdown` binary.

use std::{fs, path::Path};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `breakdown` invocation rooted in `dir`, isolated from the caller's env.
fn breakdown(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("breakdown").unwrap();
    cmd.current_dir(dir.path())
        .env("BREAKDOWN_CONFIG_DIR", dir.path().join("config"))
        .env_remove("BREAKDOWN_PROFILE")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

#[test]
fn test_help_flag() {
    Command::cargo_bin("breakdown")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("paths"))
        .stdout(predicate::str::contains("--profile"));
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("breakdown")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_no_arguments_prints_usage() {
    Command::cargo_bin("breakdown")
        .unwrap()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

// ── paths ─────────────────────────────────────────────────────────────────────

#[test]
fn test_paths_uses_default_conventions() {
    let dir = TempDir::new().unwrap();
    breakdown(&dir)
        .args(["paths", "to", "project", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("prompts/to/project/f_project.md"))
        .stdout(predicate::str::contains("schema/to/project/base.schema.md"))
        .stdout(predicate::str::contains("output/to/project/"));
}

#[test]
fn test_paths_with_input_layer_and_adaptation() {
    let dir = TempDir::new().unwrap();
    breakdown(&dir)
        .args([
            "paths",
            "to",
            "task",
            "--input",
            "project",
            "--adaptation",
            "strict",
            "--output-format",
            "plain",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "prompts/to/task/f_project_strict.md",
        ));
}

#[test]
fn test_paths_json_output() {
    let dir = TempDir::new().unwrap();
    breakdown(&dir)
        .args(["paths", "summary", "issue", "--output-format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stdout(predicate::str::contains("\"directiveValue\": \"summary\""))
        .stdout(predicate::str::contains("\"layerValue\": \"issue\""));
}

// ── run ───────────────────────────────────────────────────────────────────────

#[test]
fn test_run_renders_stdin_into_template() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "prompts/to/project/f_project.md",
        "# {directive} {layer}\n\n{input_text}\n",
    );

    breakdown(&dir)
        .args(["run", "to", "project"])
        .write_stdin("raw meeting notes")
        .assert()
        .success()
        .stdout(predicate::str::contains("# to project"))
        .stdout(predicate::str::contains("raw meeting notes"));
}

#[test]
fn test_run_reads_input_file_and_user_variables() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "prompts/summary/issue/f_issue.md",
        "by {uv-author}: {input_text}",
    );
    write(dir.path(), "docs/bug.md", "crash on save");

    breakdown(&dir)
        .args([
            "run",
            "summary",
            "issue",
            "--from",
            "docs/bug.md",
            "--uv",
            "author=sam",
        ])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("by sam: crash on save"));
}

#[test]
fn test_run_writes_destination() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "prompts/to/task/f_task.md", "tasks for {input_text}");

    breakdown(&dir)
        .args(["run", "to", "task", "--destination", "plan"])
        .write_stdin("release")
        .assert()
        .success()
        .stdout(predicate::str::contains("Prompt written to"));

    // A bare name lands under the output base dir and gains `.md`.
    let written = dir.path().join("output/to/task/plan.md");
    assert_eq!(fs::read_to_string(written).unwrap(), "tasks for release");
}

#[test]
fn test_run_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "prompts/to/task/f_task.md", "{input_text}");

    breakdown(&dir)
        .args([
            "run",
            "to",
            "task",
            "--destination",
            "plan.md",
            "--dry-run",
            "--output-format",
            "plain",
        ])
        .write_stdin("release")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!dir.path().join("output/to/task/plan.md").exists());
}

#[test]
fn test_run_quiet_still_prints_prompt() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "prompts/defect/issue/f_issue.md", "{input_text}");

    breakdown(&dir)
        .args(["-q", "run", "defect", "issue"])
        .write_stdin("stack trace")
        .assert()
        .success()
        .stdout(predicate::str::diff("stack trace\n"));
}

// ── profiles ──────────────────────────────────────────────────────────────────

const PRODUCTION: &str = "\
app_prompt:
  base_dir: lib/prompts
app_schema:
  base_dir: lib/schema
app_input:
  base_dir: in
app_output:
  base_dir: out
params:
  two:
    directive_type:
      pattern: \"^(review)$\"
    layer_type:
      pattern: \"^(module)$\"
";

#[test]
fn test_named_profile_patterns_and_dirs() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "config/production-app.yml", PRODUCTION);

    breakdown(&dir)
        .args([
            "--profile",
            "production",
            "paths",
            "review",
            "module",
            "--output-format",
            "plain",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("lib/prompts/review/module/f_module.md"));
}

#[test]
fn test_profile_from_environment() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "config/production-app.yml", PRODUCTION);

    breakdown(&dir)
        .env("BREAKDOWN_PROFILE", "production")
        .args(["paths", "to", "project"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("profile 'production'"));
}

#[test]
fn test_local_config_dir_is_discovered() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), ".agent/breakdown/config/production-app.yml", PRODUCTION);

    let mut cmd = Command::cargo_bin("breakdown").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("BREAKDOWN_CONFIG_DIR")
        .env_remove("BREAKDOWN_PROFILE")
        .args(["--profile", "production", "paths", "review", "module"])
        .assert()
        .success();
}

// ── config / completions ──────────────────────────────────────────────────────

#[test]
fn test_config_path_reports_missing_files() {
    let dir = TempDir::new().unwrap();
    breakdown(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default-app.yml (missing)"))
        .stdout(predicate::str::contains("default-user.yml (missing)"));
}

#[test]
fn test_config_show_merges_user_file() {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "config/default-user.yml",
        "app_output:\n  base_dir: reports\n",
    );

    breakdown(&dir)
        .args(["config", "show", "--output-format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reports"))
        .stdout(predicate::str::contains("prompts"));
}

#[test]
fn test_shell_completions() {
    Command::cargo_bin("breakdown")
        .unwrap()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("breakdown"));
}
