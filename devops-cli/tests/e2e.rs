//! End-to-end tests for the devops-center binary
//!
//! Gated behind the `integration` feature flag. Run with:
//!
//! ```sh
//! cargo test -p devops-cli --features integration
//! ```

#![cfg(feature = "integration")]

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Runs the binary with config and data directories isolated under `home`.
fn devops(home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_devops-center"))
        .args(args)
        .env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env("DEVOPS_CENTER_PROJECT_CONFIG_DIR", home.join("project"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run devops-center")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    let output = devops(home.path(), &["--help"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Terminal dashboard for MERN stack deployments"));
    assert!(stdout.contains("render"));
    assert!(stdout.contains("export"));
    assert!(stdout.contains("config"));
}

#[test]
fn render_prints_requested_section() {
    let home = TempDir::new().unwrap();
    let output = devops(home.path(), &["render", "--section", "cicd", "--width", "120"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("Continuous Integration and Deployment workflows"));
    assert!(stdout.contains("frontend.yml"));
    assert!(!stdout.contains("Monitor and manage your MERN stack deployment pipeline"));
}

#[test]
fn render_unknown_section_falls_back_to_dashboard() {
    let home = TempDir::new().unwrap();
    let output = devops(home.path(), &["render", "--section", "payroll", "--height", "20"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("DevOps Dashboard"));
    assert_eq!(stdout(&output).lines().count(), 20);
}

#[test]
fn render_rejects_narrow_width() {
    let home = TempDir::new().unwrap();
    let output = devops(home.path(), &["render", "--width", "5"]);

    assert!(!output.status.success());
}

#[test]
fn export_all_writes_every_template() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("out");
    let output = devops(
        home.path(),
        &["export", "--all", "--out", out.to_str().unwrap()],
    );

    assert!(output.status.success());
    for name in [
        "frontend.yml",
        "backend.yml",
        ".env.example",
        "Dockerfile",
        "package-scripts.json",
        "deployment-guide.md",
    ] {
        assert!(out.join(name).is_file(), "missing {}", name);
    }
    assert_eq!(stdout(&output).lines().count(), 6);
}

#[test]
fn export_single_template_uses_configured_dir() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("project");
    let exports = home.path().join("configured");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(
        project.join("config.toml"),
        format!("[export]\ndir = {:?}\n", exports.to_str().unwrap()),
    )
    .unwrap();

    let output = devops(home.path(), &["export", "dockerfile"]);

    assert!(output.status.success());
    let dockerfile = std::fs::read_to_string(exports.join("Dockerfile")).unwrap();
    assert!(dockerfile.contains("FROM node"));
}

#[test]
fn export_unknown_template_fails() {
    let home = TempDir::new().unwrap();
    let output = devops(home.path(), &["export", "helm-chart"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown template"));
}

#[test]
fn config_show_prints_defaults_without_files() {
    let home = TempDir::new().unwrap();
    let output = devops(home.path(), &["config", "show"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("[ui]"));
    assert!(stdout.contains("initial_section = \"dashboard\""));
    assert!(stdout.contains("tick_rate_ms = 250"));
    assert!(stdout.contains("[export]"));
}

#[test]
fn config_show_reads_project_layer() {
    let home = TempDir::new().unwrap();
    let project = home.path().join("project");
    std::fs::create_dir_all(&project).unwrap();
    std::fs::write(project.join("config.toml"), "[ui]\ninitial_section = \"guide\"\n").unwrap();

    let output = devops(home.path(), &["config", "show"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("initial_section = \"guide\""));
}

#[test]
fn config_path_shows_paths() {
    let home = TempDir::new().unwrap();
    let output = devops(home.path(), &["config", "path"]);

    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("User config:"));
    assert!(stdout.contains("Project config:"));
    assert!(stdout.contains("Log file:"));
    assert!(stdout.contains("devops-center.log"));
}
