/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior.
/// Rendering itself needs a gnuplot/latex toolchain and is not exercised
/// here; everything else is.
mod common;

use std::path::PathBuf;
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use common::{FigureBuilder, sine_columns};

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_autognuplot"));
    // hostname/user lookups must not depend on the runner's environment
    cmd.env("USER", "testuser");
    cmd
}

fn generated_figure(identifier: &str) -> (tempfile::TempDir, PathBuf) {
    let builder = FigureBuilder::new(identifier);
    let folder = builder.folder();
    let (dir, mut figure) = builder.build();
    figure.plot("u 1:2 w lp t \"data\"", &sine_columns(10)).unwrap();
    figure.generate().unwrap();
    (dir, folder)
}

#[test]
fn test_cli_no_command_shows_help_message() {
    cli().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Compile and inspect generated gnuplot figure folders"))
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn test_cli_version_flag() {
    cli().arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_invalid_command() {
    cli().arg("invalid-command").assert().failure();
}

#[test]
fn test_cli_doctor_prints_environment_fixes() {
    cli().arg("doctor").assert().success().stdout(predicate::str::contains("ImageMagick"));
}

#[test]
fn test_cli_script_prints_core_script() {
    let (_dir, folder) = generated_figure("figcli");
    cli()
        .arg("script")
        .arg(&folder)
        .assert()
        .success()
        .stdout(predicate::str::contains("figcli__.core.gnu"))
        .stdout(predicate::str::contains("figcli__0__.dat"));
}

#[test]
fn test_cli_script_rejects_empty_folder() {
    let dir = tempfile::TempDir::new().unwrap();
    cli()
        .arg("script")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No generated figure scripts"));
}

#[test]
fn test_cli_info_reads_manifest() {
    let (_dir, folder) = generated_figure("figcli");
    cli()
        .arg("info")
        .arg(&folder)
        .assert()
        .success()
        .stdout(predicate::str::contains("identifier: figcli"))
        .stdout(predicate::str::contains("figcli__0__.dat"))
        .stdout(predicate::str::contains("latex enabled: true"));
}

#[test]
fn test_cli_info_without_manifest_falls_back_to_scan() {
    let (_dir, folder) = generated_figure("figcli");
    std::fs::remove_file(folder.join("figure.json")).unwrap();
    cli()
        .arg("info")
        .arg(&folder)
        .assert()
        .success()
        .stdout(predicate::str::contains("no manifest"))
        .stdout(predicate::str::contains("identifier: figcli"));
}

#[test]
fn test_cli_snippet_prints_includegraphics() {
    let (_dir, folder) = generated_figure("figcli");
    cli()
        .arg("snippet")
        .arg(&folder)
        .assert()
        .success()
        .stdout(predicate::str::contains("\\includegraphics"))
        .stdout(predicate::str::contains("figcli__"));
}

#[test]
fn test_cli_clean_removes_build_artifacts() {
    let (_dir, folder) = generated_figure("figcli");
    std::fs::write(folder.join("figcli__.pdf"), b"pdf").unwrap();
    std::fs::write(folder.join("figcli__.jpg"), b"jpg").unwrap();

    cli()
        .arg("clean")
        .arg(&folder)
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed"));

    assert!(!folder.join("figcli__.pdf").exists());
    assert!(!folder.join("figcli__.jpg").exists());
    assert!(folder.join("figcli__.core.gnu").exists());
}

#[test]
fn test_cli_render_missing_folder_fails() {
    cli()
        .arg("render")
        .arg("/nonexistent/folder")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not a figure folder"));
}
