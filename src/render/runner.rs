//! Subprocess execution inside figure folders
//!
//! All external tools (gnuplot and the compile shell scripts) run with the
//! figure folder as working directory, so the generated scripts can use
//! figure-local file names throughout.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Captured result of one external tool invocation
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
}

/// Runs a program inside the figure folder and captures its output
pub fn run_in_folder(
    folder: &Path,
    program: &str,
    args: &[&str],
    verbose: bool,
) -> Result<ProcessOutput> {
    if verbose {
        eprintln!("trying call: {} {}", program, args.join(" "));
    }

    let output = match Command::new(program).args(args).current_dir(folder).output() {
        Ok(output) => output,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            bail!("{} is not installed (command not found)", program);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to run {} in {}", program, folder.display()));
        }
    };

    Ok(ProcessOutput {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        success: output.status.success(),
    })
}

/// Inspects a finished invocation for failure.
///
/// gnuplot and the latex toolchain do not reliably signal errors through
/// exit codes, so the streams are scanned as well. The `Standard Error`
/// line printed by gnuplot's `fit` statistics must not count as a failure.
pub fn diagnose(output: &ProcessOutput) -> Option<String> {
    let failed = !output.success
        || output.stdout.contains("error")
        || output.stdout.contains("Error")
        || output.stderr.contains("error")
        || (output.stderr.contains("Error") && !output.stderr.contains("Standard Error"));

    if !failed {
        return None;
    }

    let headline = if output.stderr.contains("pdflatex: command not found") {
        "pdflatex is NOT installed"
    } else if output.stderr.contains("gnuplot: command not found") {
        "gnuplot is NOT installed"
    } else {
        "an error was intercepted"
    };

    Some(format!(
        "{}\n===== stderr =====\n{}\n=== stderr end ===\n===== stdout =====\n{}\n=== stdout end ===",
        headline, output.stderr, output.stdout
    ))
}
