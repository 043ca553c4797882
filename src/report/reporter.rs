// src/report/reporter.rs

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{debug, warn};

use crate::evaluate::{Evaluation, Severity};
use crate::scan::Token;

/// A fully rendered check result, ready to emit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// The single status line printed to stdout (and appended to the log).
    pub message: String,
    /// Process exit code under the plugin convention.
    pub exit_code: i32,
    /// Diff tokens to echo to the log file. `None` on a first run, where no
    /// comparison took place.
    pub diff: Option<Vec<Token>>,
}

/// Render an evaluation into the fixed message templates.
///
/// Checked outcomes embed the change count, the config path and a
/// `changes=<n>` perfdata token; the first-run message names the config
/// path only.
pub fn render(evaluation: &Evaluation, config_path: &str) -> CheckReport {
    match evaluation {
        Evaluation::FirstRun => CheckReport {
            message: format!(
                "CHANGES COULD NOT BE CHECKED - State file was not found - might be first run ({config_path})"
            ),
            exit_code: 0,
            diff: None,
        },
        Evaluation::Checked {
            severity,
            delta,
            diff,
        } => {
            let label = match severity {
                Severity::Critical => "CRITICAL CHANGES",
                Severity::Warning => "WARNING CHANGES",
                Severity::Ok => "NO SIGNIFICANT CHANGES",
            };
            CheckReport {
                message: format!(
                    "{label} - {delta} changed files/directories ({config_path}) | changes={delta}"
                ),
                exit_code: severity.exit_code(),
                diff: Some(diff.clone()),
            }
        }
    }
}

/// Writes a [`CheckReport`] to its destinations.
pub struct Reporter {
    log_file: Option<PathBuf>,
}

impl Reporter {
    pub fn new(log_file: Option<PathBuf>) -> Self {
        Self { log_file }
    }

    /// Emit the report: diff block and status line to the log file when one
    /// is configured, status line to stdout. Returns the exit code.
    ///
    /// Log-file failures are logged and swallowed; the log is a side
    /// channel and must never change the check's outcome.
    pub fn emit(&self, report: &CheckReport) -> i32 {
        if let Some(diff) = &report.diff {
            if let Err(err) = self.append(&diff_block(diff)) {
                warn!(error = %err, "could not append diff to log file");
            }
        }
        if let Err(err) = self.append(&report.message) {
            warn!(error = %err, "could not append message to log file");
        }

        println!("{}", report.message);
        debug!(exit_code = report.exit_code, "report emitted");
        report.exit_code
    }

    /// Append one block to the log file, if one was configured.
    ///
    /// The block goes through a single `write_all` on a descriptor opened
    /// in append mode, so concurrent runs interleave at block granularity
    /// rather than mid-line.
    fn append(&self, block: &str) -> Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("opening log file {}", path.display()))?;
        file.write_all(format!("{block}\n").as_bytes())
            .with_context(|| format!("appending to log file {}", path.display()))?;
        Ok(())
    }
}

/// The multi-line diff block: a timestamped header plus one token per line.
fn diff_block(diff: &[Token]) -> String {
    format!(
        "Files differences {}:\n{}",
        Local::now().format("%Y-%m-%d %H:%M:%S"),
        diff.join("\n")
    )
}
