// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! The short flags (`-i`, `-c`, `-w`, `-y`, `-l`) are the external contract
//! this check is invoked with from monitoring schedulers; the long forms and
//! `--log-level` are conveniences on top.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use std::fs;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};

/// Command-line arguments for `check_dir_changes`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "check_dir_changes",
    version,
    about = "Report directory-tree changes since the previous run.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the configuration file listing directories to check (TOML).
    ///
    /// Kept as the literal string given on the command line: the state file
    /// name is derived from it, so `-i cfg.toml` and `-i ./cfg.toml` use
    /// different state files.
    #[arg(short = 'i', long = "config", value_name = "CFGFILE")]
    pub config: String,

    /// Critical change threshold (number of new/changed entries).
    #[arg(short = 'c', long = "critical", value_name = "THRESHOLD")]
    pub critical: usize,

    /// Warning change threshold (number of new/changed entries).
    #[arg(short = 'w', long = "warning", value_name = "THRESHOLD")]
    pub warning: usize,

    /// Directory to use for state files.
    ///
    /// Must already exist and be writable.
    #[arg(
        short = 'y',
        long = "state-dir",
        value_name = "DIR",
        default_value = "/tmp",
        value_parser = writable_dir
    )]
    pub state_dir: PathBuf,

    /// Path to a log file; the status line and diff are appended per run.
    #[arg(short = 'l', long = "log-file", value_name = "LOGFILE")]
    pub log_file: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CHECK_DIR_CHANGES_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Parse the command line, enforcing the plugin convention for failures.
///
/// clap normally prints argument errors to stderr and exits 2, but 2 means
/// CRITICAL to the monitoring caller and only stdout is collected. So:
/// usage problems render (with usage text) to stdout and exit 1;
/// `--help`/`--version` render to stdout and exit 0.
pub fn parse_or_exit() -> CliArgs {
    match CliArgs::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let code = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            print!("{}", err.render());
            std::process::exit(code);
        }
    }
}

/// Value parser for `-y`: the state directory must exist and accept writes,
/// otherwise the run is refused up front as a usage error.
///
/// Writability is established by creating an unnamed scratch file in the
/// directory; permission bits alone do not reflect effective access (root
/// writes into `0555`, nobody else writes into another owner's `0755`).
fn writable_dir(s: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(s);
    let usable = fs::metadata(&path)
        .map(|meta| meta.is_dir())
        .unwrap_or(false)
        && tempfile::tempfile_in(&path).is_ok();

    if usable {
        Ok(path)
    } else {
        Err(format!("{s} is not a writable directory"))
    }
}
