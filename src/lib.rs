// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod evaluate;
pub mod logging;
pub mod report;
pub mod scan;
pub mod state;

use std::path::Path;

use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_from_path;
use crate::errors::Result;
use crate::evaluate::{evaluate, Thresholds};
use crate::report::{render, CheckReport};
use crate::state::SnapshotStore;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - config loading
/// - directory scan
/// - snapshot read / compare / refresh
/// - report rendering
///
/// The returned [`CheckReport`] carries the status line and exit code;
/// emitting them is left to the caller so this stays testable without
/// capturing stdout.
pub fn run(args: &CliArgs) -> Result<CheckReport> {
    let cfg = load_from_path(Path::new(&args.config))?;
    let current = scan::scan(&cfg)?;

    let store = SnapshotStore::for_config(&args.state_dir, &args.config);
    let prior = store.read()?;

    let thresholds = Thresholds {
        warning: args.warning,
        critical: args.critical,
    };
    let evaluation = evaluate(&current, prior.as_deref(), &thresholds);

    // A stale or unwritable state file degrades the next run's answer but
    // must not fail this one.
    match store.write(&current) {
        Ok(outcome) => debug!(?outcome, state_file = ?store.path(), "state refresh"),
        Err(err) => {
            warn!(error = %err, state_file = ?store.path(), "failed to update state file; continuing");
        }
    }

    info!(
        config = %args.config,
        entries = current.len(),
        "check complete"
    );
    Ok(render(&evaluation, &args.config))
}
