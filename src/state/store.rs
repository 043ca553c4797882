// src/state/store.rs

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::scan::Token;

/// Prefix of every snapshot file name; the suffix is derived from the
/// configuration path so each config gets its own snapshot.
pub const STATE_FILE_PREFIX: &str = "nagios_check_dir_changes_state_";

/// Minimum age an existing snapshot must reach before a write replaces it.
/// Write attempts inside this window are skipped.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(900);

/// Outcome of a snapshot write attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The snapshot file was (re)written with the current scan.
    Written,
    /// A recent snapshot already exists; nothing was touched.
    Throttled,
}

/// Persistent snapshot of the previous run's scan, one token per line.
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Derive the store location for a configuration path.
    ///
    /// The file name is the fixed prefix plus the first 8 hex chars of the
    /// MD5 of the config path *string as given on the command line*, not
    /// canonicalized, so the same spelling always maps to the same file.
    /// An 8-character collision between two different config paths is an
    /// accepted risk.
    pub fn for_config(state_dir: &Path, config_path: &str) -> Self {
        let digest = format!("{:x}", md5::compute(config_path.as_bytes()));
        let file_name = format!("{STATE_FILE_PREFIX}{}", &digest[..8]);

        Self {
            path: state_dir.join(file_name),
        }
    }

    /// Location of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the prior snapshot.
    ///
    /// `None` means the file does not exist (first run). That is distinct
    /// from `Some` of an empty list, which means the prior run observed
    /// zero files.
    pub fn read(&self) -> Result<Option<Vec<Token>>> {
        if !self.path.exists() {
            debug!(path = ?self.path, "no snapshot file; treating as first run");
            return Ok(None);
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("reading snapshot file {}", self.path.display()))?;

        let tokens: Vec<Token> = contents.lines().map(str::to_string).collect();
        debug!(path = ?self.path, tokens = tokens.len(), "snapshot loaded");
        Ok(Some(tokens))
    }

    /// Persist the current scan, unless a recent snapshot already exists.
    ///
    /// Failure is reported, not interpreted: whether a failed write matters
    /// is the caller's call.
    pub fn write(&self, tokens: &[Token]) -> Result<WriteOutcome> {
        let last_write = fs::metadata(&self.path).and_then(|m| m.modified()).ok();

        if !due_for_refresh(last_write, SystemTime::now()) {
            debug!(path = ?self.path, "snapshot is recent; skipping write");
            return Ok(WriteOutcome::Throttled);
        }

        fs::write(&self.path, tokens.join("\n"))
            .with_context(|| format!("writing snapshot file {}", self.path.display()))?;

        info!(path = ?self.path, tokens = tokens.len(), "snapshot updated");
        Ok(WriteOutcome::Written)
    }
}

/// Decide whether an existing snapshot (if any) is old enough to replace.
///
/// A missing file is always due. A file with an mtime in the future counts
/// as recent; an age of exactly `REFRESH_INTERVAL` is due.
pub fn due_for_refresh(last_write: Option<SystemTime>, now: SystemTime) -> bool {
    match last_write {
        None => true,
        Some(written_at) => now
            .duration_since(written_at)
            .is_ok_and(|age| age >= REFRESH_INTERVAL),
    }
}
