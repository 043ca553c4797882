// src/scan/scanner.rs

use std::fs;
use std::path::Path;
use std::time::UNIX_EPOCH;

use anyhow::{bail, Context, Result};
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::config::WatchConfig;

/// The atomic comparable unit: `<path>|<mtime-secs>` as one opaque string.
///
/// Tokens are only ever compared for exact equality and never parsed back
/// (paths may legally contain `|`), so the alias is the honest type.
pub type Token = String;

/// Walk every configured directory and produce the current token list.
///
/// Entries appear in walk order; comparison downstream is set-based, so the
/// order carries no meaning beyond keeping logged diffs readable.
pub fn scan(config: &WatchConfig) -> Result<Vec<Token>> {
    let mut records = Vec::new();

    for dir in &config.directories {
        collect_dir(dir, &config.excludes, &mut records)
            .with_context(|| format!("walking directory {}", dir.display()))?;
    }

    debug!(entries = records.len(), "scan complete");
    Ok(records)
}

/// Recursively collect tokens for everything beneath `root`.
///
/// - `root` must be an existing directory; a root that stats as anything
///   else aborts the run instead of yielding an empty scan. A symlink to a
///   directory counts: the root link is followed even though links below
///   are not.
/// - The root itself is not recorded (`min_depth(1)`), but subdirectories
///   are: a directory's mtime changes when entries are created or removed
///   inside it, which is how a one-directional diff still notices deletions.
/// - An entry whose full path starts with any exclude prefix is skipped; if
///   it is a directory, its subtree is pruned from the walk entirely.
/// - Any unreadable directory that would be scanned aborts the run; a
///   subtree is never silently skipped.
fn collect_dir(root: &Path, excludes: &[String], out: &mut Vec<Token>) -> Result<()> {
    let root_meta = fs::metadata(root)
        .with_context(|| format!("reading metadata for {}", root.display()))?;
    if !root_meta.is_dir() {
        bail!("not a directory");
    }

    let walker = WalkDir::new(root)
        .follow_links(false)
        .min_depth(1)
        .into_iter()
        .filter_entry(|entry| !is_excluded(entry.path(), excludes));

    for entry in walker {
        let entry = entry?;
        let metadata = entry
            .metadata()
            .with_context(|| format!("reading metadata for {}", entry.path().display()))?;
        let mtime = modified_seconds(&metadata)
            .with_context(|| format!("reading mtime for {}", entry.path().display()))?;

        trace!(path = %entry.path().display(), mtime, "recording entry");
        out.push(token(entry.path(), mtime));
    }

    Ok(())
}

/// True if `path` starts with any configured exclude prefix.
///
/// Prefixes are literal strings, compared with `starts_with` against the
/// full path; `any` short-circuits, so the first matching prefix settles
/// the entry.
pub fn is_excluded(path: &Path, excludes: &[String]) -> bool {
    let path = path.to_string_lossy();
    excludes
        .iter()
        .any(|prefix| path.starts_with(prefix.as_str()))
}

/// Build the token for one entry.
pub fn token(path: &Path, mtime_secs: i64) -> Token {
    format!("{}|{}", path.display(), mtime_secs)
}

/// Modification time as signed seconds since the Unix epoch.
///
/// Signed so a pre-epoch mtime becomes a negative number instead of an
/// error; resolution is whole seconds, matching what the snapshot format
/// can express.
fn modified_seconds(metadata: &fs::Metadata) -> Result<i64> {
    let modified = metadata.modified()?;
    let secs = match modified.duration_since(UNIX_EPOCH) {
        Ok(age) => age.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    };
    Ok(secs)
}
