// src/config/model.rs

use std::path::PathBuf;

use serde::Deserialize;

/// Watch configuration as read from a TOML file.
///
/// This is a direct mapping of the expected file shape:
///
/// ```toml
/// directories = ["/var/www", "/etc"]
/// excludes = ["/var/www/cache", "/var/www/tmp"]
/// ```
///
/// `directories` is required; `excludes` may be omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct WatchConfig {
    /// Directories whose trees are scanned, in order.
    ///
    /// An empty list is legal and simply scans nothing.
    pub directories: Vec<PathBuf>,

    /// Path prefixes to skip, matched against the full path of every entry
    /// as a **literal string prefix**, not a glob and not per component.
    /// `"/data/tmp"` therefore excludes both `/data/tmp/...` and a sibling
    /// file named `/data/tmpfile`.
    #[serde(default)]
    pub excludes: Vec<String>,
}
