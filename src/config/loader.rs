// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::WatchConfig;
use crate::errors::{CheckError, Result};

/// Load a watch configuration from the given path.
///
/// Both a missing/unreadable file and unparseable TOML are configuration
/// errors (exit code 2), reported independently of the thresholds.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<WatchConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(CheckError::Config(format!(
            "file not found or not readable: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|err| {
        CheckError::Config(format!(
            "file not found or not readable: {} ({err})",
            path.display()
        ))
    })?;

    let config: WatchConfig = toml::from_str(&contents)?;

    debug!(
        directories = config.directories.len(),
        excludes = config.excludes.len(),
        "configuration loaded"
    );

    Ok(config)
}
