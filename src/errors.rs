// src/errors.rs

//! Crate-wide error type and its mapping onto monitoring-plugin exit codes.
//!
//! The caller of a monitoring check reads nothing but stdout and the exit
//! status, so every failure class here must land on the right code:
//! configuration faults are 2 (the CRITICAL slot), everything else is
//! 3 (UNKNOWN).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    // `.message()` keeps this to one line; the rendered snippet the Display
    // impl would add has no place in a status line.
    #[error("Configuration error: {}", .0.message())]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CheckError {
    /// Process exit code for this error under the plugin convention
    /// (0/1/2/3 = ok/warning/critical/unknown).
    ///
    /// Usage errors never reach this type; `cli::parse_or_exit` exits 1
    /// before a `CheckError` can exist.
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckError::Config(_) | CheckError::Toml(_) => 2,
            CheckError::Other(_) => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;
