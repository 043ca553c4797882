// src/config/mod.rs

//! Configuration loading for check_dir_changes.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config file from disk (`loader.rs`).
//!
//! The configuration is a declarative data file, never evaluated code; a
//! missing or unparseable file is a configuration error (exit code 2).

pub mod loader;
pub mod model;

pub use loader::load_from_path;
pub use model::WatchConfig;
