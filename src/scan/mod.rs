// src/scan/mod.rs

//! Filesystem scanning.
//!
//! This module is responsible for:
//! - Walking every configured directory tree exactly once.
//! - Refusing configured roots that are not directories.
//! - Skipping entries whose full path matches an exclude prefix.
//! - Producing one `path|mtime` token per surviving entry.
//!
//! It does **not** know about snapshots or thresholds; it only turns the
//! current filesystem state into a list of comparable tokens.

pub mod scanner;

pub use scanner::{is_excluded, scan, token, Token};
