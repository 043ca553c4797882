// src/state/mod.rs

//! Snapshot persistence.
//!
//! The previous run's scan lives in a flat text file, one token per line,
//! named after a hash of the configuration path. Reads distinguish "no
//! snapshot yet" from "snapshot with zero entries"; writes are throttled so
//! frequent polling does not rewrite the file on every run.

pub mod store;

pub use store::{due_for_refresh, SnapshotStore, WriteOutcome, REFRESH_INTERVAL, STATE_FILE_PREFIX};
