// src/evaluate/mod.rs

//! Change evaluation.
//!
//! Pure set arithmetic between the current scan and the prior snapshot:
//! no filesystem access, no formatting, no exiting. The reporter decides
//! what an [`Evaluation`] looks like to the outside world.

pub mod diff;
pub mod severity;

pub use diff::{evaluate, Evaluation};
pub use severity::{Severity, Thresholds};
