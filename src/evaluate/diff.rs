// src/evaluate/diff.rs

use std::collections::HashSet;

use tracing::debug;

use crate::evaluate::severity::{Severity, Thresholds};
use crate::scan::Token;

/// Result of comparing the current scan against the prior snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Evaluation {
    /// No snapshot existed, so nothing could be compared. A first-class
    /// outcome with its own message, distinct from a comparison that found
    /// zero changes.
    FirstRun,

    /// A snapshot existed and was compared.
    Checked {
        severity: Severity,
        delta: usize,
        /// Tokens present in the current scan but absent from the snapshot,
        /// in scan order.
        diff: Vec<Token>,
    },
}

/// Compare the current scan against the prior snapshot and grade the result.
///
/// The diff is one-directional: only tokens present now and absent from the
/// snapshot count. An entry that vanished between runs does not itself
/// contribute to the delta; its parent directory's mtime token usually
/// changes instead, which is what surfaces deletions.
pub fn evaluate(
    current: &[Token],
    prior: Option<&[Token]>,
    thresholds: &Thresholds,
) -> Evaluation {
    let Some(prior) = prior else {
        debug!("no prior snapshot; nothing to compare");
        return Evaluation::FirstRun;
    };

    let prior_set: HashSet<&str> = prior.iter().map(String::as_str).collect();
    let diff: Vec<Token> = current
        .iter()
        .filter(|token| !prior_set.contains(token.as_str()))
        .cloned()
        .collect();

    let delta = diff.len();
    let severity = Severity::from_delta(delta, thresholds);
    debug!(delta, ?severity, "evaluated scan against snapshot");

    Evaluation::Checked {
        severity,
        delta,
        diff,
    }
}
