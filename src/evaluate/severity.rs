// src/evaluate/severity.rs

/// Alert severity, ordered by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl Severity {
    /// Exit code under the monitoring-plugin convention
    /// (0/1/2 = ok/warning/critical).
    pub fn exit_code(self) -> i32 {
        match self {
            Severity::Ok => 0,
            Severity::Warning => 1,
            Severity::Critical => 2,
        }
    }

    /// Map a change count onto a severity.
    ///
    /// The critical threshold is tested first and both comparisons are
    /// independent `>=` checks. Consequences worth knowing: with
    /// `critical = 0` every delta (including zero) is critical, and when
    /// the thresholds overlap, critical wins.
    pub fn from_delta(delta: usize, thresholds: &Thresholds) -> Self {
        if delta >= thresholds.critical {
            Severity::Critical
        } else if delta >= thresholds.warning {
            Severity::Warning
        } else {
            Severity::Ok
        }
    }
}

/// Change-count thresholds from the command line.
///
/// `critical >= warning` is expected but not enforced; the fixed
/// evaluation order alone decides ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: usize,
    pub critical: usize,
}
