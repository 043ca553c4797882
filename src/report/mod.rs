// src/report/mod.rs

//! Result reporting.
//!
//! Renders an evaluation into one of the fixed message templates, appends
//! the diff and message to an optional log file, prints the status line to
//! stdout, and hands `main` the exit code. stdout carries exactly one line
//! per run; that line plus the exit status is the whole interface the
//! monitoring scheduler sees.

pub mod reporter;

pub use reporter::{render, CheckReport, Reporter};
