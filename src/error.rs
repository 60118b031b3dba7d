/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Error types.
//!
//! Two families, split by when they can happen:
//!
//! - [`ConfigError`]: raised while building a scanner or loading a report
//!   configuration. Nothing is scanned once one of these is returned.
//! - [`ScanError`]: raised while reading log files.
//!
//! Malformed lines, non-execution-report messages and unrequested statuses
//! are normal traffic and never produce an error.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Construction-time configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The field delimiter is the empty string.
    #[error("field delimiter must not be empty")]
    EmptyDelimiter,
    /// The execution-report marker is the empty string.
    #[error("execution report marker must not be empty")]
    EmptyMarker,
    /// The order-status tag prefix is the empty string.
    #[error("order status tag prefix must not be empty")]
    EmptyStatusTagPrefix,
    /// A category code is empty or contains the field delimiter.
    #[error("invalid category code: {0:?}")]
    InvalidCategory(String),
    /// The report output path does not end in `.csv`.
    #[error("output file must end with \".csv\": {}", .0.display())]
    OutputExtension(PathBuf),
    /// The configuration document could not be read or parsed.
    #[error("config parse error: {0}")]
    Parse(String),
}

/// Errors raised while scanning log files.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A log file (or the log directory) could not be opened or read.
    #[error("i/o error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The run was cancelled between two files.
    #[error("scan cancelled")]
    Cancelled,
    /// Two counter tables with different key sets were merged.
    #[error("counter tables have different category sets")]
    KeySetMismatch,
}

impl ScanError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScanError::Io {
            path: path.into(),
            source,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
