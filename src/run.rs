/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Multi-file scan driver.
//!
//! Files are the unit of work: cancellation is only checked between files,
//! and the first file that cannot be opened or read aborts the whole run.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::error::ScanError;
use crate::scanner::OrderStatusScanner;

/// Totals for one run over a set of files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub files: usize,
    pub lines: u64,
}

/// Scan `paths` one after another into `scanner`.
///
/// `cancel` is polled before each file; once set, the run stops with
/// [`ScanError::Cancelled`] and counts from completed files stay in
/// `scanner`.
pub fn scan_files(
    scanner: &mut OrderStatusScanner,
    paths: &[PathBuf],
    cancel: &AtomicBool,
) -> Result<RunSummary, ScanError> {
    let mut summary = RunSummary::default();
    for path in paths {
        if cancel.load(Ordering::Relaxed) {
            warn!(done = summary.files, total = paths.len(), "scan cancelled");
            return Err(ScanError::Cancelled);
        }
        summary.lines += scanner.scan_file(path)?;
        summary.files += 1;
    }
    info!(files = summary.files, lines = summary.lines, "scan complete");
    Ok(summary)
}

/// Scan `paths` in parallel, one forked scanner per file, and merge the
/// per-file counts into `scanner` once every file has finished.
///
/// If any file fails, `scanner` is left untouched.
pub fn scan_files_parallel(
    scanner: &mut OrderStatusScanner,
    paths: &[PathBuf],
) -> Result<RunSummary, ScanError> {
    if paths.len() <= 1 {
        return scan_files(scanner, paths, &AtomicBool::new(false));
    }

    let partials = paths
        .par_iter()
        .map(|path| -> Result<(OrderStatusScanner, u64), ScanError> {
            let mut part = scanner.fork();
            let lines = part.scan_file(path)?;
            Ok((part, lines))
        })
        .collect::<Result<Vec<_>, ScanError>>()?;

    let mut summary = RunSummary::default();
    for (part, lines) in partials {
        scanner.absorb(part)?;
        summary.files += 1;
        summary.lines += lines;
    }
    info!(files = summary.files, lines = summary.lines, "parallel scan complete");
    Ok(summary)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
