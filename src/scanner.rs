/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Order-status scanner.
//!
//! [`OrderStatusScanner`] walks raw FIX session log lines and counts
//! execution reports by their OrdStatus (tag 39) value.
//!
//! ## Per-line procedure
//!
//! 1. Look for the execution-report marker (`35=8`) inside a bounded window
//!    near the start of the line: `line[offset .. min(2 * offset, len - 1)]`.
//!    An offset of 0 leaves the window unbounded (`line[0 .. len - 1]`).
//! 2. No marker in the window: the line is skipped without tokenizing it.
//! 3. Otherwise split the line into tokens and walk them from the last one
//!    back to the first. The first token starting with the status prefix
//!    (`39=`) wins; earlier ones are never looked at.
//! 4. The winning token is the counter key. Keys outside the requested
//!    categories are dropped silently.
//!
//! The only state carried between lines is the counter table (plus the
//! informational [`ScanStats`]).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, trace};

use crate::counter::CounterTable;
use crate::error::{ConfigError, ScanError};
use crate::status::Category;
use crate::tag;
use crate::tokenizer::TagTokenizer;

/// Scanner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Byte offset where the execution-report marker is expected to begin.
    pub prefix_search_offset: usize,
    /// Field delimiter between `tag=value` tokens.
    pub delimiter: String,
    /// Substring identifying an execution report.
    pub execution_report_marker: String,
    /// Prefix of the order-status token.
    pub order_status_tag_prefix: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            prefix_search_offset: 0,
            delimiter: tag::SOH_STR.to_string(),
            execution_report_marker: tag::execution_report_marker(),
            order_status_tag_prefix: tag::order_status_prefix(),
        }
    }
}

impl ScanConfig {
    /// Reject configurations that could never match anything.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        if self.execution_report_marker.is_empty() {
            return Err(ConfigError::EmptyMarker);
        }
        if self.order_status_tag_prefix.is_empty() {
            return Err(ConfigError::EmptyStatusTagPrefix);
        }
        Ok(())
    }
}

/// What [`OrderStatusScanner::scan_line`] did with a line.
///
/// Informational only; the counter table is the result that matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// No marker inside the prefix window.
    NotExecutionReport,
    /// Execution report without any order-status token.
    NoOrderStatus,
    /// A requested category was incremented.
    Counted,
    /// The status was observed but is not a requested category.
    Unrequested,
}

/// Running totals kept alongside the counter table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines: u64,
    pub execution_reports: u64,
    pub counted: u64,
    pub unrequested: u64,
    pub missing_status: u64,
}

impl ScanStats {
    /// Add `other`'s totals into `self`.
    pub fn merge(&mut self, other: &ScanStats) {
        self.lines += other.lines;
        self.execution_reports += other.execution_reports;
        self.counted += other.counted;
        self.unrequested += other.unrequested;
        self.missing_status += other.missing_status;
    }
}

/// Counts execution reports by OrdStatus.
///
/// Not internally synchronised: `scan_*` take `&mut self`. To scan files in
/// parallel, [`fork`](Self::fork) one scanner per file and
/// [`absorb`](Self::absorb) the results.
#[derive(Debug, Clone)]
pub struct OrderStatusScanner {
    config: ScanConfig,
    tokenizer: TagTokenizer,
    counters: CounterTable,
    stats: ScanStats,
}

impl OrderStatusScanner {
    /// Scanner with the default configuration (SOH delimiter, `35=8`,
    /// `39=`, unbounded window).
    pub fn new<I, C>(categories: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        Self::with_config(ScanConfig::default(), categories)
    }

    /// Scanner with an explicit configuration.
    ///
    /// Each category becomes the key `"<status prefix><code>"`, in the order
    /// given. An empty category list is allowed and yields an empty report.
    pub fn with_config<I, C>(config: ScanConfig, categories: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = C>,
        C: Into<Category>,
    {
        config.validate()?;
        let tokenizer = TagTokenizer::new(&config.delimiter)?;

        let mut keys = Vec::new();
        for category in categories {
            let category = category.into();
            let code = category.code();
            if code.is_empty() || code.contains(config.delimiter.as_str()) {
                return Err(ConfigError::InvalidCategory(code.into_owned()));
            }
            keys.push(format!("{}{}", config.order_status_tag_prefix, code));
        }

        Ok(Self {
            counters: CounterTable::new(keys),
            config,
            tokenizer,
            stats: ScanStats::default(),
        })
    }

    #[inline]
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    #[inline]
    pub fn tokenizer(&self) -> &TagTokenizer {
        &self.tokenizer
    }

    /// Current counts. Valid at any point, including mid-scan.
    #[inline]
    pub fn snapshot(&self) -> &CounterTable {
        &self.counters
    }

    /// Consume the scanner and hand the final counts to the output stage.
    pub fn into_counts(self) -> CounterTable {
        self.counters
    }

    #[inline]
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// The bytes of `line` searched for the execution-report marker.
    ///
    /// `raw_len` is the length of the line as it was read, terminator
    /// included. The window stops one byte short of it, so a stripped
    /// terminator gives that byte back to the content.
    fn marker_window<'a>(&self, line: &'a [u8], raw_len: usize) -> &'a [u8] {
        let start = self.config.prefix_search_offset;
        let last = raw_len.saturating_sub(1);
        let end = if start == 0 {
            last
        } else {
            start.saturating_mul(2).min(last)
        }
        .min(line.len());
        if start >= end {
            return &[];
        }
        &line[start..end]
    }

    /// Whether the marker occurs inside the prefix window of `line`.
    ///
    /// `line` is taken as the whole raw line, so its last byte is outside
    /// the window.
    pub fn is_execution_report(&self, line: &str) -> bool {
        self.marker_in_window(line, line.len())
    }

    fn marker_in_window(&self, line: &str, raw_len: usize) -> bool {
        let marker = self.config.execution_report_marker.as_bytes();
        self.marker_window(line.as_bytes(), raw_len)
            .windows(marker.len())
            .any(|w| w == marker)
    }

    /// The rightmost order-status token of `line`, if any.
    ///
    /// Does not check the marker window.
    pub fn find_status_token<'a>(&self, line: &'a str) -> Option<&'a str> {
        let prefix = self.config.order_status_tag_prefix.as_bytes();
        self.tokenizer
            .tokenize(line)
            .into_iter()
            .rev()
            .find(|token| token.as_bytes().starts_with(prefix))
    }

    /// Process one log line.
    ///
    /// `line` is the raw line; if it still carries its terminator, that
    /// terminator is what falls outside the marker window.
    pub fn scan_line(&mut self, line: &str) -> LineOutcome {
        self.scan_raw_line(line, line.len())
    }

    /// Scan `line` whose terminator has already been removed. `raw_len`
    /// is the length it had before that.
    fn scan_raw_line(&mut self, line: &str, raw_len: usize) -> LineOutcome {
        self.stats.lines += 1;

        if !self.marker_in_window(line, raw_len) {
            return LineOutcome::NotExecutionReport;
        }
        self.stats.execution_reports += 1;

        let Some(token) = self.find_status_token(line) else {
            self.stats.missing_status += 1;
            return LineOutcome::NoOrderStatus;
        };

        if self.counters.increment(token) {
            self.stats.counted += 1;
            LineOutcome::Counted
        } else {
            self.stats.unrequested += 1;
            trace!(status = token, "order status not requested");
            LineOutcome::Unrequested
        }
    }

    /// Process every line of an in-memory sequence, in order.
    pub fn scan_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.scan_line(line.as_ref());
        }
    }

    /// Stream lines from `reader` until EOF. Returns the number of lines.
    ///
    /// Line terminators (`\n`, `\r\n`) are stripped before tokenizing but
    /// still count as one byte of line length for the marker window, as a
    /// text-mode read would see them. Invalid UTF-8 is replaced rather than
    /// treated as an error.
    pub fn scan_reader<R: BufRead>(&mut self, mut reader: R) -> io::Result<u64> {
        let mut buf = Vec::with_capacity(256);
        let mut lines = 0u64;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let content = strip_line_terminator(&buf);
            let terminator = usize::from(content.len() < buf.len());
            let line = String::from_utf8_lossy(content);
            self.scan_raw_line(&line, line.len() + terminator);
            lines += 1;
        }
        Ok(lines)
    }

    /// Open `path` and stream it through [`scan_reader`](Self::scan_reader).
    ///
    /// The file handle is released when this returns, on success or error.
    pub fn scan_file(&mut self, path: &Path) -> Result<u64, ScanError> {
        let file = File::open(path).map_err(|e| ScanError::io(path, e))?;
        let lines = self
            .scan_reader(BufReader::new(file))
            .map_err(|e| ScanError::io(path, e))?;
        debug!(path = %path.display(), lines, "scanned log file");
        Ok(lines)
    }

    /// A scanner with the same configuration and categories and zeroed
    /// counts.
    pub fn fork(&self) -> Self {
        Self {
            config: self.config.clone(),
            tokenizer: self.tokenizer.clone(),
            counters: self.counters.zeroed(),
            stats: ScanStats::default(),
        }
    }

    /// Fold a forked scanner's counts and stats into this one.
    pub fn absorb(&mut self, other: OrderStatusScanner) -> Result<(), ScanError> {
        self.counters.merge(&other.counters)?;
        self.stats.merge(&other.stats);
        Ok(())
    }
}

fn strip_line_terminator(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
