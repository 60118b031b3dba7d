/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! # ALICE-FIX-Scan
//!
//! FIX session log scanner: counts execution reports (35=8) by OrdStatus
//! (tag 39) for a caller-chosen set of status categories.
//!
//! This is a lenient scanner, not a FIX engine. It does not validate
//! checksums, body lengths or session state; it finds one field per line.
//!
//! ## Modules
//!
//! - [`tag`]: FIX tag constants and `tag=value` helpers
//! - [`status`]: [`OrdStatus`] codes and [`Category`] inputs
//! - [`tokenizer`]: Delimiter-based `tag=value` tokenizer
//! - [`counter`]: Ordered, fixed-key [`CounterTable`]
//! - [`scanner`]: [`OrderStatusScanner`], the per-line scan procedure
//! - [`logdir`]: Log directory listing
//! - [`run`]: Sequential / parallel multi-file driver
//! - [`report`]: CSV and plain-text report output
//! - [`config`]: YAML report configuration
//! - [`error`]: [`ConfigError`] and [`ScanError`]
//!
//! ## Example
//!
//! ```rust
//! use alice_fix_scan::{OrderStatusScanner, OrdStatus, ScanConfig};
//!
//! let config = ScanConfig { delimiter: "|".into(), ..ScanConfig::default() };
//! let mut scanner =
//!     OrderStatusScanner::with_config(config, [OrdStatus::Filled, OrdStatus::Cancelled]).unwrap();
//!
//! scanner.scan_line("35=8|11=ORD1|39=2|55=AAPL|");
//! scanner.scan_line("35=8|39=9|55=AAPL|"); // SUSPENDED: not requested
//!
//! assert_eq!(scanner.snapshot().get("39=2"), Some(1));
//! assert_eq!(scanner.snapshot().get("39=4"), Some(0));
//! ```

pub mod config;
pub mod counter;
pub mod error;
pub mod logdir;
pub mod report;
pub mod run;
pub mod scanner;
pub mod status;
pub mod tag;
pub mod tokenizer;

// Re-export the most commonly used types at the crate root.
pub use config::ReportConfig;
pub use counter::CounterTable;
pub use error::{ConfigError, ScanError};
pub use scanner::{LineOutcome, OrderStatusScanner, ScanConfig, ScanStats};
pub use status::{Category, OrdStatus};
pub use tokenizer::TagTokenizer;

/// ALICE-FIX-Scan crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
