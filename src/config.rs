/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Report configuration file (YAML).
//!
//! ```yaml
//! log_dir: ./fix_logs
//! extension: log
//! categories: [FILLED, PARTIALLY_FILLED, CANCELLED]
//! output: ./order_status.csv
//! scan:
//!   prefix_search_offset: 0
//!   delimiter: "\x01"
//! ```
//!
//! Every key is optional. Categories accept a status name or code (see
//! [`OrdStatus`]); unknown strings are kept as raw tag-39 codes.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::scanner::{OrderStatusScanner, ScanConfig};
use crate::status::{Category, OrdStatus};

/// Categories reported when none are configured.
pub const DEFAULT_CATEGORIES: [OrdStatus; 3] = [
    OrdStatus::Filled,
    OrdStatus::PartiallyFilled,
    OrdStatus::Cancelled,
];

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory holding the session log files.
    pub log_dir: PathBuf,
    /// Only scan files with this extension (no leading dot).
    pub extension: Option<String>,
    /// Requested categories, in report order.
    pub categories: Vec<String>,
    /// CSV report path. `None` prints the report only.
    pub output: Option<PathBuf>,
    pub scan: ScanConfig,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("."),
            extension: None,
            categories: DEFAULT_CATEGORIES.iter().map(|s| s.name().to_string()).collect(),
            output: None,
            scan: ScanConfig::default(),
        }
    }
}

impl ReportConfig {
    pub fn from_yaml_str(src: &str) -> Result<Self, ConfigError> {
        let cfg: ReportConfig =
            serde_yaml::from_str(src).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let src = fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("read '{}': {e}", path.display())))?;
        Self::from_yaml_str(&src)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scan.validate()?;
        if let Some(out) = &self.output {
            if out.extension().and_then(|e| e.to_str()) != Some("csv") {
                return Err(ConfigError::OutputExtension(out.clone()));
            }
        }
        Ok(())
    }

    /// Resolved categories, in configured order.
    pub fn categories(&self) -> Vec<Category> {
        self.categories
            .iter()
            .map(|c| Category::parse_lenient(c))
            .collect()
    }

    /// Build the scanner this configuration describes.
    pub fn scanner(&self) -> Result<OrderStatusScanner, ConfigError> {
        self.validate()?;
        OrderStatusScanner::with_config(self.scan.clone(), self.categories())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_uses_defaults() {
        let cfg = ReportConfig::from_yaml_str("{}").unwrap();
        assert_eq!(cfg, ReportConfig::default());
        let s = cfg.scanner().unwrap();
        let keys: Vec<&str> = s.snapshot().iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["39=2", "39=1", "39=4"]);
    }

    #[test]
    fn test_full_document() {
        let src = r#"
log_dir: /var/log/fix
extension: log
categories: [REJECTED, "2", X]
output: out/report.csv
scan:
  prefix_search_offset: 16
  delimiter: "|"
"#;
        let cfg = ReportConfig::from_yaml_str(src).unwrap();
        assert_eq!(cfg.log_dir, PathBuf::from("/var/log/fix"));
        assert_eq!(cfg.extension.as_deref(), Some("log"));
        assert_eq!(cfg.scan.prefix_search_offset, 16);
        assert_eq!(cfg.scan.execution_report_marker, "35=8");
        assert_eq!(
            cfg.categories(),
            vec![
                Category::Named(OrdStatus::Rejected),
                Category::Named(OrdStatus::Filled),
                Category::Raw("X".into()),
            ]
        );
        let keys: Vec<String> = cfg
            .scanner()
            .unwrap()
            .snapshot()
            .iter()
            .map(|(k, _)| k.to_string())
            .collect();
        assert_eq!(keys, vec!["39=8", "39=2", "39=X"]);
    }

    #[test]
    fn test_output_must_be_csv() {
        let err = ReportConfig::from_yaml_str("output: report.xlsx").unwrap_err();
        assert_eq!(err, ConfigError::OutputExtension(PathBuf::from("report.xlsx")));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(matches!(
            ReportConfig::from_yaml_str("colour: blue"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let err = ReportConfig::from_yaml_str("scan:\n  delimiter: \"\"\n").unwrap_err();
        assert_eq!(err, ConfigError::EmptyDelimiter);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.yaml");
        fs::write(&path, "categories: [NEW]\n").unwrap();
        let cfg = ReportConfig::load(&path).unwrap();
        assert_eq!(cfg.categories, vec!["NEW".to_string()]);
        assert!(ReportConfig::load(&dir.path().join("missing.yaml")).is_err());
    }
}
