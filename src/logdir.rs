/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Log directory listing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScanError;

/// Regular files directly inside `dir`, sorted by path.
///
/// Not recursive. With `extension` set (without the leading dot), only
/// files with that extension are returned.
pub fn collect_log_files(dir: &Path, extension: Option<&str>) -> Result<Vec<PathBuf>, ScanError> {
    let entries = fs::read_dir(dir).map_err(|e| ScanError::io(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ScanError::io(dir, e))?;
        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| ScanError::io(&path, e))?;
        if !file_type.is_file() {
            continue;
        }
        if let Some(ext) = extension {
            if path.extension().and_then(|e| e.to_str()) != Some(ext) {
                continue;
            }
        }
        files.push(path);
    }
    files.sort();
    Ok(files)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lists_files_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.log"), "").unwrap();
        fs::write(dir.path().join("a.log"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();
        fs::create_dir(dir.path().join("sub.log")).unwrap();

        let all = collect_log_files(dir.path(), None).unwrap();
        let names: Vec<_> = all
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap())
            .collect();
        assert_eq!(names, vec!["a.log", "b.log", "notes.txt"]);

        let logs = collect_log_files(dir.path(), Some("log")).unwrap();
        assert_eq!(logs.len(), 2);
    }

    #[test]
    fn test_missing_dir_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(matches!(
            collect_log_files(&missing, None),
            Err(ScanError::Io { .. })
        ));
    }
}
