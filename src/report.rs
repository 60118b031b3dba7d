/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

//! Report output: the counter table as a two-column `Category` / `Count`
//! table.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::counter::CounterTable;

pub const HEADER: [&str; 2] = ["Category", "Count"];

/// Write `table` as CSV: header row, then one row per category in
/// construction order.
pub fn write_csv<W: Write>(table: &CounterTable, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);
    wtr.write_record(HEADER)?;
    for (category, count) in table {
        wtr.write_record([category, count.to_string().as_str()])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create (or truncate) `path` and write `table` to it as CSV.
pub fn save_csv(table: &CounterTable, path: &Path) -> Result<(), csv::Error> {
    let file = File::create(path)?;
    write_csv(table, file)
}

/// Aligned plain-text table for terminals.
pub fn write_text<W: Write>(table: &CounterTable, mut writer: W) -> io::Result<()> {
    let width = table
        .iter()
        .map(|(k, _)| k.len())
        .chain(std::iter::once(HEADER[0].len()))
        .max()
        .unwrap_or(0);
    writeln!(writer, "{:<width$}  {}", HEADER[0], HEADER[1])?;
    for (category, count) in table {
        writeln!(writer, "{category:<width$}  {count}")?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
