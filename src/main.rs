/*
    ALICE-FIX-Scan
    Copyright (C) 2026 Moroya Sakamoto
*/

use std::io;
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use alice_fix_scan::{logdir, report, run, tag, ReportConfig};

#[derive(Parser)]
#[command(name = "fix-ordstatus")]
#[command(about = "Count FIX execution reports by order status (tag 39)", long_about = None)]
struct Cli {
    /// YAML report configuration; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory holding the FIX session logs
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Only scan files with this extension (e.g. log)
    #[arg(long)]
    ext: Option<String>,

    /// Category to count, by name (FILLED) or code (2); repeatable
    #[arg(long = "category")]
    categories: Vec<String>,

    /// Byte offset where 35=8 is expected to begin (0 searches the whole line)
    #[arg(long)]
    offset: Option<usize>,

    /// Field delimiter: SOH or a literal string such as "|"
    #[arg(long)]
    delimiter: Option<String>,

    /// Write the report as CSV to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Scan files in parallel
    #[arg(long, default_value_t = false)]
    parallel: bool,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let mut cfg = match &cli.config {
        Some(path) => ReportConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ReportConfig::default(),
    };
    let parallel = cli.parallel;
    apply_overrides(&mut cfg, cli);

    let mut scanner = cfg.scanner().context("invalid report configuration")?;
    let files = logdir::collect_log_files(&cfg.log_dir, cfg.extension.as_deref())
        .context("listing log files")?;
    info!(dir = %cfg.log_dir.display(), files = files.len(), "scanning FIX logs");

    if parallel {
        run::scan_files_parallel(&mut scanner, &files)?;
    } else {
        run::scan_files(&mut scanner, &files, &AtomicBool::new(false))?;
    }

    let stats = scanner.stats();
    info!(
        execution_reports = stats.execution_reports,
        counted = stats.counted,
        unrequested = stats.unrequested,
        missing_status = stats.missing_status,
        "order status totals"
    );

    let counts = scanner.into_counts();
    report::write_text(&counts, io::stdout().lock())?;

    if let Some(out) = &cfg.output {
        report::save_csv(&counts, out)
            .with_context(|| format!("writing report {}", out.display()))?;
        println!("Created: {}", out.display());
    }

    Ok(())
}

/// Command-line values take precedence over the config file.
fn apply_overrides(cfg: &mut ReportConfig, cli: Cli) {
    if let Some(dir) = cli.dir {
        cfg.log_dir = dir;
    }
    if cli.ext.is_some() {
        cfg.extension = cli.ext;
    }
    if !cli.categories.is_empty() {
        cfg.categories = cli.categories;
    }
    if let Some(offset) = cli.offset {
        cfg.scan.prefix_search_offset = offset;
    }
    if let Some(delimiter) = cli.delimiter {
        cfg.scan.delimiter = parse_delimiter(&delimiter);
    }
    if cli.output.is_some() {
        cfg.output = cli.output;
    }
}

fn parse_delimiter(raw: &str) -> String {
    match raw {
        "SOH" | "soh" | "\\x01" | "^A" => tag::SOH_STR.to_string(),
        other => other.to_string(),
    }
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(io::stderr)
        .init();
}
