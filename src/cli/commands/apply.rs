use anyhow::{ensure, Context, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

use crate::cli::output::OutputFormatter;
use crate::core::engine::{FixEngine, MissingFilePolicy};
use crate::parsers::scan::parse_scan_report;
use crate::rules::default_registry;

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Path to the checkout to fix (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Path to the scan report (JSON findings array or plain text)
    #[arg(long)]
    pub report: PathBuf,

    /// Print what would change without modifying files
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,

    /// Report unresolvable paths as skipped instead of fabricating a placeholder
    #[arg(long)]
    pub keep_missing: bool,
}

pub async fn execute(args: &ApplyArgs) -> Result<()> {
    ensure!(
        args.path.is_dir(),
        "checkout path {} is not a directory",
        args.path.display()
    );
    let report_text = std::fs::read_to_string(&args.report)
        .with_context(|| format!("reading scan report {}", args.report.display()))?;
    let findings = parse_scan_report(&report_text);

    if findings.is_empty() {
        println!("{}", "No findings in scan report.".green());
        return Ok(());
    }

    let policy = if args.keep_missing {
        MissingFilePolicy::Skip
    } else {
        MissingFilePolicy::Synthesize
    };
    let mut engine = FixEngine::new(default_registry()).with_missing_policy(policy);
    if args.dry_run {
        engine = engine.dry_run();
    }
    let change_report = engine.process(&args.path, &findings)?;

    if args.dry_run {
        println!("{}", "Dry run: no files were modified.".cyan());
    }
    let formatter = OutputFormatter::new(&args.format);
    formatter.display(&change_report, None);

    Ok(())
}
