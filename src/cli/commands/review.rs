use anyhow::{Context, Result};
use clap::Args;
use std::path::{Path, PathBuf};

use crate::cli::output::OutputFormatter;
use crate::cli::progress::FixProgress;
use crate::core::config::Config;
use crate::core::engine::{FixEngine, MissingFilePolicy};
use crate::core::report::ChangeReport;
use crate::core::workspace::Workspace;
use crate::parsers::scan::parse_scan_report;
use crate::publish::{GithubPublisher, Publish};
use crate::rules::default_registry;

#[derive(Args, Debug)]
pub struct ReviewArgs {
    /// URL of the repository to fix
    pub repo_url: String,

    /// Path to the scan report (JSON findings array or plain text)
    #[arg(long)]
    pub report: PathBuf,

    /// Output format
    #[arg(long, default_value = "table", value_parser = ["table", "json"])]
    pub format: String,

    /// Report unresolvable paths as skipped instead of fabricating a placeholder
    #[arg(long)]
    pub keep_missing: bool,
}

pub async fn execute(args: &ReviewArgs) -> Result<()> {
    let report_text = std::fs::read_to_string(&args.report)
        .with_context(|| format!("reading scan report {}", args.report.display()))?;
    let findings = parse_scan_report(&report_text);

    let formatter = OutputFormatter::new(&args.format);
    if findings.is_empty() {
        // Nothing to fix: the original repository is returned unchanged.
        formatter.display(&ChangeReport::default(), Some(&args.repo_url));
        return Ok(());
    }

    let progress = FixProgress::new();
    progress.set_stage("cloning repository");
    let workspace = Workspace::clone_repo(&args.repo_url)?;

    progress.set_stage("applying fixes");
    let policy = if args.keep_missing {
        MissingFilePolicy::Skip
    } else {
        MissingFilePolicy::Synthesize
    };
    let engine = FixEngine::new(default_registry()).with_missing_policy(policy);
    let change_report = engine.process(workspace.root(), &findings)?;

    progress.set_stage("publishing fixed repository");
    let config = Config::load(Path::new("."));
    let publisher = GithubPublisher::new(config.credentials());
    let new_url = publisher.publish(workspace.root(), &args.repo_url).await?;
    progress.finish();

    formatter.display(&change_report, Some(&new_url));

    // Checkout released on the success path; Drop covers the error paths.
    workspace.close()?;
    Ok(())
}
