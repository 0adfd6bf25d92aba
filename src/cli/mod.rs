pub mod commands;
pub mod output;
pub mod progress;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "scanfix",
    version,
    about = "Apply mechanical fixes from static-analysis scan reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Clone a repository, fix the reported issues and republish it
    Review(commands::review::ReviewArgs),
    /// Fix a local checkout in place
    Apply(commands::apply::ApplyArgs),
}
