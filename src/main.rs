mod cli;
mod core;
mod diff;
mod parsers;
mod publish;
mod rules;

use anyhow::Result;
use clap::Parser;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match &cli.command {
        Commands::Review(args) => {
            cli::commands::review::execute(args).await?;
        }
        Commands::Apply(args) => {
            cli::commands::apply::execute(args).await?;
        }
    }

    Ok(())
}
