mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

use audiopub::config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    let scan = config.scan_with(&cli.ignore_extensions);

    match cli.command {
        Commands::Parse { dir, json } => {
            commands::parse::run(&dir, &scan, json, cli.quiet)?;
        }
        Commands::Tracks { dir } => {
            commands::tracks::run(&dir, &scan)?;
        }
        Commands::Cover { dir, output } => {
            commands::cover::run(&dir, &scan, &output, cli.quiet)?;
        }
    }

    Ok(())
}
