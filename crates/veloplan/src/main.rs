use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;
mod config;

use config::Config;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => {
            let config = Config::from_file(path)?;
            config.validate()?;
            config
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Plan(args) => args.run(&config),
        Command::Parse(args) => args.run(),
        Command::Smooth(args) => args.run(&config),
        Command::Docs => {
            println!("{}", veloplan_core::docs_url());
            Ok(())
        }
    }
}

#[derive(Parser)]
#[command(name = "veloplan", about = "Motion-planning helpers")]
struct Cli {
    /// Path to a configuration file (TOML or JSON) supplying defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the optimal cruise speed for a move.
    Plan(cli::plan::PlanArgs),
    /// Parse a path description into motion commands.
    Parse(cli::parse::ParseArgs),
    /// Smooth a sequence of speed samples.
    Smooth(cli::smooth::SmoothArgs),
    /// Print the documentation URL.
    Docs,
}
