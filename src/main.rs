mod commands;
mod config;
mod render;
mod source;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::trim::TrimArgs;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};

#[derive(Parser)]
#[command(name = "icstrim")]
#[command(about = "Keep the events of a calendar feed that fall inside a date window")]
struct Cli {
    /// Print debug logging to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this config file instead of ~/.config/icstrim/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download (or read) a feed, filter its events and write the result
    Trim {
        /// Feed URL to download
        #[arg(short, long, conflicts_with = "input")]
        url: Option<String>,

        /// Read the feed from a local file instead of downloading it
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Keep events starting up to this many months (30 days) ago
        #[arg(long)]
        months_before: Option<u32>,

        /// Keep events starting up to this many years (365 days) ahead
        #[arg(long)]
        years_after: Option<u32>,

        /// Window start (YYYY-MM-DD), overrides --months-before
        #[arg(long)]
        from: Option<String>,

        /// Window end (YYYY-MM-DD), overrides --years-after
        #[arg(long)]
        to: Option<String>,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write a commented default config file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    TermLogger::init(
        level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let config_path = match cli.config {
        Some(path) => path,
        None => config::config_path()?,
    };
    let config = config::load_config(&config_path)?;

    match cli.command {
        Commands::Trim {
            url,
            input,
            output,
            months_before,
            years_after,
            from,
            to,
        } => {
            let args = TrimArgs {
                url,
                input,
                output,
                months_before,
                years_after,
                from,
                to,
            };
            commands::trim::run(config, args).await
        }
        Commands::Config { init } => commands::config::run(&config_path, &config, init),
    }
}
