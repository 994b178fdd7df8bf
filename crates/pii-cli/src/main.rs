mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use pii_config::Config;

fn main() -> Result<()> {
    // Logs go to stderr, results to stdout
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        cli::Commands::Redact(args) => commands::redact::handle(args, &config),
        cli::Commands::Restore(args) => commands::restore::handle(args),
    }
}
