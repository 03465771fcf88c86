//! macl CLI
//!
//! Command-line interface for editing Mosquitto ACL files.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use macl_cli::cli::Cli;
use macl_cli::commands::{handle_command, Context};
use macl_cli::config::MaclConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; output goes to stderr so stdout stays the ACL text
    let default_filter = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = MaclConfig::load(cli.config.as_deref())?;
    let ctx = Context::resolve(&cli, &config);
    tracing::debug!(?ctx, "Resolved settings");

    let stdout = std::io::stdout();
    handle_command(&ctx, cli.command, &mut stdout.lock())?;
    Ok(())
}
