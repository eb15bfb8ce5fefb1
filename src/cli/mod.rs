//! Command-line interface for AutoGuard
//!
//! This module provides the main CLI structure and command handling.
//! It uses clap for argument parsing; a bare invocation runs the scan.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

pub use output::Output;

/// AutoGuard - Pre-deployment secret scanning
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan the current directory for secrets (default)
    Scan,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose);

        let output = Output::new(self.verbose > 0);

        match self.command {
            Some(Commands::Scan) | None => commands::scan::execute(&output).await,
        }
    }
}

/// Set up logging based on verbosity
///
/// `RUST_LOG` wins when set; otherwise the `-v` count picks the level.
/// Log events go to stderr so the scan report on stdout stays parseable.
fn setup_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
