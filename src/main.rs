//! Ghanfoot CLI - Timber Log Volume Calculator
//!
//! Command-line interface for the ghanfoot library.

use anyhow::Context;
use clap::Parser;
use env_logger::Env;
use log::info;

use ghanfoot::cli::{commands, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG still wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    info!("Ghanfoot Calculator v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Some(cmd) => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            commands::run(cmd, &mut out).context("command failed")?;
            Ok(())
        }
        None => {
            println!("Ghanfoot Calculator v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
            Ok(())
        }
    }
}
