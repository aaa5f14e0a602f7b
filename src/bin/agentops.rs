//! Agentops CLI Binary
//!
//! Entry point for the interactive administration console.

use clap::Parser;

use agentops::logging::init_logging;
use agentops::tooling::cli::{Cli, CliContext};
use std::process;

fn main() {
    let cli = Cli::parse();

    let context = match CliContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error initializing console: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = init_logging(
        &context.config().logging,
        cli.log_level.as_deref(),
        cli.log_format.as_deref(),
    ) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    if let Err(e) = context.execute(&cli.command) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
