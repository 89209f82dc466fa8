//! # Jira Link CLI Entry Point
//!
//! The entry point for the jira-link binary: registers the built-in actions
//! and dispatches pipeline invocations to them.

use clap::Parser;
use jira_link_core::output::print_error;
use tracing::debug;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

mod actions;
mod cli;

fn main() {
  // Parse CLI arguments using the derive-based implementation
  let cmd = cli::Cli::parse();

  // Set up tracing based on verbosity level
  let level = match cmd.verbose {
    0 => tracing::Level::WARN,  // Default: warnings and errors
    1 => tracing::Level::INFO,  // -v: info, warnings, and errors
    2 => tracing::Level::DEBUG, // -vv: debug, info, warnings, and errors
    _ => tracing::Level::TRACE, // -vvv or more: trace and everything else
  };

  tracing_subscriber::registry()
    .with(fmt::layer())
    .with(EnvFilter::from_default_env().add_directive(level.into()))
    .init();

  debug!("Tracing initialized with level: {}", level);

  if let Err(error) = cli::handle_cli(cmd) {
    print_error(&format!("{error:#}"));
    std::process::exit(1);
  }
}
