//! # Command Line Interface
//!
//! Defines the CLI surface for the plugin binary: `run` executes the link
//! action, `check` verifies connectivity and credentials, and `actions`
//! lists everything the registry exposes.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use jira_link_core::output::print_success;
use jira_link_core::{ActionRegistry, resolve_params};

use crate::actions;
use crate::actions::{CheckConnectionAction, LinkIssuesAction};

/// Top-level CLI command for the jira-link plugin
#[derive(Parser)]
#[command(name = "jira-link")]
#[command(about = "Link two Jira tickets together from your automation pipeline")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the jira-link binary
#[derive(Subcommand)]
pub enum Commands {
  /// Create a link between two Jira issues
  #[command(long_about = "Create a typed link between two Jira issues.\n\n\
                         Every option falls back to its environment variable when omitted,\n\
                         so pipelines can configure the action entirely through the environment.")]
  Run(RunArgs),

  /// Verify the Jira site and credentials are reachable
  Check(CheckArgs),

  /// List the registered actions and their options
  Actions,
}

/// Options for the `run` subcommand
#[derive(Args)]
pub struct RunArgs {
  /// Base URL of the Jira instance (env: FL_JIRA_SITE)
  #[arg(long)]
  pub url: Option<String>,

  /// Path appended to the base URL, e.g. "/jira" (env: FL_JIRA_CONTEXT_PATH)
  #[arg(long)]
  pub context_path: Option<String>,

  /// Username for the Jira instance (env: FL_JIRA_USERNAME)
  #[arg(long)]
  pub username: Option<String>,

  /// Password or API token for Jira (env: FL_JIRA_PASSWORD)
  #[arg(long)]
  pub password: Option<String>,

  /// Key of the inward issue, e.g. IOS-1 (env: JIRA_INWARD_ISSUE)
  #[arg(long)]
  pub inward_issue: Option<String>,

  /// Key of the outward issue, e.g. IOS-2 (env: JIRA_OUTWARD_ISSUE)
  #[arg(long)]
  pub outward_issue: Option<String>,

  /// Name of the link relationship, e.g. "blocks" (env: JIRA_LINK_TYPE)
  #[arg(long)]
  pub link_type: Option<String>,
}

/// Options for the `check` subcommand
#[derive(Args)]
pub struct CheckArgs {
  /// Base URL of the Jira instance (env: FL_JIRA_SITE)
  #[arg(long)]
  pub url: Option<String>,

  /// Path appended to the base URL, e.g. "/jira" (env: FL_JIRA_CONTEXT_PATH)
  #[arg(long)]
  pub context_path: Option<String>,

  /// Username for the Jira instance (env: FL_JIRA_USERNAME)
  #[arg(long)]
  pub username: Option<String>,

  /// Password or API token for Jira (env: FL_JIRA_PASSWORD)
  #[arg(long)]
  pub password: Option<String>,
}

impl RunArgs {
  fn into_params(self) -> BTreeMap<&'static str, String> {
    collect_params([
      ("url", self.url),
      ("context_path", self.context_path),
      ("username", self.username),
      ("password", self.password),
      ("inward_issue", self.inward_issue),
      ("outward_issue", self.outward_issue),
      ("link_type", self.link_type),
    ])
  }
}

impl CheckArgs {
  fn into_params(self) -> BTreeMap<&'static str, String> {
    collect_params([
      ("url", self.url),
      ("context_path", self.context_path),
      ("username", self.username),
      ("password", self.password),
    ])
  }
}

/// Collect the explicitly-passed options into a parameter map, leaving
/// omitted options to environment fallback during resolution.
fn collect_params<const N: usize>(pairs: [(&'static str, Option<String>); N]) -> BTreeMap<&'static str, String> {
  let mut params = BTreeMap::new();
  for (key, value) in pairs {
    if let Some(value) = value {
      params.insert(key, value);
    }
  }
  params
}

/// Dispatch a parsed CLI invocation.
pub fn handle_cli(cli: Cli) -> Result<()> {
  let registry = actions::builtin_registry();

  match cli.command {
    Commands::Run(args) => run_action(&registry, LinkIssuesAction::NAME, args.into_params()),
    Commands::Check(args) => run_action(&registry, CheckConnectionAction::NAME, args.into_params()),
    Commands::Actions => {
      list_actions(&registry);
      Ok(())
    }
  }
}

/// Resolve an action's options and execute it.
fn run_action(registry: &ActionRegistry, name: &str, explicit: BTreeMap<&'static str, String>) -> Result<()> {
  let action = registry
    .get(name)
    .with_context(|| format!("unknown action '{name}'"))?;

  let params = resolve_params(action.options(), &explicit)?;
  action.run(&params)?;

  print_success(&format!("{name} finished successfully"));
  Ok(())
}

/// Print every registered action with its option table.
fn list_actions(registry: &ActionRegistry) {
  for action in registry.iter() {
    println!("{}: {}", action.name(), action.description());
    for item in action.options() {
      let requirement = if item.optional { "optional" } else { "required" };
      let sensitive = if item.sensitive { ", sensitive" } else { "" };
      println!(
        "  {:<14} {} ({requirement}{sensitive}, env: {})",
        item.key, item.description, item.env_name
      );
    }
    println!();
  }
}
