//! # Built-in Actions
//!
//! The actions this plugin ships, registered explicitly at startup. The host
//! surface discovers them through [`builtin_registry`] rather than scanning
//! the filesystem for action sources.

mod check;
mod link;
pub mod options;

use jira_link_core::ActionRegistry;

pub use check::CheckConnectionAction;
pub use link::LinkIssuesAction;

/// Build the registry of built-in actions.
pub fn builtin_registry() -> ActionRegistry {
  let mut registry = ActionRegistry::new();
  registry.register(Box::new(LinkIssuesAction));
  registry.register(Box::new(CheckConnectionAction));
  registry
}
