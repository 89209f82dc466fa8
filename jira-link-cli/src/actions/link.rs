//! # Issue Link Action
//!
//! Links two Jira tickets together: validates the configured options, builds
//! an authenticated client, and issues a single link-creation request.

use anyhow::Result;
use jira_link_client::create_runtime_and_client;
use jira_link_core::Action;
use jira_link_core::config::{ConfigItem, ResolvedParams};

use crate::actions::options;

/// Options accepted by the link action, in validation order. The context
/// path is optional and never validated; every other item must resolve to a
/// non-empty value before any request is made.
pub const LINK_OPTIONS: &[ConfigItem] = &[
  options::URL,
  options::CONTEXT_PATH,
  options::USERNAME,
  options::PASSWORD,
  options::INWARD_ISSUE,
  options::OUTWARD_ISSUE,
  options::LINK_TYPE,
];

/// Links two tickets together in Jira.
pub struct LinkIssuesAction;

impl LinkIssuesAction {
  /// Registry name of the action.
  pub const NAME: &'static str = "jira_link";
}

impl Action for LinkIssuesAction {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn description(&self) -> &'static str {
    "Link two tickets together in Jira"
  }

  fn options(&self) -> &'static [ConfigItem] {
    LINK_OPTIONS
  }

  fn run(&self, params: &ResolvedParams) -> Result<()> {
    let (rt, client) = create_runtime_and_client(
      params.get(&options::URL),
      params.get(&options::CONTEXT_PATH),
      params.get(&options::USERNAME),
      params.get(&options::PASSWORD),
    )?;

    rt.block_on(client.create_issue_link(
      params.get(&options::LINK_TYPE),
      params.get(&options::INWARD_ISSUE),
      params.get(&options::OUTWARD_ISSUE),
    ))?;

    Ok(())
  }
}
