//! # Connection Check Action
//!
//! Verifies the configured Jira site and credentials by fetching the
//! authenticated user.

use anyhow::{Result, bail};
use jira_link_client::create_runtime_and_client;
use jira_link_core::Action;
use jira_link_core::config::{ConfigItem, ResolvedParams};

use crate::actions::options;

/// Options accepted by the connection check, in validation order.
pub const CHECK_OPTIONS: &[ConfigItem] = &[
  options::URL,
  options::CONTEXT_PATH,
  options::USERNAME,
  options::PASSWORD,
];

/// Checks that the configured Jira site accepts the configured credentials.
pub struct CheckConnectionAction;

impl CheckConnectionAction {
  /// Registry name of the action.
  pub const NAME: &'static str = "jira_check";
}

impl Action for CheckConnectionAction {
  fn name(&self) -> &'static str {
    Self::NAME
  }

  fn description(&self) -> &'static str {
    "Verify the Jira site and credentials are reachable"
  }

  fn options(&self) -> &'static [ConfigItem] {
    CHECK_OPTIONS
  }

  fn run(&self, params: &ResolvedParams) -> Result<()> {
    let (rt, client) = create_runtime_and_client(
      params.get(&options::URL),
      params.get(&options::CONTEXT_PATH),
      params.get(&options::USERNAME),
      params.get(&options::PASSWORD),
    )?;

    if !rt.block_on(client.check_connection())? {
      bail!(
        "Jira rejected the credentials for user '{}'",
        params.get(&options::USERNAME)
      );
    }

    Ok(())
  }
}
