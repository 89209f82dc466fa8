use anyhow::{Context, Result};
use reqwest::Client;
use tokio::runtime::Runtime;
use tracing::debug;
use url::Url;

use crate::consts::USER_AGENT;
use crate::error::JiraError;
use crate::models::JiraAuth;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: JiraAuth,
}

impl JiraClient {
  /// Create a new Jira client scoped to an already-joined base URL.
  ///
  /// The URL is validated eagerly so a malformed site configuration fails at
  /// construction rather than on the first request.
  pub fn new(base_url: &str, auth: JiraAuth) -> Result<Self, JiraError> {
    Url::parse(base_url).map_err(|source| JiraError::InvalidBaseUrl {
      url: base_url.to_string(),
      source,
    })?;

    let client = Client::builder().user_agent(USER_AGENT).build()?;
    Ok(Self {
      client,
      base_url: base_url.to_string(),
      auth,
    })
  }

  /// The base URL every request is scoped to.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Check the Jira connection by fetching the authenticated user.
  pub async fn check_connection(&self) -> Result<bool, JiraError> {
    let url = format!("{}/rest/api/2/myself", self.base_url);
    debug!(username = %self.auth.username, "checking Jira connection");

    let response = self
      .client
      .get(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.password))
      .send()
      .await?;

    Ok(response.status().is_success())
  }
}

/// Join the tracker site URL with an optional context path.
///
/// An empty context path leaves the site URL untouched; otherwise the two
/// are joined with exactly one `/` between them.
pub fn effective_base_url(site: &str, context_path: &str) -> String {
  if context_path.is_empty() {
    return site.to_string();
  }

  format!(
    "{}/{}",
    site.trim_end_matches('/'),
    context_path.trim_start_matches('/')
  )
}

/// Create a Jira client from credentials, joining the site URL and context
/// path into the effective base URL.
pub fn create_jira_client(
  site: &str,
  context_path: &str,
  username: &str,
  password: &str,
) -> Result<JiraClient, JiraError> {
  let auth = JiraAuth {
    username: username.to_string(),
    password: password.to_string(),
  };

  JiraClient::new(&effective_base_url(site, context_path), auth)
}

/// Creates a tokio runtime and an authenticated Jira client.
///
/// Actions run synchronously on whatever thread the host picks; the returned
/// runtime exists for the single blocking round-trip and is dropped with it.
pub fn create_runtime_and_client(
  site: &str,
  context_path: &str,
  username: &str,
  password: &str,
) -> Result<(Runtime, JiraClient)> {
  let rt = Runtime::new().context("Failed to create async runtime")?;
  let client = create_jira_client(site, context_path, username, password)?;
  Ok((rt, client))
}
