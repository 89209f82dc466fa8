//! # Issue Link Endpoints
//!
//! Creates typed links between two Jira issues.

use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::error::{JiraError, api_message};
use crate::models::IssueLinkRequest;

impl JiraClient {
  /// Create a typed link between two issues.
  ///
  /// Fire-and-forget: the response body of a successful request is ignored.
  pub async fn create_issue_link(
    &self,
    link_type: &str,
    inward_issue: &str,
    outward_issue: &str,
  ) -> Result<(), JiraError> {
    let url = format!("{}/rest/api/2/issueLink", self.base_url);
    let payload = IssueLinkRequest::new(link_type, inward_issue, outward_issue);

    // The issue keys and link type are configured as sensitive; log only the
    // target endpoint.
    debug!(%url, "creating issue link");

    let response = self
      .client
      .post(&url)
      .basic_auth(&self.auth.username, Some(&self.auth.password))
      .json(&payload)
      .send()
      .await?;

    match response.status() {
      StatusCode::CREATED | StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(JiraError::Api {
        status: response.status(),
        message: "Authentication failed. Please check your Jira credentials.".to_string(),
      }),
      StatusCode::NOT_FOUND => Err(JiraError::Api {
        status: response.status(),
        message: format!("Issue {inward_issue} or {outward_issue} not found"),
      }),
      status => {
        let body = response.text().await.unwrap_or_default();
        Err(JiraError::Api {
          status,
          message: api_message(status, &body),
        })
      }
    }
  }
}
