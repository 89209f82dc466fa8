use serde::Serialize;

/// Represents Jira authentication credentials
#[derive(Clone)]
pub struct JiraAuth {
  pub username: String,
  pub password: String,
}

/// Payload for creating a typed link between two issues
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueLinkRequest {
  #[serde(rename = "type")]
  pub link_type: LinkTypeRef,
  pub inward_issue: IssueRef,
  pub outward_issue: IssueRef,
}

/// A link type referenced by name (e.g. "blocks")
#[derive(Debug, Serialize)]
pub struct LinkTypeRef {
  pub name: String,
}

/// An issue referenced by key (e.g. "PROJ-123")
#[derive(Debug, Serialize)]
pub struct IssueRef {
  pub key: String,
}

impl IssueLinkRequest {
  /// Build a link request from the raw option values.
  pub fn new(link_type: &str, inward_issue: &str, outward_issue: &str) -> Self {
    Self {
      link_type: LinkTypeRef {
        name: link_type.to_string(),
      },
      inward_issue: IssueRef {
        key: inward_issue.to_string(),
      },
      outward_issue: IssueRef {
        key: outward_issue.to_string(),
      },
    }
  }
}
