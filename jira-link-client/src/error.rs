//! Error taxonomy for the Jira client.
//!
//! Validation failures never reach this layer; everything here is either a
//! connection-level failure or an explicit rejection from the tracker, and
//! both are fatal to the invocation that triggered them.

use std::collections::BTreeMap;

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Errors produced while constructing or using the Jira client.
#[derive(Debug, Error)]
pub enum JiraError {
  /// The configured site URL (plus context path) could not be parsed.
  #[error("invalid Jira base URL '{url}': {source}")]
  InvalidBaseUrl {
    url: String,
    #[source]
    source: url::ParseError,
  },

  /// Connection-level failure reaching the tracker.
  #[error("failed to reach Jira: {source}")]
  Transport {
    #[from]
    source: reqwest::Error,
  },

  /// The tracker rejected the request.
  #[error("Jira request failed (HTTP {status}): {message}")]
  Api { status: StatusCode, message: String },
}

/// Error body returned by Jira REST endpoints.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct JiraErrorBody {
  #[serde(default, rename = "errorMessages")]
  pub error_messages: Vec<String>,
  #[serde(default)]
  pub errors: BTreeMap<String, String>,
}

/// Produce a human-readable message for a rejected API request, preferring
/// the structured `errorMessages`/`errors` body Jira endpoints return.
pub(crate) fn api_message(status: StatusCode, body: &str) -> String {
  if let Ok(parsed) = serde_json::from_str::<JiraErrorBody>(body) {
    let mut parts: Vec<String> = parsed.error_messages;
    parts.extend(
      parsed
        .errors
        .into_iter()
        .map(|(field, message)| format!("{field}: {message}")),
    );
    if !parts.is_empty() {
      return parts.join("; ");
    }
  }

  if body.trim().is_empty() {
    status.canonical_reason().unwrap_or("unknown error").to_string()
  } else {
    body.trim().to_string()
  }
}
