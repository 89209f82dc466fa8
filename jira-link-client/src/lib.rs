//! # Jira API Client
//!
//! Minimal Jira REST client used by the jira-link plugin: basic
//! authentication, issue link creation, and a connection check.

mod client;
mod consts;
mod endpoints;
pub mod error;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client, create_runtime_and_client, effective_base_url};
// Re-export the error taxonomy
pub use error::JiraError;
// Re-export models
pub use models::{IssueLinkRequest, IssueRef, JiraAuth, LinkTypeRef};
