//! # Jira API Endpoints
//!
//! Endpoint implementations for the Jira resources the plugin touches.

pub mod links;
