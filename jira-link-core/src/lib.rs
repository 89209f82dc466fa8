//! # Action Framework
//!
//! Core library for the jira-link plugin providing configuration-item
//! resolution with environment fallback, the action registry the host tool
//! dispatches through, and shared terminal output helpers.

pub mod action;
pub mod config;
pub mod output;

// Re-export the action surface
pub use action::{Action, ActionRegistry};
// Re-export configuration types
pub use config::{ConfigError, ConfigItem, ResolvedParams, resolve_params, resolve_params_with_lookup};
