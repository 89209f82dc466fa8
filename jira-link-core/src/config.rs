//! # Configuration Items
//!
//! Describes the options an action accepts and resolves them from explicit
//! parameters, the process environment, and declared defaults. Environment
//! lookup is injected so tests can resolve against a fixture map instead of
//! mutating the process environment.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use thiserror::Error;
use tracing::debug;

/// Describes a single option accepted by an action.
#[derive(Debug, Clone, Copy)]
pub struct ConfigItem {
  /// Canonical option key (e.g. `username`).
  pub key: &'static str,
  /// Environment variable consulted when the option is not passed explicitly.
  pub env_name: &'static str,
  /// Human-readable description shown in option listings.
  pub description: &'static str,
  /// Optional items resolve to their default instead of failing validation.
  pub optional: bool,
  /// Sensitive values are masked in debug output and never traced.
  pub sensitive: bool,
  /// Value applied when neither an explicit parameter nor the environment
  /// provides one.
  pub default_value: &'static str,
}

/// Error raised while resolving an action's options.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
  /// A required option resolved to nothing, or to an empty string.
  #[error("no value for required option '{key}'; pass it explicitly or set {env_name}")]
  MissingOption {
    key: &'static str,
    env_name: &'static str,
  },
}

/// Option values for a single action invocation.
///
/// Produced by [`resolve_params`]; every declared item is present, required
/// items are guaranteed non-empty.
#[derive(Clone, Default)]
pub struct ResolvedParams {
  values: BTreeMap<&'static str, String>,
  sensitive: BTreeSet<&'static str>,
}

impl ResolvedParams {
  /// Look up the resolved value for an option item.
  ///
  /// Items absent from the set (not part of the resolved action) fall back
  /// to the item's declared default.
  pub fn get(&self, item: &ConfigItem) -> &str {
    self
      .values
      .get(item.key)
      .map(String::as_str)
      .unwrap_or(item.default_value)
  }

  /// Number of resolved options.
  pub fn len(&self) -> usize {
    self.values.len()
  }

  /// Whether any options were resolved.
  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

impl fmt::Debug for ResolvedParams {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut map = f.debug_map();
    for (key, value) in &self.values {
      if self.sensitive.contains(key) {
        map.entry(key, &"********");
      } else {
        map.entry(key, value);
      }
    }
    map.finish()
  }
}

/// Resolve an action's options against explicit parameters and the process
/// environment.
pub fn resolve_params(
  items: &[ConfigItem],
  explicit: &BTreeMap<&str, String>,
) -> Result<ResolvedParams, ConfigError> {
  resolve_params_with_lookup(items, explicit, |name| std::env::var(name).ok())
}

/// Resolve an action's options with an injected environment lookup.
///
/// Resolution order per item: explicit parameter, then environment, then the
/// declared default. Items are processed in declared order and validation is
/// fail-fast: the first required item that resolves to an empty value aborts
/// resolution with an error naming that item.
pub fn resolve_params_with_lookup<F>(
  items: &[ConfigItem],
  explicit: &BTreeMap<&str, String>,
  env: F,
) -> Result<ResolvedParams, ConfigError>
where
  F: Fn(&str) -> Option<String>,
{
  let mut resolved = ResolvedParams::default();

  for item in items {
    let (value, source) = match explicit.get(item.key) {
      Some(value) => (value.clone(), "explicit"),
      None => match env(item.env_name) {
        Some(value) => (value, "environment"),
        None => (item.default_value.to_string(), "default"),
      },
    };

    if value.is_empty() && !item.optional {
      return Err(ConfigError::MissingOption {
        key: item.key,
        env_name: item.env_name,
      });
    }

    debug!(option = item.key, source, "resolved option");

    if item.sensitive {
      resolved.sensitive.insert(item.key);
    }
    resolved.values.insert(item.key, value);
  }

  Ok(resolved)
}
