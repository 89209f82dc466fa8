//! Environment variable management for testing
//!
//! This module provides utilities for setting and restoring individual
//! environment variables during testing so tests that exercise environment
//! fallback don't interfere with each other or leak state into the process.

use std::env;
use std::ffi::OsStr;

/// Guards a single environment variable, restoring its original value (or
/// absence) when dropped.
pub struct EnvVarGuard {
  /// The environment variable being guarded
  name: String,
  /// The original value at guard creation, if any
  original: Option<String>,
}

impl EnvVarGuard {
  /// Create a new guard for the given environment variable, capturing its
  /// current value.
  pub fn new(name: &str) -> Self {
    let original = env::var(name).ok();
    Self {
      name: name.to_string(),
      original,
    }
  }

  /// Set the guarded variable to the given value.
  pub fn set<V: AsRef<OsStr>>(&self, value: V) {
    unsafe {
      env::set_var(&self.name, value);
    }
  }

  /// Remove the guarded variable from the environment.
  pub fn remove(&self) {
    unsafe {
      env::remove_var(&self.name);
    }
  }
}

impl Drop for EnvVarGuard {
  fn drop(&mut self) {
    match &self.original {
      Some(val) => unsafe {
        env::set_var(&self.name, val);
      },
      None => unsafe {
        env::remove_var(&self.name);
      },
    }
  }
}
