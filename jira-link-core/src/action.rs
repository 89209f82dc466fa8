//! # Actions
//!
//! The [`Action`] trait describes a named unit of work exposed to the host
//! automation tool; [`ActionRegistry`] is the process-wide table of available
//! actions, populated explicitly at startup rather than discovered by
//! scanning the filesystem.

use std::collections::BTreeMap;

use anyhow::Result;

use crate::config::{ConfigItem, ResolvedParams};

/// A named unit of work the host tool can invoke.
pub trait Action {
  /// Canonical action name used for registry lookup.
  fn name(&self) -> &'static str;

  /// One-line summary shown in action listings.
  fn description(&self) -> &'static str;

  /// The options this action accepts, in validation order.
  fn options(&self) -> &'static [ConfigItem];

  /// Execute the action against a resolved parameter set.
  fn run(&self, params: &ResolvedParams) -> Result<()>;
}

/// Registry of available actions, keyed by name.
#[derive(Default)]
pub struct ActionRegistry {
  actions: BTreeMap<&'static str, Box<dyn Action>>,
}

impl ActionRegistry {
  /// Create an empty registry.
  pub fn new() -> Self {
    Self::default()
  }

  /// Register an action under its own name. Re-registering a name replaces
  /// the previous entry.
  pub fn register(&mut self, action: Box<dyn Action>) {
    self.actions.insert(action.name(), action);
  }

  /// Look up an action by name.
  pub fn get(&self, name: &str) -> Option<&dyn Action> {
    self.actions.get(name).map(|action| action.as_ref())
  }

  /// Iterate over the registered actions in name order.
  pub fn iter(&self) -> impl Iterator<Item = &dyn Action> {
    self.actions.values().map(|action| action.as_ref())
  }

  /// Number of registered actions.
  pub fn len(&self) -> usize {
    self.actions.len()
  }

  /// Whether the registry is empty.
  pub fn is_empty(&self) -> bool {
    self.actions.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  struct NamedAction {
    name: &'static str,
    description: &'static str,
  }

  impl Action for NamedAction {
    fn name(&self) -> &'static str {
      self.name
    }

    fn description(&self) -> &'static str {
      self.description
    }

    fn options(&self) -> &'static [ConfigItem] {
      &[]
    }

    fn run(&self, _params: &ResolvedParams) -> Result<()> {
      Ok(())
    }
  }

  #[test]
  fn test_register_and_get() {
    let mut registry = ActionRegistry::new();
    assert!(registry.is_empty());

    registry.register(Box::new(NamedAction {
      name: "link",
      description: "links things",
    }));

    assert_eq!(registry.len(), 1);
    let action = registry.get("link").expect("registered action missing");
    assert_eq!(action.description(), "links things");
    assert!(registry.get("unknown").is_none());
  }

  #[test]
  fn test_reregistering_a_name_replaces_the_entry() {
    let mut registry = ActionRegistry::new();
    registry.register(Box::new(NamedAction {
      name: "link",
      description: "first",
    }));
    registry.register(Box::new(NamedAction {
      name: "link",
      description: "second",
    }));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.get("link").unwrap().description(), "second");
  }

  #[test]
  fn test_iter_yields_actions_in_name_order() {
    let mut registry = ActionRegistry::new();
    registry.register(Box::new(NamedAction {
      name: "zeta",
      description: "",
    }));
    registry.register(Box::new(NamedAction {
      name: "alpha",
      description: "",
    }));

    let names: Vec<_> = registry.iter().map(|action| action.name()).collect();
    assert_eq!(names, vec!["alpha", "zeta"]);
  }
}
