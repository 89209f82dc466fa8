//! # Action Options
//!
//! The configuration items shared by the built-in actions. Each item names
//! the environment variable consulted when the option is not passed
//! explicitly; sensitive items are masked in all output.

use jira_link_core::ConfigItem;

/// Base URL of the Jira instance.
pub const URL: ConfigItem = ConfigItem {
  key: "url",
  env_name: "FL_JIRA_SITE",
  description: "URL for the Jira instance",
  optional: false,
  sensitive: false,
  default_value: "",
};

/// Path prefix appended to the base URL.
pub const CONTEXT_PATH: ConfigItem = ConfigItem {
  key: "context_path",
  env_name: "FL_JIRA_CONTEXT_PATH",
  description: "Appends to the url (ex: \"/jira\")",
  optional: true,
  sensitive: false,
  default_value: "",
};

/// Username for the Jira instance.
pub const USERNAME: ConfigItem = ConfigItem {
  key: "username",
  env_name: "FL_JIRA_USERNAME",
  description: "Username for the Jira instance",
  optional: false,
  sensitive: false,
  default_value: "",
};

/// Password for the Jira instance.
pub const PASSWORD: ConfigItem = ConfigItem {
  key: "password",
  env_name: "FL_JIRA_PASSWORD",
  description: "Password for Jira",
  optional: false,
  sensitive: true,
  default_value: "",
};

/// Key of the inward (source) issue of the link.
pub const INWARD_ISSUE: ConfigItem = ConfigItem {
  key: "inward_issue",
  env_name: "JIRA_INWARD_ISSUE",
  description: "Inward issue key",
  optional: false,
  sensitive: true,
  default_value: "",
};

/// Key of the outward (target) issue of the link.
pub const OUTWARD_ISSUE: ConfigItem = ConfigItem {
  key: "outward_issue",
  env_name: "JIRA_OUTWARD_ISSUE",
  description: "Outward issue key",
  optional: false,
  sensitive: true,
  default_value: "",
};

/// Name of the relationship between the two issues.
pub const LINK_TYPE: ConfigItem = ConfigItem {
  key: "link_type",
  env_name: "JIRA_LINK_TYPE",
  description: "Issue link type",
  optional: false,
  sensitive: true,
  default_value: "",
};
