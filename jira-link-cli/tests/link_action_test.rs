//! End-to-end tests for the jira-link binary.
//!
//! These drive the compiled binary the way a pipeline would: options passed
//! as flags or through the environment, with a wiremock server standing in
//! for the Jira instance.

use assert_cmd::Command;
use predicates::prelude::*;
use tokio::runtime::Runtime;
use wiremock::matchers::{basic_auth, body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const OPTION_ENV_VARS: [&str; 7] = [
  "FL_JIRA_SITE",
  "FL_JIRA_CONTEXT_PATH",
  "FL_JIRA_USERNAME",
  "FL_JIRA_PASSWORD",
  "JIRA_INWARD_ISSUE",
  "JIRA_OUTWARD_ISSUE",
  "JIRA_LINK_TYPE",
];

/// Command with the option environment scrubbed so the surrounding shell
/// cannot leak values into a test.
fn jira_link_cmd() -> Command {
  let mut cmd = Command::cargo_bin("jira-link").expect("jira-link binary should build");
  for var in OPTION_ENV_VARS {
    cmd.env_remove(var);
  }
  cmd
}

#[test]
fn test_run_without_username_fails_naming_the_option() {
  jira_link_cmd()
    .args([
      "run",
      "--url",
      "https://example.com",
      "--password",
      "secret",
      "--inward-issue",
      "IOS-1",
      "--outward-issue",
      "IOS-2",
      "--link-type",
      "blocks",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("username"));
}

#[test]
fn test_actions_lists_the_shipped_actions() {
  jira_link_cmd()
    .arg("actions")
    .assert()
    .success()
    .stdout(predicate::str::contains("jira_link"))
    .stdout(predicate::str::contains("jira_check"))
    .stdout(predicate::str::contains("FL_JIRA_SITE"));
}

#[test]
fn test_run_links_two_issues_through_flags() {
  let rt = Runtime::new().unwrap();
  let mock_server = rt.block_on(async {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/rest/api/2/issueLink"))
      .and(basic_auth("ci-bot", "hunter2"))
      .and(body_json(serde_json::json!({
          "type": {
              "name": "blocks"
          },
          "inwardIssue": {
              "key": "IOS-1"
          },
          "outwardIssue": {
              "key": "IOS-2"
          }
      })))
      .respond_with(ResponseTemplate::new(201))
      .expect(1)
      .mount(&mock_server)
      .await;
    mock_server
  });

  jira_link_cmd()
    .args([
      "run",
      "--url",
      &mock_server.uri(),
      "--username",
      "ci-bot",
      "--password",
      "hunter2",
      "--inward-issue",
      "IOS-1",
      "--outward-issue",
      "IOS-2",
      "--link-type",
      "blocks",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("jira_link"));

  drop(mock_server);
}

#[test]
fn test_run_resolves_every_option_from_the_environment() {
  let rt = Runtime::new().unwrap();
  let mock_server = rt.block_on(async {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/ci/rest/api/2/issueLink"))
      .and(basic_auth("env-bot", "env-secret"))
      .and(body_json(serde_json::json!({
          "type": {
              "name": "relates to"
          },
          "inwardIssue": {
              "key": "ENV-1"
          },
          "outwardIssue": {
              "key": "ENV-2"
          }
      })))
      .respond_with(ResponseTemplate::new(201))
      .expect(1)
      .mount(&mock_server)
      .await;
    mock_server
  });

  jira_link_cmd()
    .arg("run")
    .env("FL_JIRA_SITE", mock_server.uri())
    .env("FL_JIRA_CONTEXT_PATH", "/ci")
    .env("FL_JIRA_USERNAME", "env-bot")
    .env("FL_JIRA_PASSWORD", "env-secret")
    .env("JIRA_INWARD_ISSUE", "ENV-1")
    .env("JIRA_OUTWARD_ISSUE", "ENV-2")
    .env("JIRA_LINK_TYPE", "relates to")
    .assert()
    .success();

  drop(mock_server);
}

#[test]
fn test_check_verifies_site_and_credentials() {
  let rt = Runtime::new().unwrap();
  let mock_server = rt.block_on(async {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/rest/api/2/myself"))
      .and(basic_auth("ci-bot", "hunter2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "name": "ci-bot"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;
    mock_server
  });

  jira_link_cmd()
    .args([
      "check",
      "--url",
      &mock_server.uri(),
      "--username",
      "ci-bot",
      "--password",
      "hunter2",
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("jira_check"));

  drop(mock_server);
}

#[test]
fn test_tracker_rejection_fails_the_run() {
  let rt = Runtime::new().unwrap();
  let mock_server = rt.block_on(async {
    let mock_server = MockServer::start().await;
    Mock::given(method("POST"))
      .and(path("/rest/api/2/issueLink"))
      .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
          "errorMessages": ["No issue link type with name 'blocksss' found."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;
    mock_server
  });

  jira_link_cmd()
    .args([
      "run",
      "--url",
      &mock_server.uri(),
      "--username",
      "ci-bot",
      "--password",
      "hunter2",
      "--inward-issue",
      "IOS-1",
      "--outward-issue",
      "IOS-2",
      "--link-type",
      "blocksss",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("No issue link type"));

  drop(mock_server);
}
