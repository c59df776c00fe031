//! Exit-behavior tests for the ghfetch binary.
//!
//! These cover the fatal preconditions that must fail before any network
//! call: a missing credential and an unparseable repository reference.

use assert_cmd::Command;
use predicates::prelude::*;

fn ghfetch() -> Command {
    Command::cargo_bin("ghfetch").unwrap()
}

#[test]
fn missing_token_exits_nonzero_with_diagnostic() {
    ghfetch()
        .env_remove("GITHUB_TOKEN")
        .args(["https://github.com/owner/repo", "main", "docs", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GITHUB_TOKEN"));
}

#[test]
fn invalid_repository_reference_exits_nonzero() {
    ghfetch()
        .env("GITHUB_TOKEN", "dummy-token")
        .args(["https://github.com/owneronly", "main", "docs", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository reference"));
}

#[test]
fn malformed_url_exits_nonzero() {
    ghfetch()
        .env("GITHUB_TOKEN", "dummy-token")
        .args(["not a url", "main", "docs", "out"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid repository reference"));
}

#[test]
fn help_describes_positional_arguments() {
    ghfetch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("REPO_URL"))
        .stdout(predicate::str::contains("BRANCH"))
        .stdout(predicate::str::contains("LOCAL_DIR"));
}
