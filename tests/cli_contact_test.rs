//! Integration tests for contact commands via CLI.
//!
//! These tests verify intake validation, persistence, the
//! notification-failure policy, and the message lifecycle:
//! - `folio contact submit|list|read|replied`

mod common;

use common::TestEnv;
use predicates::prelude::*;
use serde_json::Value;

fn json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn submit_valid(env: &TestEnv) -> Value {
    let output = env
        .folio()
        .args([
            "contact", "submit", "--name", "Ada", "--email", "ada@example.com", "--subject",
            "Hi", "--message", "Hello there",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    json(&output)
}

#[test]
fn test_submit_valid_creates_new_message() {
    let env = TestEnv::init();

    let message = submit_valid(&env);
    assert_eq!(message["status"], "new");
    assert_eq!(message["name"], "Ada");
    assert_eq!(message["email"], "ada@example.com");
    assert!(message["read_at"].is_null());
    assert!(message["id"].as_i64().unwrap() > 0);
}

#[test]
fn test_submit_succeeds_despite_broken_mail_transport() {
    // TestEnv points FOLIO_SENDMAIL at a nonexistent program, so the
    // notification attempt always fails. The submission must still be
    // recorded and reported as successful.
    let env = TestEnv::init();

    submit_valid(&env);

    let list = json(&env.folio().args(["contact", "list"]).output().unwrap());
    assert_eq!(list["count"], 1);
    assert_eq!(list["messages"][0]["message"], "Hello there");
}

#[test]
fn test_submit_trims_whitespace() {
    let env = TestEnv::init();

    let output = env
        .folio()
        .args([
            "contact", "submit", "--name", "  Ada  ", "--email", " ada@example.com ",
            "--subject", "Hi", "--message", "Hello there",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let message = json(&output);
    assert_eq!(message["name"], "Ada");
    assert_eq!(message["email"], "ada@example.com");
}

#[test]
fn test_submit_missing_required_field_rejected() {
    let env = TestEnv::init();

    env.folio()
        .args([
            "contact", "submit", "--name", "   ", "--email", "ada@example.com", "--subject",
            "Hi", "--message", "Hello",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing required field: name"));

    // Nothing was stored
    let list = json(&env.folio().args(["contact", "list"]).output().unwrap());
    assert_eq!(list["count"], 0);
}

#[test]
fn test_submit_invalid_email_rejected() {
    let env = TestEnv::init();

    for email in ["not-an-email", "missing-at.example.com", "missing-dot@example"] {
        env.folio()
            .args([
                "contact", "submit", "--name", "Ada", "--email", email, "--subject", "Hi",
                "--message", "Hello",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid email address"));
    }

    let list = json(&env.folio().args(["contact", "list"]).output().unwrap());
    assert_eq!(list["count"], 0);
}

#[test]
fn test_phone_is_optional() {
    let env = TestEnv::init();

    let output = env
        .folio()
        .args([
            "contact", "submit", "--name", "Ada", "--email", "ada@example.com", "--phone",
            "+254 700 000000", "--subject", "Hi", "--message", "Hello",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(json(&output)["phone"], "+254 700 000000");

    // And submitting without it works too
    submit_valid(&env);
}

#[test]
fn test_contact_list_empty() {
    let env = TestEnv::init();

    let list = json(&env.folio().args(["contact", "list"]).output().unwrap());
    assert_eq!(list["count"], 0);

    env.folio()
        .args(["contact", "list", "-H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages found."));
}

#[test]
fn test_message_lifecycle_read_then_replied() {
    let env = TestEnv::init();
    let id = submit_valid(&env)["id"].as_i64().unwrap();
    let id_str = id.to_string();

    let read = json(
        &env.folio()
            .args(["contact", "read", &id_str])
            .output()
            .unwrap(),
    );
    assert_eq!(read["status"], "read");
    let read_at = read["read_at"].as_str().unwrap().to_string();

    // Marking read again leaves read_at untouched
    let read_again = json(
        &env.folio()
            .args(["contact", "read", &id_str])
            .output()
            .unwrap(),
    );
    assert_eq!(read_again["read_at"].as_str().unwrap(), read_at);

    let replied = json(
        &env.folio()
            .args(["contact", "replied", &id_str])
            .output()
            .unwrap(),
    );
    assert_eq!(replied["status"], "replied");
    assert!(replied["replied_at"].is_string());
    assert_eq!(replied["read_at"].as_str().unwrap(), read_at);
}

#[test]
fn test_contact_list_status_filter() {
    let env = TestEnv::init();
    let first = submit_valid(&env)["id"].as_i64().unwrap();
    submit_valid(&env);

    env.folio()
        .args(["contact", "read", &first.to_string()])
        .assert()
        .success();

    let unread = json(
        &env.folio()
            .args(["contact", "list", "--status", "new"])
            .output()
            .unwrap(),
    );
    assert_eq!(unread["count"], 1);

    let all = json(&env.folio().args(["contact", "list"]).output().unwrap());
    assert_eq!(all["count"], 2);
}

#[test]
fn test_mark_unknown_message_fails() {
    let env = TestEnv::init();

    env.folio()
        .args(["contact", "read", "4242"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}
