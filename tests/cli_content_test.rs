//! Integration tests for content administration commands via CLI.
//!
//! These tests cover the administrative entry points that load the site:
//! - `folio project|post|service|skill|testimonial add`
//! - `folio post publish`

mod common;

use common::TestEnv;
use predicates::prelude::*;
use serde_json::Value;

fn json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_project_add_derives_slug_from_title() {
    let env = TestEnv::init();

    let output = env
        .folio()
        .args(["project", "add", "My First Project"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let saved = json(&output);
    assert_eq!(saved["slug"], "my-first-project");
    assert!(saved["id"].as_i64().unwrap() > 0);
}

#[test]
fn test_project_add_explicit_slug_wins() {
    let env = TestEnv::init();

    let output = env
        .folio()
        .args(["project", "add", "My First Project", "--slug", "first"])
        .output()
        .unwrap();
    assert_eq!(json(&output)["slug"], "first");
}

#[test]
fn test_duplicate_slug_rejected() {
    let env = TestEnv::init();

    env.folio()
        .args(["project", "add", "Site", "--slug", "site"])
        .assert()
        .success();
    env.folio()
        .args(["project", "add", "Other Site", "--slug", "site"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_project_add_unknown_category_rejected() {
    let env = TestEnv::init();

    env.folio()
        .args(["project", "add", "Video Thing", "--category", "video"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown project category"));
}

#[test]
fn test_post_publish_flow() {
    let env = TestEnv::init();

    env.folio()
        .args(["post", "add", "My Story", "--author", "ada"])
        .assert()
        .success();

    // Draft is not publicly listed
    let before = json(&env.folio().args(["page", "blog"]).output().unwrap());
    assert_eq!(before["posts"]["total_items"], 0);

    env.folio()
        .args(["post", "publish", "my-story"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-story"));

    let after = json(&env.folio().args(["page", "blog"]).output().unwrap());
    assert_eq!(after["posts"]["total_items"], 1);
    assert!(after["posts"]["items"][0]["published_at"].is_string());
}

#[test]
fn test_post_publish_unknown_slug_fails() {
    let env = TestEnv::init();

    env.folio()
        .args(["post", "publish", "ghost"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_post_add_requires_author() {
    let env = TestEnv::init();

    // No implicit author identity: the flag is mandatory
    env.folio()
        .args(["post", "add", "Authorless"])
        .assert()
        .failure();
}

#[test]
fn test_service_add_with_features() {
    let env = TestEnv::init();

    env.folio()
        .args([
            "service",
            "add",
            "Web Development",
            "--features",
            "Design\nBuild\nShip",
            "--price-range",
            "$500 - $2000",
        ])
        .assert()
        .success();

    let page = json(&env.folio().args(["page", "services"]).output().unwrap());
    assert_eq!(page["services"][0]["features"], "Design\nBuild\nShip");
    assert_eq!(page["services"][0]["price_range"], "$500 - $2000");
}

#[test]
fn test_skill_add_and_category_validation() {
    let env = TestEnv::init();

    env.folio()
        .args(["skill", "add", "Rust", "--category", "language", "--proficiency", "90"])
        .assert()
        .success();

    env.folio()
        .args(["skill", "add", "Emacs", "--category", "editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown skill category"));
}

#[test]
fn test_testimonial_add_resolves_project_slug() {
    let env = TestEnv::init();

    env.folio()
        .args(["project", "add", "Shop", "--slug", "shop"])
        .assert()
        .success();

    env.folio()
        .args([
            "testimonial",
            "add",
            "Grace",
            "--quote",
            "Delivered on time.",
            "--project",
            "shop",
            "--featured",
        ])
        .assert()
        .success();

    let home = json(&env.folio().args(["page", "home"]).output().unwrap());
    let testimonials = home["testimonials"].as_array().unwrap();
    assert_eq!(testimonials.len(), 1);
    assert_eq!(testimonials[0]["client_name"], "Grace");
    assert!(testimonials[0]["project_id"].as_i64().unwrap() > 0);
}

#[test]
fn test_testimonial_add_unknown_project_fails() {
    let env = TestEnv::init();

    env.folio()
        .args([
            "testimonial",
            "add",
            "Grace",
            "--quote",
            "Great.",
            "--project",
            "ghost",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Not found"));
}

#[test]
fn test_init_is_idempotent() {
    let env = TestEnv::init();

    env.folio().arg("init").assert().success();
    env.folio()
        .args(["project", "add", "Still Works"])
        .assert()
        .success();
}
