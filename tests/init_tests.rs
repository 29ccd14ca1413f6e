//! Integration tests for the init command

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_json, rptodo_cmd};

#[test]
fn test_init_creates_config_and_database() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");
    let db_path = temp.path().join("todo.json");

    rptodo_cmd(&config_dir)
        .arg("init")
        .arg("--db-path")
        .arg(&db_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("The to-do database is"))
        .stdout(predicate::str::contains("todo.json"));

    let content = fs::read_to_string(config_dir.join("config.toml")).unwrap();
    assert!(content.contains("db_type = \"json\""));
    assert!(content.contains("todo.json"));

    assert_eq!(fs::read_to_string(&db_path).unwrap(), "[]");
}

#[test]
fn test_init_mongodb_records_kind() {
    let temp = TempDir::new().unwrap();
    let config_dir = temp.path().join("config");

    rptodo_cmd(&config_dir)
        .arg("init")
        .arg("--db-type")
        .arg("mongodb")
        .assert()
        .success()
        .stdout(predicate::str::contains("mongodb://localhost:27017"));

    let content = fs::read_to_string(config_dir.join("config.toml")).unwrap();
    assert!(content.contains("db_type = \"mongodb\""));
}

#[test]
fn test_init_invalid_db_type() {
    let temp = TempDir::new().unwrap();

    rptodo_cmd(&temp.path().join("config"))
        .arg("init")
        .arg("--db-type")
        .arg("sqlite")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid database type"));
}

#[test]
fn test_init_dir_error_exit_code() {
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("blocker");
    fs::write(&blocker, "file").unwrap();

    rptodo_cmd(&blocker.join("config"))
        .arg("init")
        .arg("--db-path")
        .arg(temp.path().join("todo.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config directory error"));
}

#[test]
fn test_init_twice_resets_todos() {
    let temp = TempDir::new().unwrap();
    let (config_dir, db_path) = init_json(temp.path());

    rptodo_cmd(&config_dir)
        .args(["add", "Old", "task"])
        .assert()
        .success();

    rptodo_cmd(&config_dir)
        .arg("init")
        .arg("--db-path")
        .arg(&db_path)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&db_path).unwrap(), "[]");
    rptodo_cmd(&config_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("There are no tasks in the to-do list yet"));
}

#[test]
fn test_commands_require_init() {
    let temp = TempDir::new().unwrap();

    rptodo_cmd(&temp.path().join("config"))
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("rptodo init"));
}
