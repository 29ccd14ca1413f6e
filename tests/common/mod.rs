#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub fn rptodo_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rptodo").unwrap();
    cmd.env("RPTODO_CONFIG_DIR", config_dir);
    cmd.env_remove("RPTODO_LOG");
    cmd
}

/// Run `rptodo init` with a JSON database under `root`; returns the config
/// dir and database path
pub fn init_json(root: &Path) -> (PathBuf, PathBuf) {
    let config_dir = root.join("config");
    let db_path = root.join("todo.json");

    rptodo_cmd(&config_dir)
        .arg("init")
        .arg("--db-path")
        .arg(&db_path)
        .assert()
        .success();

    (config_dir, db_path)
}
