//! Initialize app use case

use crate::domain::StorageKind;
use crate::error::ErrorCode;
use crate::infrastructure::{Config, JsonStore, TodoStore};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Create the config directory and file, record the database location and
/// provision an empty database.
///
/// For JSON the target is always reset to `[]`, which also recovers a
/// malformed database file.
pub fn init_app(config_dir: &Path, database: &str, kind: StorageKind) -> ErrorCode {
    let code = init_config_file(config_dir);
    if !code.is_success() {
        return code;
    }

    let code = write_config(config_dir, database, kind);
    if !code.is_success() {
        return code;
    }

    match kind {
        StorageKind::Json => init_json_database(PathBuf::from(database)),
        // MongoDB creates the database and collection on first write
        StorageKind::Mongodb => ErrorCode::Success,
    }
}

fn init_config_file(config_dir: &Path) -> ErrorCode {
    if let Err(e) = fs::create_dir_all(config_dir) {
        tracing::warn!(dir = %config_dir.display(), error = %e, "unable to create config directory");
        return ErrorCode::DirError;
    }

    let config_path = Config::file_path(config_dir);
    if let Err(e) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config_path)
    {
        tracing::warn!(path = %config_path.display(), error = %e, "unable to create config file");
        return ErrorCode::FileError;
    }

    ErrorCode::Success
}

fn write_config(config_dir: &Path, database: &str, kind: StorageKind) -> ErrorCode {
    let config = Config::new(database.to_string(), kind);
    match config.save_to_dir(config_dir) {
        Ok(()) => ErrorCode::Success,
        Err(e) => {
            tracing::warn!(error = %e, "unable to write config file");
            ErrorCode::DbWriteError
        }
    }
}

fn init_json_database(path: PathBuf) -> ErrorCode {
    JsonStore::new(path).write_todos(Vec::new()).error
}
