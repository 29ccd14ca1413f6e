//! Configuration management

use crate::domain::storage_kind::DEFAULT_MONGODB_URI;
use crate::domain::StorageKind;
use crate::error::{Result, TodoError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "rptodo";
pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const CONFIG_DIR_ENV: &str = "RPTODO_CONFIG_DIR";

pub const DEFAULT_MONGODB_DATABASE: &str = "todoappdb";
pub const DEFAULT_MONGODB_COLLECTION: &str = "items";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File path for the JSON backend, connection string for MongoDB
    pub database: String,
    pub db_type: StorageKind,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub mongodb: MongoSettings,
}

/// Where the MongoDB backend keeps its documents
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MongoSettings {
    pub database: String,
    pub collection: String,
}

impl Default for MongoSettings {
    fn default() -> Self {
        MongoSettings {
            database: DEFAULT_MONGODB_DATABASE.to_string(),
            collection: DEFAULT_MONGODB_COLLECTION.to_string(),
        }
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new(database: String, db_type: StorageKind) -> Self {
        Config {
            database,
            db_type,
            created: Utc::now(),
            mongodb: MongoSettings::default(),
        }
    }

    /// Resolve the config directory.
    /// Checks RPTODO_CONFIG_DIR first, then the platform config directory.
    pub fn default_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        dirs::config_dir()
            .map(|dir| dir.join(APP_NAME))
            .ok_or_else(|| {
                TodoError::Config(format!(
                    "Could not determine a config directory. Set {} to choose one.",
                    CONFIG_DIR_ENV
                ))
            })
    }

    /// Path of config.toml inside `dir`
    pub fn file_path(dir: &Path) -> PathBuf {
        dir.join(CONFIG_FILE_NAME)
    }

    /// Default database location for a storage kind.
    /// JSON lives at `~/.<user>_todo.json`; MongoDB points at a local server.
    pub fn default_database(kind: StorageKind) -> String {
        match kind {
            StorageKind::Json => {
                let path = dirs::home_dir()
                    .map(|home| {
                        let stem = home
                            .file_name()
                            .map(|name| name.to_string_lossy().to_string())
                            .unwrap_or_default();
                        home.join(format!(".{}_todo.json", stem))
                    })
                    .unwrap_or_else(|| PathBuf::from("todo.json"));
                path.to_string_lossy().to_string()
            }
            StorageKind::Mongodb => DEFAULT_MONGODB_URI.to_string(),
        }
    }

    /// Load config from config.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = Self::file_path(dir);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TodoError::NotInitialized(config_path.clone())
            } else {
                TodoError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| TodoError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Load config from the default directory
    pub fn load() -> Result<Self> {
        Self::load_from_dir(&Self::default_dir()?)
    }

    /// Save config to config.toml in the given directory
    pub fn save_to_dir(&self, dir: &Path) -> Result<()> {
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| TodoError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(Self::file_path(dir), contents)?;

        Ok(())
    }
}
