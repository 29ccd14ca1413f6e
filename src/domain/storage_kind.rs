//! Storage backend kinds

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Which backend holds the to-do list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageKind {
    /// A single JSON document on disk
    #[default]
    Json,
    /// One MongoDB document per to-do
    #[serde(alias = "mongo")]
    Mongodb,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Json => "json",
            StorageKind::Mongodb => "mongodb",
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(StorageKind::Json),
            "mongodb" | "mongo" => Ok(StorageKind::Mongodb),
            _ => Err(format!(
                "Invalid database type: '{}'. Valid types are: json, mongodb",
                s
            )),
        }
    }
}
