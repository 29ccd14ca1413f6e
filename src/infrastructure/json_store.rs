//! Flat JSON document backend

use crate::domain::Todo;
use crate::error::ErrorCode;
use crate::infrastructure::store::{DbResponse, TodoStore};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Stores the whole to-do list as one JSON array in a single file
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: PathBuf) -> Self {
        JsonStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Render a list the way it is laid out on disk: 4-space indentation,
    /// `[]` for an empty list.
    pub fn encode(todo_list: &[Todo]) -> serde_json::Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        todo_list.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Write `content` to a fresh temp file next to the target, then
    /// persist it over the target so readers see either the old or the new
    /// list. Each call stages its own file.
    fn write_atomic(&self, content: &[u8]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        if !dir.exists() {
            fs::create_dir_all(dir)?;
        }

        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(content)?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path)?;
        Ok(())
    }
}

impl TodoStore for JsonStore {
    fn backend_type(&self) -> &'static str {
        "json"
    }

    fn read_todos(&self) -> DbResponse {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.path.display(), "database file not found");
                return DbResponse::failed(ErrorCode::DbReadError);
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unable to read database file");
                return DbResponse::failed(ErrorCode::DbReadError);
            }
        };

        match serde_json::from_str::<Vec<Todo>>(&contents) {
            Ok(todo_list) => DbResponse::ok(todo_list),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "database file is not a valid to-do list");
                DbResponse::failed(ErrorCode::DecodeError)
            }
        }
    }

    fn write_todos(&self, todo_list: Vec<Todo>) -> DbResponse {
        let written = Self::encode(&todo_list)
            .map_err(io::Error::from)
            .and_then(|content| self.write_atomic(&content));

        match written {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), count = todo_list.len(), "wrote to-do list");
                DbResponse::ok(todo_list)
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "unable to write database file");
                DbResponse::new(todo_list, ErrorCode::DbWriteError)
            }
        }
    }
}
