//! Storage backend contract

use crate::domain::{StorageKind, Todo};
use crate::error::{ErrorCode, Result};
use crate::infrastructure::{Config, JsonStore};

/// A full to-do list paired with the outcome of the read or write that
/// produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DbResponse {
    pub todo_list: Vec<Todo>,
    pub error: ErrorCode,
}

impl DbResponse {
    pub fn new(todo_list: Vec<Todo>, error: ErrorCode) -> Self {
        DbResponse { todo_list, error }
    }

    /// Successful response carrying `todo_list`
    pub fn ok(todo_list: Vec<Todo>) -> Self {
        DbResponse::new(todo_list, ErrorCode::Success)
    }

    /// Failed response with an empty list
    pub fn failed(error: ErrorCode) -> Self {
        DbResponse::new(Vec::new(), error)
    }

    pub fn into_result(self, action: &'static str) -> Result<Vec<Todo>> {
        self.error.into_result(action)?;
        Ok(self.todo_list)
    }
}

/// Persists and retrieves an entire to-do list as one unit.
///
/// Implementations never fail across this boundary: every failure is
/// reported as an [`ErrorCode`] in the returned [`DbResponse`]. A failed
/// read returns an empty list, never a partially decoded one. A failed
/// write echoes the input back and must leave the previously stored list
/// intact.
pub trait TodoStore: Send + Sync {
    /// Short name of the backend, for diagnostics
    fn backend_type(&self) -> &'static str;

    /// Read the current list
    fn read_todos(&self) -> DbResponse;

    /// Replace the stored list with `todo_list`
    fn write_todos(&self, todo_list: Vec<Todo>) -> DbResponse;
}

impl<T: TodoStore + ?Sized> TodoStore for Box<T> {
    fn backend_type(&self) -> &'static str {
        (**self).backend_type()
    }

    fn read_todos(&self) -> DbResponse {
        (**self).read_todos()
    }

    fn write_todos(&self, todo_list: Vec<Todo>) -> DbResponse {
        (**self).write_todos(todo_list)
    }
}

/// Open the backend named by `config`.
///
/// This is the only place the storage kind is inspected.
pub fn open_store(config: &Config) -> Result<Box<dyn TodoStore>> {
    let store: Box<dyn TodoStore> = match config.db_type {
        StorageKind::Json => Box::new(JsonStore::new(config.database.clone().into())),
        StorageKind::Mongodb => open_mongodb(config)?,
    };

    tracing::debug!(
        backend = store.backend_type(),
        location = %config.database,
        "opened to-do store"
    );
    Ok(store)
}

#[cfg(feature = "storage-mongodb")]
fn open_mongodb(config: &Config) -> Result<Box<dyn TodoStore>> {
    use crate::infrastructure::MongoStore;

    Ok(Box::new(MongoStore::new(
        &config.database,
        &config.mongodb.database,
        &config.mongodb.collection,
    )))
}

#[cfg(not(feature = "storage-mongodb"))]
fn open_mongodb(_config: &Config) -> Result<Box<dyn TodoStore>> {
    Err(crate::error::TodoError::FeatureNotEnabled(
        "storage-mongodb".to_string(),
    ))
}
