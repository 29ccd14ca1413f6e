//! To-do list operations

use crate::domain::Todo;
use crate::error::{ErrorCode, Result};
use crate::infrastructure::{DbResponse, TodoStore};

/// The to-do affected by an operation paired with its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentTodo {
    pub todo: Option<Todo>,
    pub error: ErrorCode,
}

impl CurrentTodo {
    pub fn new(todo: Option<Todo>, error: ErrorCode) -> Self {
        CurrentTodo { todo, error }
    }

    fn failed(error: ErrorCode) -> Self {
        CurrentTodo::new(None, error)
    }

    /// Convert into a `Result`, tagging failures with the attempted action
    pub fn into_result(self, action: &'static str) -> Result<Option<Todo>> {
        self.error.into_result(action)?;
        Ok(self.todo)
    }
}

/// Applies list operations on top of a [`TodoStore`].
///
/// Every call reads the whole list, changes it in memory and writes the
/// whole list back. Nothing is cached between calls.
///
/// To-dos are addressed by their 1-based position at read time. Removing a
/// to-do shifts the ids of every to-do after it, so callers must list again
/// before reusing an id. There is no locking: two processes updating the
/// same store concurrently can lose one another's changes.
#[derive(Debug, Clone)]
pub struct Todoer<S: TodoStore> {
    store: S,
}

impl<S: TodoStore> Todoer<S> {
    pub fn new(store: S) -> Self {
        Todoer { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a new pending to-do built from `description` words
    pub fn add<D: AsRef<str>>(&self, description: &[D], priority: i64) -> CurrentTodo {
        let todo = Todo::new(description, priority);

        let read = self.store.read_todos();
        if !read.error.is_success() {
            return CurrentTodo::failed(read.error);
        }

        let mut todo_list = read.todo_list;
        todo_list.push(todo.clone());

        let write = self.store.write_todos(todo_list);
        tracing::info!(id = write.todo_list.len(), error = %write.error, "added to-do");
        CurrentTodo::new(Some(todo), write.error)
    }

    /// Return the stored list as read
    pub fn get_todo_list(&self) -> DbResponse {
        self.store.read_todos()
    }

    /// Mark the to-do at `todo_id` as done
    pub fn set_done(&self, todo_id: i64) -> CurrentTodo {
        let read = self.store.read_todos();
        if !read.error.is_success() {
            return CurrentTodo::failed(read.error);
        }

        let mut todo_list = read.todo_list;
        let Some(index) = index_of(todo_id, todo_list.len()) else {
            tracing::debug!(todo_id, len = todo_list.len(), "to-do id out of range");
            return CurrentTodo::failed(ErrorCode::IdError);
        };

        todo_list[index].done = true;
        let todo = todo_list[index].clone();

        let write = self.store.write_todos(todo_list);
        tracing::info!(todo_id, error = %write.error, "completed to-do");
        CurrentTodo::new(Some(todo), write.error)
    }

    /// Remove the to-do at `todo_id` and return it
    pub fn remove(&self, todo_id: i64) -> CurrentTodo {
        let read = self.store.read_todos();
        if !read.error.is_success() {
            return CurrentTodo::failed(read.error);
        }

        let mut todo_list = read.todo_list;
        let Some(index) = index_of(todo_id, todo_list.len()) else {
            tracing::debug!(todo_id, len = todo_list.len(), "to-do id out of range");
            return CurrentTodo::failed(ErrorCode::IdError);
        };

        let todo = todo_list.remove(index);

        let write = self.store.write_todos(todo_list);
        tracing::info!(todo_id, error = %write.error, "removed to-do");
        CurrentTodo::new(Some(todo), write.error)
    }

    /// Replace the stored list with an empty one
    pub fn remove_all(&self) -> CurrentTodo {
        let write = self.store.write_todos(Vec::new());
        tracing::info!(error = %write.error, "removed all to-dos");
        CurrentTodo::new(None, write.error)
    }
}

/// Map a 1-based id onto a list index, if it is in `[1, len]`
fn index_of(todo_id: i64, len: usize) -> Option<usize> {
    let index = usize::try_from(todo_id).ok()?.checked_sub(1)?;
    (index < len).then_some(index)
}
