//! HTTP adapter over the to-do service
//!
//! Requires the `http` feature.
//!
//! | Route                        | Operation   |
//! |------------------------------|-------------|
//! | `GET /`, `GET /todos`        | list        |
//! | `POST /todos?description=..` | add         |
//! | `POST /todos/{id}/done`      | set done    |
//! | `DELETE /todos/{id}`         | remove      |

use crate::application::{CurrentTodo, Todoer};
use crate::domain::todo::DEFAULT_PRIORITY;
use crate::domain::Todo;
use crate::error::{ErrorCode, Result, TodoError};
use crate::infrastructure::TodoStore;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;

pub type SharedTodoer = Arc<Todoer<Box<dyn TodoStore>>>;

/// A to-do together with its current id
#[derive(Debug, Serialize)]
pub struct TodoEntry {
    pub id: usize,
    #[serde(flatten)]
    pub todo: Todo,
}

#[derive(Debug, Deserialize)]
pub struct NewTodo {
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: i64,
}

fn default_priority() -> i64 {
    DEFAULT_PRIORITY
}

pub fn router(todoer: SharedTodoer) -> Router {
    Router::new()
        .route("/", get(list_todos))
        .route("/todos", get(list_todos).post(add_todo))
        .route("/todos/{todo_id}/done", post(mark_todo_done))
        .route("/todos/{todo_id}", axum::routing::delete(delete_todo))
        .with_state(todoer)
}

/// Serve the router on `addr` until the process is stopped
pub fn serve(addr: &str, todoer: Todoer<Box<dyn TodoStore>>) -> Result<()> {
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| TodoError::Config(format!("Invalid listen address '{}': {}", addr, e)))?;
    let app = router(Arc::new(todoer));

    let rt = tokio::runtime::Runtime::new()?;
    tracing::info!(%addr, "serving to-do list over HTTP");

    rt.block_on(async {
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;
        Ok::<(), TodoError>(())
    })
}

fn error_response(status: StatusCode, detail: &str) -> Response {
    (status, Json(json!({ "detail": detail }))).into_response()
}

/// The service is synchronous, so each call runs on the blocking pool
async fn run_blocking<T, F>(todoer: SharedTodoer, f: F) -> std::result::Result<T, Response>
where
    F: FnOnce(&Todoer<Box<dyn TodoStore>>) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&todoer))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "to-do task failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal error")
        })
}

fn mutation_response(result: CurrentTodo, failure: &str) -> Response {
    match result.error {
        ErrorCode::Success => {
            Json(json!({ "status": "success", "todo": result.todo })).into_response()
        }
        ErrorCode::IdError => error_response(StatusCode::NOT_FOUND, "To-do item not found"),
        _ => error_response(StatusCode::BAD_REQUEST, failure),
    }
}

async fn list_todos(State(todoer): State<SharedTodoer>) -> Response {
    let response = match run_blocking(todoer, |t| t.get_todo_list()).await {
        Ok(response) => response,
        Err(e) => return e,
    };

    if !response.error.is_success() {
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to read to-do list",
        );
    }

    let entries: Vec<TodoEntry> = response
        .todo_list
        .into_iter()
        .enumerate()
        .map(|(index, todo)| TodoEntry {
            id: index + 1,
            todo,
        })
        .collect();
    Json(entries).into_response()
}

async fn add_todo(State(todoer): State<SharedTodoer>, Query(new): Query<NewTodo>) -> Response {
    match run_blocking(todoer, move |t| t.add(&[new.description], new.priority)).await {
        Ok(result) => mutation_response(result, "Failed to add to-do"),
        Err(e) => e,
    }
}

async fn mark_todo_done(State(todoer): State<SharedTodoer>, Path(todo_id): Path<i64>) -> Response {
    match run_blocking(todoer, move |t| t.set_done(todo_id)).await {
        Ok(result) => mutation_response(result, "Failed to mark to-do as done"),
        Err(e) => e,
    }
}

async fn delete_todo(State(todoer): State<SharedTodoer>, Path(todo_id): Path<i64>) -> Response {
    match run_blocking(todoer, move |t| t.remove(todo_id)).await {
        Ok(result) => mutation_response(result, "Failed to delete to-do"),
        Err(e) => e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::JsonStore;
    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use std::fs;
    use tempfile::TempDir;
    use tower::ServiceExt;

    fn app_with(temp: &TempDir, content: &str) -> Router {
        let path = temp.path().join("todo.json");
        fs::write(&path, content).unwrap();
        let store: Box<dyn TodoStore> = Box::new(JsonStore::new(path));
        router(Arc::new(Todoer::new(store)))
    }

    const MILK: &str = r#"[{"Description": "Get some milk.", "Priority": 2, "Done": false}]"#;

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_list_todos_with_ids() {
        let temp = TempDir::new().unwrap();
        let app = app_with(&temp, MILK);

        let (status, body) = send(&app, "GET", "/todos").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([{ "id": 1, "Description": "Get some milk.", "Priority": 2, "Done": false }])
        );

        let (status, _) = send(&app, "GET", "/").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_add_todo() {
        let temp = TempDir::new().unwrap();
        let app = app_with(&temp, "[]");

        let (status, body) = send(&app, "POST", "/todos?description=Walk%20the%20dog&priority=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "success");
        assert_eq!(body["todo"]["Description"], "Walk the dog.");
        assert_eq!(body["todo"]["Priority"], 1);

        let (_, list) = send(&app, "GET", "/todos").await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mark_done_and_not_found() {
        let temp = TempDir::new().unwrap();
        let app = app_with(&temp, MILK);

        let (status, body) = send(&app, "POST", "/todos/1/done").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["todo"]["Done"], true);

        let (status, body) = send(&app, "POST", "/todos/99/done").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["detail"], "To-do item not found");
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let temp = TempDir::new().unwrap();
        let app = app_with(&temp, MILK);

        let (status, body) = send(&app, "DELETE", "/todos/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["todo"]["Description"], "Get some milk.");

        let (status, _) = send(&app, "DELETE", "/todos/1").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_broken_store_maps_to_failure() {
        let temp = TempDir::new().unwrap();
        let app = app_with(&temp, "{ not json");

        let (status, _) = send(&app, "GET", "/todos").await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

        let (status, body) = send(&app, "POST", "/todos/1/done").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Failed to mark to-do as done");

        let (status, body) = send(&app, "POST", "/todos?description=x").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["detail"], "Failed to add to-do");
    }
}
