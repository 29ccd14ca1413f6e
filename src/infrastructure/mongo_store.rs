//! MongoDB collection backend
//!
//! Enable the `storage-mongodb` feature in Cargo.toml:
//!
//! ```toml
//! rptodo = { version = "0.1", features = ["storage-mongodb"] }
//! ```
//!
//! Each to-do is one document whose `_id` is its 0-based position, so the
//! list order survives the round trip. A write never edits the live
//! collection in place: the new list is inserted into a staging collection
//! which then replaces the live one through `renameCollection` with
//! `dropTarget`. A failure at any step leaves the previous list readable.

use crate::domain::Todo;
use crate::error::ErrorCode;
use crate::infrastructure::store::{DbResponse, TodoStore};
use mongodb::bson::{self, doc, Document};
use mongodb::sync::{Client, Database};

/// MongoDB storage backend.
///
/// Holds only connection settings; a client is opened inside each call and
/// dropped when the call returns.
#[derive(Debug, Clone)]
pub struct MongoStore {
    uri: String,
    database_name: String,
    collection_name: String,
}

impl MongoStore {
    /// Create a new MongoDB store
    ///
    /// # Arguments
    /// * `uri` - MongoDB connection string
    /// * `database` - Database name
    /// * `collection` - Collection name
    pub fn new(uri: &str, database: &str, collection: &str) -> Self {
        MongoStore {
            uri: uri.to_string(),
            database_name: database.to_string(),
            collection_name: collection.to_string(),
        }
    }

    fn staging_name(&self) -> String {
        format!("{}__staging", self.collection_name)
    }

    fn connect(&self) -> mongodb::error::Result<(Client, Database)> {
        let client = Client::with_uri_str(&self.uri)?;
        let db = client.database(&self.database_name);
        Ok((client, db))
    }

    fn to_documents(todo_list: &[Todo]) -> bson::ser::Result<Vec<Document>> {
        todo_list
            .iter()
            .enumerate()
            .map(|(position, todo)| {
                let mut document = bson::to_document(todo)?;
                document.insert("_id", position as i64);
                Ok(document)
            })
            .collect()
    }

    fn load(&self) -> mongodb::error::Result<Vec<Document>> {
        let (_client, db) = self.connect()?;
        db.collection::<Document>(&self.collection_name)
            .find(doc! {})
            .sort(doc! { "_id": 1 })
            .run()?
            .collect()
    }

    fn replace(&self, documents: Vec<Document>) -> mongodb::error::Result<()> {
        let (client, db) = self.connect()?;
        let staging = self.staging_name();

        // Leftovers from an interrupted write
        db.collection::<Document>(&staging).drop().run()?;
        db.create_collection(&staging).run()?;

        if !documents.is_empty() {
            db.collection::<Document>(&staging)
                .insert_many(documents)
                .run()?;
        }

        client
            .database("admin")
            .run_command(doc! {
                "renameCollection": format!("{}.{}", self.database_name, staging),
                "to": format!("{}.{}", self.database_name, self.collection_name),
                "dropTarget": true,
            })
            .run()?;
        Ok(())
    }
}

impl TodoStore for MongoStore {
    fn backend_type(&self) -> &'static str {
        "mongodb"
    }

    fn read_todos(&self) -> DbResponse {
        let documents = match self.load() {
            Ok(documents) => documents,
            Err(e) => {
                tracing::warn!(
                    collection = %self.collection_name,
                    error = %e,
                    "unable to load data from MongoDB"
                );
                return DbResponse::failed(ErrorCode::DbReadError);
            }
        };

        let decoded: bson::de::Result<Vec<Todo>> =
            documents.into_iter().map(bson::from_document).collect();

        match decoded {
            Ok(todo_list) => DbResponse::ok(todo_list),
            Err(e) => {
                tracing::warn!(
                    collection = %self.collection_name,
                    error = %e,
                    "stored document is not a valid to-do"
                );
                DbResponse::failed(ErrorCode::DecodeError)
            }
        }
    }

    fn write_todos(&self, todo_list: Vec<Todo>) -> DbResponse {
        let documents = match Self::to_documents(&todo_list) {
            Ok(documents) => documents,
            Err(e) => {
                tracing::warn!(error = %e, "unable to encode to-do list");
                return DbResponse::new(todo_list, ErrorCode::DbWriteError);
            }
        };

        match self.replace(documents) {
            Ok(()) => {
                tracing::debug!(
                    collection = %self.collection_name,
                    count = todo_list.len(),
                    "wrote to-do list"
                );
                DbResponse::ok(todo_list)
            }
            Err(e) => {
                tracing::warn!(
                    collection = %self.collection_name,
                    error = %e,
                    "unable to write to-do list to MongoDB"
                );
                DbResponse::new(todo_list, ErrorCode::DbWriteError)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    // Tests marked #[ignore] require a running MongoDB instance
    // Run with: cargo test --features storage-mongodb -- --ignored

    use super::*;

    const TEST_URI: &str = "mongodb://localhost:27017";

    #[test]
    fn test_documents_carry_position() {
        let todos = vec![Todo::new(&["first"], 1), Todo::new(&["second"], 3)];
        let documents = MongoStore::to_documents(&todos).unwrap();

        assert_eq!(documents.len(), 2);
        assert_eq!(documents[0].get_i64("_id").unwrap(), 0);
        assert_eq!(documents[1].get_i64("_id").unwrap(), 1);
        assert_eq!(documents[1].get_str("Description").unwrap(), "second.");
    }

    #[test]
    fn test_document_decodes_ignoring_id() {
        let document = doc! {
            "_id": 4_i64,
            "Description": "Get some milk.",
            "Priority": 2_i32,
            "Done": true,
        };
        let todo: Todo = bson::from_document(document).unwrap();
        assert_eq!(todo.description, "Get some milk.");
        assert_eq!(todo.priority, 2);
        assert!(todo.done);
    }

    #[test]
    fn test_invalid_uri_is_read_error() {
        let store = MongoStore::new("not-a-mongodb-uri", "rptodo_test", "items");

        let response = store.read_todos();
        assert_eq!(response.error, ErrorCode::DbReadError);
        assert!(response.todo_list.is_empty());
    }

    #[test]
    fn test_invalid_uri_echoes_write() {
        let store = MongoStore::new("not-a-mongodb-uri", "rptodo_test", "items");
        let todos = vec![Todo::new(&["keep", "me"], 2)];

        let response = store.write_todos(todos.clone());
        assert_eq!(response.error, ErrorCode::DbWriteError);
        assert_eq!(response.todo_list, todos);
    }

    #[test]
    #[ignore] // Requires MongoDB instance
    fn test_write_then_read_preserves_order() {
        let store = MongoStore::new(TEST_URI, "rptodo_test", "order");
        let todos = vec![
            Todo::new(&["one"], 1),
            Todo::new(&["two"], 2),
            Todo::new(&["three"], 3),
        ];

        assert_eq!(store.write_todos(todos.clone()).error, ErrorCode::Success);

        let response = store.read_todos();
        assert_eq!(response.error, ErrorCode::Success);
        assert_eq!(response.todo_list, todos);
    }

    #[test]
    #[ignore] // Requires MongoDB instance
    fn test_write_empty_list_clears_collection() {
        let store = MongoStore::new(TEST_URI, "rptodo_test", "clear");

        store.write_todos(vec![Todo::new(&["temp"], 2)]);
        assert_eq!(store.write_todos(Vec::new()).error, ErrorCode::Success);

        let response = store.read_todos();
        assert_eq!(response.error, ErrorCode::Success);
        assert!(response.todo_list.is_empty());
    }
}
