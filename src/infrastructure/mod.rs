//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod json_store;
pub mod logging;
#[cfg(feature = "storage-mongodb")]
pub mod mongo_store;
pub mod store;

pub use config::Config;
pub use json_store::JsonStore;
#[cfg(feature = "storage-mongodb")]
pub use mongo_store::MongoStore;
pub use store::{open_store, DbResponse, TodoStore};
