//! Application layer - Use cases and orchestration

pub mod init;
pub mod todoer;

pub use init::init_app;
pub use todoer::{CurrentTodo, Todoer};
