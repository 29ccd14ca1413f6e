//! Domain layer - Business logic and domain models

pub mod storage_kind;
pub mod todo;

pub use storage_kind::StorageKind;
pub use todo::Todo;
