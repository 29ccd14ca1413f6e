//! rptodo - Personal to-do list manager
//!
//! Keeps an ordered to-do list in a JSON file or a MongoDB collection and
//! exposes add, complete, remove and list operations over either backend.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
#[cfg(feature = "http")]
pub mod http;
pub mod infrastructure;

pub use error::{ErrorCode, TodoError};
