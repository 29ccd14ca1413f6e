//! To-do record

use serde::{Deserialize, Serialize};

pub const DEFAULT_PRIORITY: i64 = 2;

/// A single to-do entry.
///
/// Records carry no identifier of their own: a record is addressed by its
/// 1-based position in the list it was read from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Todo {
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: i64,
    #[serde(default)]
    pub done: bool,
}

fn default_priority() -> i64 {
    DEFAULT_PRIORITY
}

impl Todo {
    /// Build a pending to-do from description words.
    pub fn new<S: AsRef<str>>(description: &[S], priority: i64) -> Self {
        Todo {
            description: normalize_description(description),
            priority,
            done: false,
        }
    }
}

/// Join words with single spaces and terminate the sentence with a period
/// unless it already ends in `.`, `!` or `?`.
pub fn normalize_description<S: AsRef<str>>(parts: &[S]) -> String {
    let mut text = parts
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ");

    if !text.ends_with(['.', '!', '?']) {
        text.push('.');
    }
    text
}
