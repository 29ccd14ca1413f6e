//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod prompt;

pub use commands::{Cli, Commands};
pub use output::{format_added, format_completed, format_removed, format_todo_list};
pub use prompt::confirm_stdin;
