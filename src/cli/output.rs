//! Output formatting utilities

use crate::domain::Todo;

const COLUMNS: [&str; 4] = ["ID.  ", "| Priority  ", "| Done  ", "| Description  "];

/// Format the to-do list as a table, ids counted from 1
pub fn format_todo_list(todos: &[Todo]) -> String {
    if todos.is_empty() {
        return "There are no tasks in the to-do list yet".to_string();
    }

    let headers: String = COLUMNS.concat();
    let rule = "-".repeat(headers.len());

    let mut output = String::new();
    output.push_str("\nto-do list:\n\n");
    output.push_str(&headers);
    output.push('\n');
    output.push_str(&rule);
    output.push('\n');

    for (id, todo) in todos.iter().enumerate() {
        output.push_str(&format_row(id + 1, todo));
        output.push('\n');
    }

    output.push_str(&rule);
    output.push('\n');
    output
}

fn format_row(id: usize, todo: &Todo) -> String {
    let id = id.to_string();
    let priority = format!("({})", todo.priority);
    let done = if todo.done { "True" } else { "False" };

    format!(
        "{:<id_w$}| {:<pri_w$}| {:<done_w$}| {}",
        id,
        priority,
        done,
        todo.description,
        id_w = COLUMNS[0].len(),
        pri_w = COLUMNS[1].len() - 2,
        done_w = COLUMNS[2].len() - 2,
    )
}

/// Confirmation line printed after adding a to-do
pub fn format_added(todo: &Todo) -> String {
    format!(
        "to-do: \"{}\" was added with priority: {}",
        todo.description, todo.priority
    )
}

/// Confirmation line printed after completing a to-do
pub fn format_completed(todo_id: i64, todo: &Todo) -> String {
    format!("to-do # {} \"{}\" completed!", todo_id, todo.description)
}

/// Confirmation line printed after removing a to-do
pub fn format_removed(todo_id: i64, todo: &Todo) -> String {
    format!("to-do # {}: '{}' was removed", todo_id, todo.description)
}
