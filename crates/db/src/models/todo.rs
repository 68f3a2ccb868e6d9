//! Todo / not-todo item model and DTOs.

use lifeboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Allowed values for `todo_items.kind`.
pub const TODO_KINDS: &[&str] = &["todo", "not_todo"];

/// A todo row from the `todo_items` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TodoItem {
    pub id: DbId,
    pub user_id: DbId,
    pub label: String,
    /// `todo` (things to do) or `not_todo` (things to avoid).
    pub kind: String,
    pub is_done: bool,
    pub position: i32,
    pub created_at: Timestamp,
}

/// DTO for creating a todo item.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodoItem {
    pub label: String,
    /// Defaults to `todo` if omitted.
    pub kind: Option<String>,
    pub position: Option<i32>,
}

/// DTO for updating a todo item. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTodoItem {
    pub label: Option<String>,
    pub kind: Option<String>,
    pub is_done: Option<bool>,
    pub position: Option<i32>,
}
