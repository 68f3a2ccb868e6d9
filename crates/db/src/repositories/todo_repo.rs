//! Repository for the `todo_items` table.

use lifeboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::todo::{CreateTodoItem, TodoItem, UpdateTodoItem};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, label, kind, is_done, position, created_at";

/// Provides CRUD operations for todo / not-todo items.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new item, returning the created row.
    ///
    /// If `kind` is `None` in the input, defaults to `todo`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateTodoItem,
    ) -> Result<TodoItem, sqlx::Error> {
        let query = format!(
            "INSERT INTO todo_items (user_id, label, kind, position)
             VALUES ($1, $2, COALESCE($3, 'todo'), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(user_id)
            .bind(&input.label)
            .bind(&input.kind)
            .bind(input.position)
            .fetch_one(pool)
            .await
    }

    /// List the user's items grouped by kind, then by position.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<TodoItem>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM todo_items
             WHERE user_id = $1
             ORDER BY kind, position, created_at"
        );
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update an item. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row matches `id` for this owner.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateTodoItem,
    ) -> Result<Option<TodoItem>, sqlx::Error> {
        let query = format!(
            "UPDATE todo_items SET
                label = COALESCE($3, label),
                kind = COALESCE($4, kind),
                is_done = COALESCE($5, is_done),
                position = COALESCE($6, position)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.label)
            .bind(&input.kind)
            .bind(input.is_done)
            .bind(input.position)
            .fetch_optional(pool)
            .await
    }

    /// Flip an item's done state, returning the updated row.
    ///
    /// Returns `None` if no row matches `id` for this owner.
    pub async fn toggle_done(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<TodoItem>, sqlx::Error> {
        let query = format!(
            "UPDATE todo_items SET is_done = NOT is_done
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TodoItem>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete an item. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todo_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
