//! Repository for the `journal_entries` table.

use lifeboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::journal::{CreateJournalEntry, JournalEntry, UpdateJournalEntry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, entry_date, title, content, created_at, updated_at";

/// Provides CRUD operations for journal entries.
pub struct JournalRepo;

impl JournalRepo {
    /// Insert a new entry, returning the created row.
    ///
    /// If `entry_date` is `None` in the input, defaults to today.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateJournalEntry,
    ) -> Result<JournalEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO journal_entries (user_id, entry_date, title, content)
             VALUES ($1, COALESCE($2, CURRENT_DATE), $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JournalEntry>(&query)
            .bind(user_id)
            .bind(input.entry_date)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<JournalEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM journal_entries WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, JournalEntry>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the user's entries, newest entry date first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<JournalEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM journal_entries
             WHERE user_id = $1
             ORDER BY entry_date DESC, id DESC"
        );
        sqlx::query_as::<_, JournalEntry>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update an entry. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row matches `id` for this owner.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateJournalEntry,
    ) -> Result<Option<JournalEntry>, sqlx::Error> {
        let query = format!(
            "UPDATE journal_entries SET
                entry_date = COALESCE($3, entry_date),
                title = COALESCE($4, title),
                content = COALESCE($5, content)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JournalEntry>(&query)
            .bind(id)
            .bind(user_id)
            .bind(input.entry_date)
            .bind(&input.title)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
