//! Repository for the `habits` table.

use lifeboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::habit::{CreateHabit, Habit, UpdateHabit};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, name, frequency, custom_days, category, color, icon, \
                       start_date, end_date, created_at";

/// Provides CRUD operations for habits.
pub struct HabitRepo;

impl HabitRepo {
    /// Insert a new habit, returning the created row.
    ///
    /// If `frequency` is `None` in the input, defaults to `daily`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateHabit,
    ) -> Result<Habit, sqlx::Error> {
        let query = format!(
            "INSERT INTO habits (user_id, name, frequency, custom_days, category, color, icon, start_date, end_date)
             VALUES ($1, $2, COALESCE($3, 'daily'), $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Habit>(&query)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.frequency)
            .bind(&input.custom_days)
            .bind(&input.category)
            .bind(&input.color)
            .bind(&input.icon)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_one(pool)
            .await
    }

    /// Find a habit by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Habit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM habits WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Habit>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the user's habits, oldest first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Habit>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM habits WHERE user_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Habit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update a habit. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row matches `id` for this owner.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateHabit,
    ) -> Result<Option<Habit>, sqlx::Error> {
        let query = format!(
            "UPDATE habits SET
                name = COALESCE($3, name),
                frequency = COALESCE($4, frequency),
                custom_days = COALESCE($5, custom_days),
                category = COALESCE($6, category),
                color = COALESCE($7, color),
                icon = COALESCE($8, icon),
                start_date = COALESCE($9, start_date),
                end_date = COALESCE($10, end_date)
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Habit>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.name)
            .bind(&input.frequency)
            .bind(&input.custom_days)
            .bind(&input.category)
            .bind(&input.color)
            .bind(&input.icon)
            .bind(input.start_date)
            .bind(input.end_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete a habit (hard delete; logs and reminders cascade).
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM habits WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
