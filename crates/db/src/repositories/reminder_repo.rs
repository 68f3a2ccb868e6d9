//! Repository for the `reminders` table.

use lifeboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::reminder::{CreateReminder, DueReminderContext, Reminder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, habit_id, channel, when_time, weekdays, enabled, created_at";

/// Provides CRUD operations for reminders.
pub struct ReminderRepo;

impl ReminderRepo {
    /// Insert a new reminder for a habit, returning the created row.
    ///
    /// If `channel` is `None` in the input, defaults to `email`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        habit_id: DbId,
        input: &CreateReminder,
    ) -> Result<Reminder, sqlx::Error> {
        let query = format!(
            "INSERT INTO reminders (user_id, habit_id, channel, when_time, weekdays)
             VALUES ($1, $2, COALESCE($3, 'email'), $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(user_id)
            .bind(habit_id)
            .bind(&input.channel)
            .bind(input.when_time)
            .bind(&input.weekdays)
            .fetch_one(pool)
            .await
    }

    /// List the reminders attached to one habit.
    pub async fn list_for_habit(
        pool: &PgPool,
        user_id: DbId,
        habit_id: DbId,
    ) -> Result<Vec<Reminder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reminders
             WHERE user_id = $1 AND habit_id = $2
             ORDER BY when_time"
        );
        sqlx::query_as::<_, Reminder>(&query)
            .bind(user_id)
            .bind(habit_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a reminder. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reminders WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Load every enabled reminder joined with the recipient email and
    /// habit name, for one scheduler tick. Not user-scoped: the scheduler
    /// scans the whole table.
    pub async fn list_enabled_with_context(
        pool: &PgPool,
    ) -> Result<Vec<DueReminderContext>, sqlx::Error> {
        sqlx::query_as::<_, DueReminderContext>(
            "SELECT r.id, r.channel, r.when_time, r.weekdays,
                    u.email AS user_email, h.name AS habit_name
             FROM reminders r
             JOIN users u ON u.id = r.user_id
             LEFT JOIN habits h ON h.id = r.habit_id
             WHERE r.enabled = TRUE AND u.is_active = TRUE",
        )
        .fetch_all(pool)
        .await
    }
}
