//! Repository for the `habit_logs` table (one row per habit per day,
//! enforced by `uq_habit_log_once_per_day`).

use chrono::NaiveDate;
use lifeboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::habit::HabitLog;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, habit_id, log_date, completed, created_at";

/// Provides operations on habit completion logs.
pub struct HabitLogRepo;

impl HabitLogRepo {
    /// Insert a completed log for the given day, returning the row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        habit_id: DbId,
        log_date: NaiveDate,
    ) -> Result<HabitLog, sqlx::Error> {
        let query = format!(
            "INSERT INTO habit_logs (user_id, habit_id, log_date, completed)
             VALUES ($1, $2, $3, TRUE)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, HabitLog>(&query)
            .bind(user_id)
            .bind(habit_id)
            .bind(log_date)
            .fetch_one(pool)
            .await
    }

    /// Find the log for a habit on a specific day.
    pub async fn find_for_day(
        pool: &PgPool,
        user_id: DbId,
        habit_id: DbId,
        log_date: NaiveDate,
    ) -> Result<Option<HabitLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM habit_logs
             WHERE user_id = $1 AND habit_id = $2 AND log_date = $3"
        );
        sqlx::query_as::<_, HabitLog>(&query)
            .bind(user_id)
            .bind(habit_id)
            .bind(log_date)
            .fetch_optional(pool)
            .await
    }

    /// Delete the log for a habit on a specific day (unchecking it).
    /// Returns `true` if a row was removed.
    pub async fn delete_for_day(
        pool: &PgPool,
        user_id: DbId,
        habit_id: DbId,
        log_date: NaiveDate,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM habit_logs WHERE user_id = $1 AND habit_id = $2 AND log_date = $3",
        )
        .bind(user_id)
        .bind(habit_id)
        .bind(log_date)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All completed dates for a habit, newest first (streak input).
    pub async fn completed_dates(
        pool: &PgPool,
        user_id: DbId,
        habit_id: DbId,
    ) -> Result<Vec<NaiveDate>, sqlx::Error> {
        let rows: Vec<(NaiveDate,)> = sqlx::query_as(
            "SELECT log_date FROM habit_logs
             WHERE user_id = $1 AND habit_id = $2 AND completed = TRUE
             ORDER BY log_date DESC",
        )
        .bind(user_id)
        .bind(habit_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(|(d,)| d).collect())
    }

    /// Count a user's completed logs on a given day (daily summary).
    pub async fn count_completed_on(
        pool: &PgPool,
        user_id: DbId,
        log_date: NaiveDate,
    ) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM habit_logs
             WHERE user_id = $1 AND log_date = $2 AND completed = TRUE",
        )
        .bind(user_id)
        .bind(log_date)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}
