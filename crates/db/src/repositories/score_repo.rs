//! Repository for the `daily_scores` table.

use chrono::NaiveDate;
use lifeboard_core::scoring;
use lifeboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::score::{DailyScore, UpsertDailyScore};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, score_date, do_points, dont_points, journal_point, \
                       learning_point, total_points, journal_text, learning_text, \
                       created_at, updated_at";

/// Provides operations for per-day scores.
pub struct ScoreRepo;

impl ScoreRepo {
    /// Insert or replace the score for a given day.
    ///
    /// `total_points` is always recomputed server-side from the four
    /// components; the `uq_daily_score_once_per_day` constraint drives
    /// the conflict target.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        score_date: NaiveDate,
        input: &UpsertDailyScore,
    ) -> Result<DailyScore, sqlx::Error> {
        let total = scoring::total_points(
            input.do_points,
            input.dont_points,
            input.journal_point,
            input.learning_point,
        );
        let query = format!(
            "INSERT INTO daily_scores
                 (user_id, score_date, do_points, dont_points, journal_point,
                  learning_point, total_points, journal_text, learning_text)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             ON CONFLICT ON CONSTRAINT uq_daily_score_once_per_day DO UPDATE SET
                 do_points = EXCLUDED.do_points,
                 dont_points = EXCLUDED.dont_points,
                 journal_point = EXCLUDED.journal_point,
                 learning_point = EXCLUDED.learning_point,
                 total_points = EXCLUDED.total_points,
                 journal_text = EXCLUDED.journal_text,
                 learning_text = EXCLUDED.learning_text
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DailyScore>(&query)
            .bind(user_id)
            .bind(score_date)
            .bind(input.do_points)
            .bind(input.dont_points)
            .bind(input.journal_point)
            .bind(input.learning_point)
            .bind(total)
            .bind(&input.journal_text)
            .bind(&input.learning_text)
            .fetch_one(pool)
            .await
    }

    /// Find the score for a specific day.
    pub async fn find_by_date(
        pool: &PgPool,
        user_id: DbId,
        score_date: NaiveDate,
    ) -> Result<Option<DailyScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_scores WHERE user_id = $1 AND score_date = $2"
        );
        sqlx::query_as::<_, DailyScore>(&query)
            .bind(user_id)
            .bind(score_date)
            .fetch_optional(pool)
            .await
    }

    /// List scores in an inclusive date range, oldest first (calendar view).
    pub async fn list_range(
        pool: &PgPool,
        user_id: DbId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<DailyScore>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM daily_scores
             WHERE user_id = $1 AND score_date BETWEEN $2 AND $3
             ORDER BY score_date ASC"
        );
        sqlx::query_as::<_, DailyScore>(&query)
            .bind(user_id)
            .bind(from)
            .bind(to)
            .fetch_all(pool)
            .await
    }
}
