//! Daily-score model and DTOs.

use chrono::NaiveDate;
use lifeboard_core::scoring::{score_color, ScoreColor};
use lifeboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A score row from the `daily_scores` table (one per user per day).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DailyScore {
    pub id: DbId,
    pub user_id: DbId,
    pub score_date: NaiveDate,
    pub do_points: i32,
    pub dont_points: i32,
    pub journal_point: i32,
    pub learning_point: i32,
    /// Stored sum of the four components; computed server-side on upsert.
    pub total_points: i32,
    pub journal_text: Option<String>,
    pub learning_text: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl DailyScore {
    /// Calendar color band for this day's total.
    pub fn color(&self) -> ScoreColor {
        score_color(self.total_points)
    }
}

/// DTO for upserting the score of a given day. `total_points` is never
/// accepted from the client.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertDailyScore {
    pub do_points: i32,
    pub dont_points: i32,
    pub journal_point: i32,
    pub learning_point: i32,
    pub journal_text: Option<String>,
    pub learning_text: Option<String>,
}
