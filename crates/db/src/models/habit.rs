//! Habit and habit-log models and DTOs.

use chrono::NaiveDate;
use lifeboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A habit row from the `habits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Habit {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    /// `daily`, `weekly`, or `custom` (see `custom_days`).
    pub frequency: String,
    /// Weekday csv for `custom` frequency, Monday = 0 (e.g. `"0,2,4"`).
    pub custom_days: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub created_at: Timestamp,
}

/// DTO for creating a new habit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHabit {
    pub name: String,
    /// Defaults to `daily` if omitted.
    pub frequency: Option<String>,
    pub custom_days: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// DTO for updating an existing habit. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHabit {
    pub name: Option<String>,
    pub frequency: Option<String>,
    pub custom_days: Option<String>,
    pub category: Option<String>,
    pub color: Option<String>,
    pub icon: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// A habit-log row from the `habit_logs` table (one per habit per day).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HabitLog {
    pub id: DbId,
    pub user_id: DbId,
    pub habit_id: DbId,
    pub log_date: NaiveDate,
    pub completed: bool,
    pub created_at: Timestamp,
}
