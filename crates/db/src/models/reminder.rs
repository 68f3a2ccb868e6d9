//! Reminder model and DTOs.

use chrono::NaiveTime;
use lifeboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Allowed values for `reminders.channel`.
pub const REMINDER_CHANNELS: &[&str] = &["email", "telegram"];

/// A reminder row from the `reminders` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Reminder {
    pub id: DbId,
    pub user_id: DbId,
    pub habit_id: Option<DbId>,
    /// `email` or `telegram`.
    pub channel: String,
    pub when_time: NaiveTime,
    /// Weekday csv filter, Monday = 0. `None` fires every day.
    pub weekdays: Option<String>,
    pub enabled: bool,
    pub created_at: Timestamp,
}

/// A reminder joined with the recipient and habit context the notifier
/// needs, loaded in one query by the scheduler tick.
#[derive(Debug, Clone, FromRow)]
pub struct DueReminderContext {
    pub id: DbId,
    pub channel: String,
    pub when_time: NaiveTime,
    pub weekdays: Option<String>,
    pub user_email: String,
    pub habit_name: Option<String>,
}

/// DTO for creating a reminder on a habit.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReminder {
    /// Defaults to `email` if omitted.
    pub channel: Option<String>,
    pub when_time: NaiveTime,
    pub weekdays: Option<String>,
}
