//! Journal entry model and DTOs.

use chrono::NaiveDate;
use lifeboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A journal row from the `journal_entries` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JournalEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub entry_date: NaiveDate,
    pub title: Option<String>,
    pub content: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a journal entry. `entry_date` defaults to today
/// (server clock) if omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateJournalEntry {
    pub entry_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub content: Option<String>,
}

/// DTO for updating a journal entry. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateJournalEntry {
    pub entry_date: Option<NaiveDate>,
    pub title: Option<String>,
    pub content: Option<String>,
}
