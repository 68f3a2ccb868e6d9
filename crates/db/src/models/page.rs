//! Page entity model and DTOs.
//!
//! Pages live inside a category and may nest under another page via
//! `parent_page_id`. The slug is unique among ACTIVE pages of the same
//! category.

use lifeboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A page row from the `pages` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: DbId,
    pub parent_page_id: Option<DbId>,
    pub title: String,
    pub slug: String,
    pub icon: Option<String>,
    pub content: Option<String>,
    pub is_deleted: bool,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new page. The slug is assigned server-side.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePage {
    pub title: String,
    pub icon: Option<String>,
    pub content: Option<String>,
    pub parent_page_id: Option<DbId>,
}

/// DTO for updating an existing page. All fields are optional; a changed
/// title re-derives the slug.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePage {
    pub title: Option<String>,
    pub icon: Option<String>,
    pub content: Option<String>,
    pub parent_page_id: Option<DbId>,
}
