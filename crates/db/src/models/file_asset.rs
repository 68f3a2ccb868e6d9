//! File-asset metadata model and DTOs.
//!
//! Only bookkeeping lives here: the stored path or URL points at an
//! external storage backend. File rows carry no soft-delete state; they
//! follow their parent page (hidden with it, removed by its purge).

use lifeboard_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A file-asset row from the `file_assets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct FileAsset {
    pub id: DbId,
    pub user_id: DbId,
    pub page_id: Option<DbId>,
    pub original_filename: String,
    pub file_path: String,
    pub mime_type: Option<String>,
    pub file_size_bytes: Option<i64>,
    pub created_at: Timestamp,
}

/// DTO for registering an uploaded file against a page.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFileAsset {
    pub original_filename: String,
    pub file_path: String,
    pub mime_type: Option<String>,
    pub file_size_bytes: Option<i64>,
}
