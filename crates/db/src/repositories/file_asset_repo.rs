//! Repository for the `file_assets` table (upload bookkeeping only --
//! the bytes live in an external storage backend).

use lifeboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::file_asset::{CreateFileAsset, FileAsset};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, page_id, original_filename, file_path, \
                       mime_type, file_size_bytes, created_at";

/// Provides CRUD operations for file assets.
pub struct FileAssetRepo;

impl FileAssetRepo {
    /// Register a file against a page, returning the created row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        page_id: DbId,
        input: &CreateFileAsset,
    ) -> Result<FileAsset, sqlx::Error> {
        let query = format!(
            "INSERT INTO file_assets (user_id, page_id, original_filename, file_path, mime_type, file_size_bytes)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FileAsset>(&query)
            .bind(user_id)
            .bind(page_id)
            .bind(&input.original_filename)
            .bind(&input.file_path)
            .bind(&input.mime_type)
            .bind(input.file_size_bytes)
            .fetch_one(pool)
            .await
    }

    /// List a page's file assets, newest first.
    pub async fn list_for_page(
        pool: &PgPool,
        user_id: DbId,
        page_id: DbId,
    ) -> Result<Vec<FileAsset>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM file_assets
             WHERE user_id = $1 AND page_id = $2
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, FileAsset>(&query)
            .bind(user_id)
            .bind(page_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a file-asset row. Returns `true` if a row was removed.
    ///
    /// Removes the bookkeeping row only; the stored bytes are not
    /// reclaimed here.
    pub async fn delete(pool: &PgPool, user_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM file_assets WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
