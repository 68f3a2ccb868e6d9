//! The trash lifecycle service: soft-delete cascade, restore, trash
//! listing, and purge for categories and pages.
//!
//! One method per operation, parameterized by [`TrashKind`], so the route
//! handlers for both entity kinds share a single implementation. Every
//! statement filters by `user_id`; a row that exists but belongs to
//! someone else is indistinguishable from a missing row.

use lifeboard_core::types::DbId;
use serde::Serialize;
use sqlx::PgPool;

use crate::models::category::Category;
use crate::models::page::Page;

/// Entity kinds that participate in the trash lifecycle.
///
/// The string forms (`"categories"`, `"pages"`) appear in trash route
/// paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrashKind {
    Category,
    Page,
}

impl TrashKind {
    /// Parse the path segment used by the trash routes.
    pub fn parse(s: &str) -> Option<TrashKind> {
        match s {
            "categories" => Some(TrashKind::Category),
            "pages" => Some(TrashKind::Page),
            _ => None,
        }
    }

    /// The backing table name.
    fn table(self) -> &'static str {
        match self {
            TrashKind::Category => "categories",
            TrashKind::Page => "pages",
        }
    }

    /// Entity label for error messages.
    pub fn entity(self) -> &'static str {
        match self {
            TrashKind::Category => "Category",
            TrashKind::Page => "Page",
        }
    }
}

/// The user's trash: deleted categories and deleted pages, disjoint,
/// each ordered by deletion time descending.
#[derive(Debug, Serialize)]
pub struct TrashView {
    pub categories: Vec<Category>,
    pub pages: Vec<Page>,
}

/// Provides the soft-delete / restore / purge lifecycle.
pub struct TrashRepo;

impl TrashRepo {
    /// Soft-delete an active entity and cascade to its descendants, in
    /// one transaction.
    ///
    /// - Category: flags the category, then every page of the category --
    ///   deliberately NOT filtered by each page's own deletion state, so
    ///   an already-trashed page just has its flag and timestamp set
    ///   again (a no-op in effect).
    /// - Page: flags the page, then walks the parent/child self-reference
    ///   with a recursive CTE keyed by id and flags the whole subtree.
    ///
    /// File-asset rows are not touched: they carry no deletion state and
    /// follow their parent page. Returns `false` (and changes nothing) if
    /// no ACTIVE row matches `id` under this owner -- re-deleting an
    /// already-trashed entity reports not-found, like any other miss.
    pub async fn soft_delete(
        pool: &PgPool,
        user_id: DbId,
        kind: TrashKind,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let table = kind.table();
        let flagged = sqlx::query(&format!(
            "UPDATE {table} SET is_deleted = TRUE, deleted_at = NOW()
             WHERE id = $1 AND user_id = $2 AND is_deleted = FALSE"
        ))
        .bind(id)
        .bind(user_id)
        .execute(&mut *tx)
        .await?;

        if flagged.rows_affected() == 0 {
            return Ok(false);
        }

        match kind {
            TrashKind::Category => {
                sqlx::query(
                    "UPDATE pages SET is_deleted = TRUE, deleted_at = NOW()
                     WHERE category_id = $1 AND user_id = $2",
                )
                .bind(id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
            }
            TrashKind::Page => {
                sqlx::query(
                    "WITH RECURSIVE descendants AS (
                         SELECT id FROM pages WHERE parent_page_id = $1 AND user_id = $2
                         UNION ALL
                         SELECT p.id FROM pages p
                         JOIN descendants d ON p.parent_page_id = d.id
                     )
                     UPDATE pages SET is_deleted = TRUE, deleted_at = NOW()
                     WHERE id IN (SELECT id FROM descendants) AND user_id = $2",
                )
                .bind(id)
                .bind(user_id)
                .execute(&mut *tx)
                .await?;
            }
        }

        tx.commit().await?;
        Ok(true)
    }

    /// Restore a single soft-deleted entity.
    ///
    /// Clears the flag and timestamp on exactly one row. Children that
    /// were cascade-deleted with it stay in the trash; each must be
    /// restored on its own. Returns `false` if no DELETED row matches
    /// `id` under this owner.
    pub async fn restore(
        pool: &PgPool,
        user_id: DbId,
        kind: TrashKind,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let table = kind.table();
        let result = sqlx::query(&format!(
            "UPDATE {table} SET is_deleted = FALSE, deleted_at = NULL
             WHERE id = $1 AND user_id = $2 AND is_deleted = TRUE"
        ))
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List everything in the user's trash.
    pub async fn list_trash(pool: &PgPool, user_id: DbId) -> Result<TrashView, sqlx::Error> {
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, user_id, title, slug, description, icon, color,
                    is_deleted, deleted_at, created_at, updated_at
             FROM categories
             WHERE user_id = $1 AND is_deleted = TRUE
             ORDER BY deleted_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        let pages = sqlx::query_as::<_, Page>(
            "SELECT id, user_id, category_id, parent_page_id, title, slug, icon,
                    content, is_deleted, deleted_at, created_at, updated_at
             FROM pages
             WHERE user_id = $1 AND is_deleted = TRUE
             ORDER BY deleted_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;

        Ok(TrashView { categories, pages })
    }

    /// Permanently delete a soft-deleted entity.
    ///
    /// The deleted-state filter is the confirmation gate: an active row
    /// cannot be purged through this path. Owned child rows (pages under
    /// a category, nested pages, file-asset rows) go with it via the
    /// schema's FK cascades in the same transactional delete. Stored file
    /// BYTES are not touched -- only the bookkeeping rows.
    pub async fn purge(
        pool: &PgPool,
        user_id: DbId,
        kind: TrashKind,
        id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let table = kind.table();
        let result = sqlx::query(&format!(
            "DELETE FROM {table}
             WHERE id = $1 AND user_id = $2 AND is_deleted = TRUE"
        ))
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
