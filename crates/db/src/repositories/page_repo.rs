//! Repository for the `pages` table.
//!
//! Pages nest under an optional parent page within the same category.
//! Slug scope is the category: two active pages of one category cannot
//! share a slug, but pages of different categories can.

use lifeboard_core::slug::{slugify, with_suffix};
use lifeboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::page::{CreatePage, Page, UpdatePage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, category_id, parent_page_id, title, slug, icon, \
                       content, is_deleted, deleted_at, created_at, updated_at";

/// Provides CRUD operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// Insert a new page into a category, assigning a slug unique among
    /// the category's active pages.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        category_id: DbId,
        input: &CreatePage,
    ) -> Result<Page, sqlx::Error> {
        let slug = Self::assign_slug(pool, category_id, &input.title).await?;
        let query = format!(
            "INSERT INTO pages (user_id, category_id, parent_page_id, title, slug, icon, content)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(user_id)
            .bind(category_id)
            .bind(input.parent_page_id)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.icon)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find an active page by slug within a category, scoped to its owner.
    pub async fn find_by_slug(
        pool: &PgPool,
        user_id: DbId,
        category_id: DbId,
        slug: &str,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE user_id = $1 AND category_id = $2 AND slug = $3 AND is_deleted = FALSE"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(user_id)
            .bind(category_id)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find an active page by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE id = $1 AND user_id = $2 AND is_deleted = FALSE"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List a category's active top-level pages (no parent), most recently
    /// updated first.
    pub async fn list_top_level(
        pool: &PgPool,
        user_id: DbId,
        category_id: DbId,
    ) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE user_id = $1 AND category_id = $2 AND parent_page_id IS NULL
               AND is_deleted = FALSE
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(user_id)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// List the active children of a page, oldest first.
    pub async fn list_children(
        pool: &PgPool,
        user_id: DbId,
        parent_page_id: DbId,
    ) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE user_id = $1 AND parent_page_id = $2 AND is_deleted = FALSE
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(user_id)
            .bind(parent_page_id)
            .fetch_all(pool)
            .await
    }

    /// Update an active page. A changed title re-derives the slug, so the
    /// row's URL may change; the returned row carries the new slug.
    ///
    /// Returns `None` if no active row matches `id` for this owner.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdatePage,
    ) -> Result<Option<Page>, sqlx::Error> {
        let current = match Self::find_by_id(pool, user_id, id).await? {
            Some(p) => p,
            None => return Ok(None),
        };

        let slug = match &input.title {
            Some(title) if *title != current.title => {
                Self::assign_slug(pool, current.category_id, title).await?
            }
            _ => current.slug.clone(),
        };

        let query = format!(
            "UPDATE pages SET
                title = COALESCE($3, title),
                slug = $4,
                icon = COALESCE($5, icon),
                content = COALESCE($6, content),
                parent_page_id = COALESCE($7, parent_page_id)
             WHERE id = $1 AND user_id = $2 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.icon)
            .bind(&input.content)
            .bind(input.parent_page_id)
            .fetch_optional(pool)
            .await
    }

    /// Search the user's active pages by title/content substring, most
    /// recently updated first.
    pub async fn search(
        pool: &PgPool,
        user_id: DbId,
        term: &str,
    ) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             WHERE user_id = $1 AND is_deleted = FALSE
               AND (title ILIKE $2 OR content ILIKE $2)
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(user_id)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await
    }

    /// Whether `candidate` lies in the subtree rooted at `ancestor`.
    ///
    /// Used to reject re-parenting that would create a cycle, which
    /// would otherwise make the subtree walks non-terminating. Walks by
    /// id with a recursive CTE.
    pub async fn is_descendant(
        pool: &PgPool,
        user_id: DbId,
        ancestor: DbId,
        candidate: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (found,): (bool,) = sqlx::query_as(
            "WITH RECURSIVE descendants AS (
                 SELECT id FROM pages WHERE parent_page_id = $1 AND user_id = $2
                 UNION ALL
                 SELECT p.id FROM pages p
                 JOIN descendants d ON p.parent_page_id = d.id
             )
             SELECT EXISTS(SELECT 1 FROM descendants WHERE id = $3)",
        )
        .bind(ancestor)
        .bind(user_id)
        .bind(candidate)
        .fetch_one(pool)
        .await?;
        Ok(found)
    }

    /// Derive a slug from `title`, appending `-1`, `-2`, ... until it does
    /// not collide with any ACTIVE page in the category.
    async fn assign_slug(
        pool: &PgPool,
        category_id: DbId,
        title: &str,
    ) -> Result<String, sqlx::Error> {
        let base = slugify(title);
        let mut slug = base.clone();
        let mut counter = 1;
        while Self::slug_taken(pool, category_id, &slug).await? {
            slug = with_suffix(&base, counter);
            counter += 1;
        }
        Ok(slug)
    }

    async fn slug_taken(pool: &PgPool, category_id: DbId, slug: &str) -> Result<bool, sqlx::Error> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM pages
                 WHERE category_id = $1 AND slug = $2 AND is_deleted = FALSE
             )",
        )
        .bind(category_id)
        .bind(slug)
        .fetch_one(pool)
        .await?;
        Ok(taken)
    }
}
