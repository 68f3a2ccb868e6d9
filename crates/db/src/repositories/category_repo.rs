//! Repository for the `categories` table.
//!
//! Lookup methods exclude soft-deleted rows; the trash/restore/purge side
//! of the lifecycle lives in [`crate::repositories::TrashRepo`].

use lifeboard_core::slug::{slugify, with_suffix};
use lifeboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{Category, CreateCategory, UpdateCategory};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, title, slug, description, icon, color, \
                       is_deleted, deleted_at, created_at, updated_at";

/// Provides CRUD operations for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// Insert a new category for `user_id`, assigning a slug unique among
    /// the user's active categories.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateCategory,
    ) -> Result<Category, sqlx::Error> {
        let slug = Self::assign_slug(pool, user_id, &input.title).await?;
        let query = format!(
            "INSERT INTO categories (user_id, title, slug, description, icon, color)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.color)
            .fetch_one(pool)
            .await
    }

    /// Find an active category by slug, scoped to its owner.
    pub async fn find_by_slug(
        pool: &PgPool,
        user_id: DbId,
        slug: &str,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE user_id = $1 AND slug = $2 AND is_deleted = FALSE"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Find an active category by ID, scoped to its owner.
    pub async fn find_by_id(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
    ) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE id = $1 AND user_id = $2 AND is_deleted = FALSE"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// List the user's active categories, most recently updated first.
    pub async fn list(pool: &PgPool, user_id: DbId) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE user_id = $1 AND is_deleted = FALSE
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Update an active category. A changed title re-derives the slug, so
    /// the row's URL may change; the returned row carries the new slug.
    ///
    /// Returns `None` if no active row matches `id` for this owner.
    pub async fn update(
        pool: &PgPool,
        user_id: DbId,
        id: DbId,
        input: &UpdateCategory,
    ) -> Result<Option<Category>, sqlx::Error> {
        let current = match Self::find_by_id(pool, user_id, id).await? {
            Some(c) => c,
            None => return Ok(None),
        };

        let slug = match &input.title {
            Some(title) if *title != current.title => {
                Self::assign_slug(pool, user_id, title).await?
            }
            _ => current.slug.clone(),
        };

        let query = format!(
            "UPDATE categories SET
                title = COALESCE($3, title),
                slug = $4,
                description = COALESCE($5, description),
                icon = COALESCE($6, icon),
                color = COALESCE($7, color)
             WHERE id = $1 AND user_id = $2 AND is_deleted = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(user_id)
            .bind(&input.title)
            .bind(&slug)
            .bind(&input.description)
            .bind(&input.icon)
            .bind(&input.color)
            .fetch_optional(pool)
            .await
    }

    /// Search the user's active categories by title/description substring.
    pub async fn search(
        pool: &PgPool,
        user_id: DbId,
        term: &str,
    ) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE user_id = $1 AND is_deleted = FALSE
               AND (title ILIKE $2 OR description ILIKE $2)
             ORDER BY updated_at DESC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(user_id)
            .bind(format!("%{term}%"))
            .fetch_all(pool)
            .await
    }

    /// Derive a slug from `title`, appending `-1`, `-2`, ... until it does
    /// not collide with any ACTIVE category of the same user. Trashed rows
    /// do not block reuse; the partial unique index backstops races.
    async fn assign_slug(pool: &PgPool, user_id: DbId, title: &str) -> Result<String, sqlx::Error> {
        let base = slugify(title);
        let mut slug = base.clone();
        let mut counter = 1;
        while Self::slug_taken(pool, user_id, &slug).await? {
            slug = with_suffix(&base, counter);
            counter += 1;
        }
        Ok(slug)
    }

    async fn slug_taken(pool: &PgPool, user_id: DbId, slug: &str) -> Result<bool, sqlx::Error> {
        let (taken,): (bool,) = sqlx::query_as(
            "SELECT EXISTS(
                 SELECT 1 FROM categories
                 WHERE user_id = $1 AND slug = $2 AND is_deleted = FALSE
             )",
        )
        .bind(user_id)
        .bind(slug)
        .fetch_one(pool)
        .await?;
        Ok(taken)
    }
}
