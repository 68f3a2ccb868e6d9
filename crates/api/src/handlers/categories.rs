//! Handlers for the `/categories` resource.
//!
//! Categories are addressed by slug. Renaming a category re-derives its
//! slug, so the response to an update carries the new address; clients
//! must follow it rather than the old one.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lifeboard_core::error::CoreError;
use lifeboard_db::models::category::{Category, CreateCategory, UpdateCategory};
use lifeboard_db::models::page::Page;
use lifeboard_db::repositories::trash_repo::TrashKind;
use lifeboard_db::repositories::{CategoryRepo, PageRepo, TrashRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Maximum accepted title length (matches the column width).
const MAX_TITLE_LEN: usize = 200;

/// A category together with its active top-level pages.
#[derive(Debug, Serialize)]
pub struct CategoryDetail {
    pub category: Category,
    pub pages: Vec<Page>,
}

/// GET /api/v1/categories
///
/// List the user's active categories, most recently updated first.
pub async fn list_categories(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Category>>>> {
    let categories = CategoryRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
///
/// Create a category. The slug is derived from the title, made unique
/// among the user's active categories.
pub async fn create_category(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<(StatusCode, Json<DataResponse<Category>>)> {
    validate_title(&input.title)?;

    let category = CategoryRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        category_id = category.id,
        slug = %category.slug,
        "Category created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/categories/{slug}
///
/// Fetch a category and its active top-level pages.
pub async fn get_category(
    user: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<CategoryDetail>>> {
    let category = find_category(&state, &user, &slug).await?;
    let pages = PageRepo::list_top_level(&state.pool, user.user_id, category.id).await?;
    Ok(Json(DataResponse {
        data: CategoryDetail { category, pages },
    }))
}

/// PUT /api/v1/categories/{slug}
///
/// Update a category. A changed title changes the slug; the returned row
/// carries the new one.
pub async fn update_category(
    user: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<Json<DataResponse<Category>>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }

    let category = find_category(&state, &user, &slug).await?;
    let updated = CategoryRepo::update(&state.pool, user.user_id, category.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category.id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/categories/{slug}
///
/// Soft-delete a category and cascade to every page in it.
pub async fn delete_category(
    user: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<StatusCode> {
    let category = find_category(&state, &user, &slug).await?;

    let trashed =
        TrashRepo::soft_delete(&state.pool, user.user_id, TrashKind::Category, category.id)
            .await?;
    if !trashed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: category.id,
        }));
    }

    tracing::info!(
        user_id = user.user_id,
        category_id = category.id,
        "Category moved to trash"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Helpers shared with the page handlers
// ---------------------------------------------------------------------------

/// Resolve an active category by slug for this user, or NotFound.
pub(crate) async fn find_category(
    state: &AppState,
    user: &AuthUser,
    slug: &str,
) -> AppResult<Category> {
    CategoryRepo::find_by_slug(&state.pool, user.user_id, slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBySlug {
                entity: "Category",
                slug: slug.to_string(),
            })
        })
}

/// Reject empty or overlong titles before any state mutation.
pub(crate) fn validate_title(title: &str) -> AppResult<()> {
    if title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title must not be empty".into(),
        )));
    }
    if title.len() > MAX_TITLE_LEN {
        return Err(AppError::Core(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        ))));
    }
    Ok(())
}
