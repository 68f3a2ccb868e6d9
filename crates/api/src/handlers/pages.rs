//! Handlers for pages nested under `/categories/{slug}/pages`.
//!
//! Pages are addressed by `(category_slug, page_slug)`. Nesting is
//! expressed through `parent_page_id`; a parent must be an active page of
//! the same category, and re-parenting may not create a cycle.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lifeboard_core::error::CoreError;
use lifeboard_core::types::DbId;
use lifeboard_db::models::file_asset::FileAsset;
use lifeboard_db::models::page::{CreatePage, Page, UpdatePage};
use lifeboard_db::repositories::trash_repo::TrashKind;
use lifeboard_db::repositories::{FileAssetRepo, PageRepo, TrashRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::categories::{find_category, validate_title};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A page together with its active children and attached files.
#[derive(Debug, Serialize)]
pub struct PageDetail {
    pub page: Page,
    pub children: Vec<Page>,
    pub files: Vec<FileAsset>,
}

/// GET /api/v1/categories/{slug}/pages
///
/// List the category's active top-level pages.
pub async fn list_pages(
    user: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Page>>>> {
    let category = find_category(&state, &user, &slug).await?;
    let pages = PageRepo::list_top_level(&state.pool, user.user_id, category.id).await?;
    Ok(Json(DataResponse { data: pages }))
}

/// POST /api/v1/categories/{slug}/pages
///
/// Create a page in the category. The slug is derived from the title,
/// made unique among the category's active pages.
pub async fn create_page(
    user: AuthUser,
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(input): Json<CreatePage>,
) -> AppResult<(StatusCode, Json<DataResponse<Page>>)> {
    validate_title(&input.title)?;
    let category = find_category(&state, &user, &slug).await?;

    if let Some(parent_id) = input.parent_page_id {
        validate_parent(&state, &user, category.id, parent_id, None).await?;
    }

    let page = PageRepo::create(&state.pool, user.user_id, category.id, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        page_id = page.id,
        category_id = category.id,
        slug = %page.slug,
        "Page created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
}

/// GET /api/v1/categories/{slug}/pages/{page_slug}
///
/// Fetch a page with its active children and attached files.
pub async fn get_page(
    user: AuthUser,
    State(state): State<AppState>,
    Path((slug, page_slug)): Path<(String, String)>,
) -> AppResult<Json<DataResponse<PageDetail>>> {
    let page = find_page(&state, &user, &slug, &page_slug).await?;
    let children = PageRepo::list_children(&state.pool, user.user_id, page.id).await?;
    let files = FileAssetRepo::list_for_page(&state.pool, user.user_id, page.id).await?;
    Ok(Json(DataResponse {
        data: PageDetail {
            page,
            children,
            files,
        },
    }))
}

/// PUT /api/v1/categories/{slug}/pages/{page_slug}
///
/// Update a page. A changed title changes the slug; the returned row
/// carries the new one.
pub async fn update_page(
    user: AuthUser,
    State(state): State<AppState>,
    Path((slug, page_slug)): Path<(String, String)>,
    Json(input): Json<UpdatePage>,
) -> AppResult<Json<DataResponse<Page>>> {
    if let Some(title) = &input.title {
        validate_title(title)?;
    }

    let page = find_page(&state, &user, &slug, &page_slug).await?;

    if let Some(parent_id) = input.parent_page_id {
        validate_parent(&state, &user, page.category_id, parent_id, Some(page.id)).await?;
    }

    let updated = PageRepo::update(&state.pool, user.user_id, page.id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id: page.id,
        }))?;

    Ok(Json(DataResponse { data: updated }))
}

/// DELETE /api/v1/categories/{slug}/pages/{page_slug}
///
/// Soft-delete a page and cascade through its nested children.
pub async fn delete_page(
    user: AuthUser,
    State(state): State<AppState>,
    Path((slug, page_slug)): Path<(String, String)>,
) -> AppResult<StatusCode> {
    let page = find_page(&state, &user, &slug, &page_slug).await?;

    let trashed = TrashRepo::soft_delete(&state.pool, user.user_id, TrashKind::Page, page.id)
        .await?;
    if !trashed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id: page.id,
        }));
    }

    tracing::info!(
        user_id = user.user_id,
        page_id = page.id,
        "Page moved to trash"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Resolve an active page by `(category_slug, page_slug)` for this user.
async fn find_page(
    state: &AppState,
    user: &AuthUser,
    category_slug: &str,
    page_slug: &str,
) -> AppResult<Page> {
    let category = find_category(state, user, category_slug).await?;
    PageRepo::find_by_slug(&state.pool, user.user_id, category.id, page_slug)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundBySlug {
                entity: "Page",
                slug: page_slug.to_string(),
            })
        })
}

/// Check that `parent_id` is a valid parent: an active page of the same
/// category that would not create a cycle with `child_id`.
async fn validate_parent(
    state: &AppState,
    user: &AuthUser,
    category_id: DbId,
    parent_id: DbId,
    child_id: Option<DbId>,
) -> AppResult<()> {
    let parent = PageRepo::find_by_id(&state.pool, user.user_id, parent_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id: parent_id,
        }))?;

    if parent.category_id != category_id {
        return Err(AppError::Core(CoreError::Validation(
            "Parent page must belong to the same category".into(),
        )));
    }

    if let Some(child_id) = child_id {
        if parent_id == child_id {
            return Err(AppError::Core(CoreError::Validation(
                "A page cannot be its own parent".into(),
            )));
        }
        if PageRepo::is_descendant(&state.pool, user.user_id, child_id, parent_id).await? {
            return Err(AppError::Core(CoreError::Validation(
                "Cannot nest a page under one of its own descendants".into(),
            )));
        }
    }

    Ok(())
}
