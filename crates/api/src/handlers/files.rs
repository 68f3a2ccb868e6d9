//! Handlers for file-asset bookkeeping under `/pages/{id}/files` and
//! `/files/{id}`.
//!
//! This records upload metadata only; the byte storage backend is
//! external. Deleting a row here (or purging its page) does not reclaim
//! the stored bytes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lifeboard_core::error::CoreError;
use lifeboard_core::types::DbId;
use lifeboard_db::models::file_asset::{CreateFileAsset, FileAsset};
use lifeboard_db::repositories::{FileAssetRepo, PageRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/pages/{id}/files
///
/// List a page's file assets, newest first.
pub async fn list_files(
    user: AuthUser,
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<FileAsset>>>> {
    ensure_page(&state, &user, page_id).await?;
    let files = FileAssetRepo::list_for_page(&state.pool, user.user_id, page_id).await?;
    Ok(Json(DataResponse { data: files }))
}

/// POST /api/v1/pages/{id}/files
///
/// Register an uploaded file against an active page.
pub async fn create_file(
    user: AuthUser,
    State(state): State<AppState>,
    Path(page_id): Path<DbId>,
    Json(input): Json<CreateFileAsset>,
) -> AppResult<(StatusCode, Json<DataResponse<FileAsset>>)> {
    if input.original_filename.trim().is_empty() || input.file_path.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Filename and file path must not be empty".into(),
        )));
    }

    ensure_page(&state, &user, page_id).await?;
    let asset = FileAssetRepo::create(&state.pool, user.user_id, page_id, &input).await?;

    tracing::info!(
        user_id = user.user_id,
        page_id,
        file_id = asset.id,
        "File asset registered"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// DELETE /api/v1/files/{id}
///
/// Remove a file-asset row (bookkeeping only).
pub async fn delete_file(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = FileAssetRepo::delete(&state.pool, user.user_id, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "FileAsset",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve the page and confirm it is active and the caller's.
async fn ensure_page(state: &AppState, user: &AuthUser, page_id: DbId) -> AppResult<()> {
    PageRepo::find_by_id(&state.pool, user.user_id, page_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Page",
            id: page_id,
        }))?;
    Ok(())
}
