//! Handlers for the `/trash` resource.
//!
//! The trash spans both soft-deletable entity kinds (categories and
//! pages): listing trashed items, restoring a single item, and purging
//! (hard-deleting) a single item. All of it is scoped to the
//! authenticated user.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lifeboard_core::error::CoreError;
use lifeboard_core::types::DbId;
use lifeboard_db::repositories::trash_repo::{TrashKind, TrashView};
use lifeboard_db::repositories::TrashRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/trash
///
/// List the user's trashed categories and pages, newest deletions first.
pub async fn list_trash(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<TrashView>>> {
    let view = TrashRepo::list_trash(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: view }))
}

/// POST /api/v1/trash/{entity_type}/{id}/restore
///
/// Restore a single trashed entity. Children that were cascade-deleted
/// with it stay in the trash. Returns 404 if the entity is not in the
/// trash (or not the caller's).
pub async fn restore(
    user: AuthUser,
    State(state): State<AppState>,
    Path((entity_type, id)): Path<(String, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    let kind = parse_entity_type(&entity_type)?;

    let restored = TrashRepo::restore(&state.pool, user.user_id, kind, id).await?;
    if !restored {
        return Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }));
    }

    tracing::info!(
        user_id = user.user_id,
        entity_type = %entity_type,
        id,
        "Entity restored from trash"
    );
    Ok(Json(serde_json::json!({
        "restored": true,
        "entity_type": entity_type,
        "id": id,
    })))
}

/// DELETE /api/v1/trash/{entity_type}/{id}/purge
///
/// Permanently delete a single trashed entity. Only entities already in
/// the trash are eligible; the deleted-state filter is the confirmation
/// gate against purging something active.
pub async fn purge(
    user: AuthUser,
    State(state): State<AppState>,
    Path((entity_type, id)): Path<(String, DbId)>,
) -> AppResult<StatusCode> {
    let kind = parse_entity_type(&entity_type)?;

    let purged = TrashRepo::purge(&state.pool, user.user_id, kind, id).await?;
    if !purged {
        return Err(AppError::Core(CoreError::NotFound {
            entity: kind.entity(),
            id,
        }));
    }

    tracing::info!(
        user_id = user.user_id,
        entity_type = %entity_type,
        id,
        "Entity purged from trash"
    );
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// Validate the `{entity_type}` path segment.
fn parse_entity_type(entity_type: &str) -> AppResult<TrashKind> {
    TrashKind::parse(entity_type)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown entity type: {entity_type}")))
}
