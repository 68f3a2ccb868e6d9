//! Handlers for the `/journal` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lifeboard_core::error::CoreError;
use lifeboard_core::types::DbId;
use lifeboard_db::models::journal::{CreateJournalEntry, JournalEntry, UpdateJournalEntry};
use lifeboard_db::repositories::JournalRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/journal
///
/// List the user's journal entries, newest entry date first.
pub async fn list_entries(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<JournalEntry>>>> {
    let entries = JournalRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /api/v1/journal
///
/// Create an entry (defaults to today when no date is given).
pub async fn create_entry(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateJournalEntry>,
) -> AppResult<(StatusCode, Json<DataResponse<JournalEntry>>)> {
    let entry = JournalRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        entry_id = entry.id,
        entry_date = %entry.entry_date,
        "Journal entry created"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}

/// GET /api/v1/journal/{id}
///
/// Fetch one entry.
pub async fn get_entry(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<JournalEntry>>> {
    let entry = JournalRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "JournalEntry",
            id,
        }))?;
    Ok(Json(DataResponse { data: entry }))
}

/// PUT /api/v1/journal/{id}
///
/// Update an entry.
pub async fn update_entry(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateJournalEntry>,
) -> AppResult<Json<DataResponse<JournalEntry>>> {
    let entry = JournalRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "JournalEntry",
            id,
        }))?;
    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/journal/{id}
///
/// Delete an entry outright (journal entries have no trash).
pub async fn delete_entry(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = JournalRepo::delete(&state.pool, user.user_id, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "JournalEntry",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}
