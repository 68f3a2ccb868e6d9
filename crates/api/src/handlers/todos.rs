//! Handlers for the `/todos` resource (todo and not-todo lists).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use lifeboard_core::error::CoreError;
use lifeboard_core::types::DbId;
use lifeboard_db::models::todo::{CreateTodoItem, TodoItem, UpdateTodoItem, TODO_KINDS};
use lifeboard_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/todos
///
/// List the user's items, grouped by kind and ordered by position.
pub async fn list_items(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TodoItem>>>> {
    let items = TodoRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: items }))
}

/// POST /api/v1/todos
///
/// Create an item.
pub async fn create_item(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTodoItem>,
) -> AppResult<(StatusCode, Json<DataResponse<TodoItem>>)> {
    if input.label.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Label must not be empty".into(),
        )));
    }
    if let Some(kind) = &input.kind {
        validate_kind(kind)?;
    }

    let item = TodoRepo::create(&state.pool, user.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: item })))
}

/// PUT /api/v1/todos/{id}
///
/// Update an item.
pub async fn update_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTodoItem>,
) -> AppResult<Json<DataResponse<TodoItem>>> {
    if let Some(label) = &input.label {
        if label.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Label must not be empty".into(),
            )));
        }
    }
    if let Some(kind) = &input.kind {
        validate_kind(kind)?;
    }

    let item = TodoRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TodoItem",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}

/// POST /api/v1/todos/{id}/toggle
///
/// Flip an item's done state.
pub async fn toggle_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TodoItem>>> {
    let item = TodoRepo::toggle_done(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TodoItem",
            id,
        }))?;
    Ok(Json(DataResponse { data: item }))
}

/// DELETE /api/v1/todos/{id}
///
/// Delete an item.
pub async fn delete_item(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = TodoRepo::delete(&state.pool, user.user_id, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TodoItem",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

fn validate_kind(kind: &str) -> AppResult<()> {
    if TODO_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Validation(format!(
            "Unknown todo kind: {kind}"
        ))))
    }
}
