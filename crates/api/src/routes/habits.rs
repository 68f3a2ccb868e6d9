//! Route definitions for the `/habits` resource and `/reminders`.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::habits;
use crate::state::AppState;

/// Routes mounted at `/habits`.
///
/// ```text
/// GET    /                    -> list_habits
/// POST   /                    -> create_habit
/// PUT    /{id}                -> update_habit
/// DELETE /{id}                -> delete_habit
/// POST   /{id}/toggle-today   -> toggle_today
/// GET    /{id}/streak         -> streak
/// GET    /{id}/reminders      -> list_reminders
/// POST   /{id}/reminders      -> create_reminder
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(habits::list_habits).post(habits::create_habit))
        .route(
            "/{id}",
            put(habits::update_habit).delete(habits::delete_habit),
        )
        .route("/{id}/toggle-today", post(habits::toggle_today))
        .route("/{id}/streak", get(habits::streak))
        .route(
            "/{id}/reminders",
            get(habits::list_reminders).post(habits::create_reminder),
        )
}

/// Routes mounted at `/reminders`.
///
/// ```text
/// DELETE /{id} -> delete_reminder
/// ```
pub fn reminders_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(habits::delete_reminder))
}
