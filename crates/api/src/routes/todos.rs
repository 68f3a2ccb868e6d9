//! Route definitions for the `/todos` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::todos;
use crate::state::AppState;

/// Routes mounted at `/todos`.
///
/// ```text
/// GET    /             -> list_items
/// POST   /             -> create_item
/// PUT    /{id}         -> update_item
/// DELETE /{id}         -> delete_item
/// POST   /{id}/toggle  -> toggle_item
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todos::list_items).post(todos::create_item))
        .route(
            "/{id}",
            put(todos::update_item).delete(todos::delete_item),
        )
        .route("/{id}/toggle", post(todos::toggle_item))
}
