//! Route definitions for the `/trash` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::trash;
use crate::state::AppState;

/// Routes mounted at `/trash`.
///
/// ```text
/// GET    /                              -> list_trash
/// POST   /{entity_type}/{id}/restore    -> restore
/// DELETE /{entity_type}/{id}/purge      -> purge
/// ```
///
/// `entity_type` is `categories` or `pages`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(trash::list_trash))
        .route("/{entity_type}/{id}/restore", post(trash::restore))
        .route("/{entity_type}/{id}/purge", delete(trash::purge))
}
