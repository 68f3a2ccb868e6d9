//! Route definitions for file-asset bookkeeping.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::files;
use crate::state::AppState;

/// Routes for page-scoped file listing/registration, mounted at `/pages`.
///
/// ```text
/// GET  /{id}/files -> list_files
/// POST /{id}/files -> create_file
/// ```
pub fn page_files_router() -> Router<AppState> {
    Router::new().route("/{id}/files", get(files::list_files).post(files::create_file))
}

/// Routes for direct file-asset rows, mounted at `/files`.
///
/// ```text
/// DELETE /{id} -> delete_file
/// ```
pub fn files_router() -> Router<AppState> {
    Router::new().route("/{id}", delete(files::delete_file))
}
