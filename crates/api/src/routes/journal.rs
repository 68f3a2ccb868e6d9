//! Route definitions for the `/journal` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::journal;
use crate::state::AppState;

/// Routes mounted at `/journal`.
///
/// ```text
/// GET    /      -> list_entries
/// POST   /      -> create_entry
/// GET    /{id}  -> get_entry
/// PUT    /{id}  -> update_entry
/// DELETE /{id}  -> delete_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(journal::list_entries).post(journal::create_entry))
        .route(
            "/{id}",
            get(journal::get_entry)
                .put(journal::update_entry)
                .delete(journal::delete_entry),
        )
}
