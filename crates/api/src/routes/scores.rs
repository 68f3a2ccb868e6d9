//! Route definitions for the `/scores` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::scores;
use crate::state::AppState;

/// Routes mounted at `/scores`.
///
/// ```text
/// GET /           -> list_scores (?from=&to=, defaults to current month)
/// PUT /{date}     -> upsert_score
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(scores::list_scores))
        .route("/{date}", put(scores::upsert_score))
}
