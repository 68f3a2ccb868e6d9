//! Handler for the `/search` endpoint.

use axum::extract::{Query, State};
use axum::Json;
use lifeboard_db::models::category::Category;
use lifeboard_db::models::page::Page;
use lifeboard_db::repositories::{CategoryRepo, PageRepo};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub query: String,
}

/// Search hits across the user's active categories and pages.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub categories: Vec<Category>,
    pub pages: Vec<Page>,
}

/// GET /api/v1/search?query=...
///
/// Substring search over active category titles/descriptions and page
/// titles/contents. A blank query returns empty results rather than
/// everything.
pub async fn search(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<DataResponse<SearchResults>>> {
    let term = params.query.trim().to_string();

    let (categories, pages) = if term.is_empty() {
        (Vec::new(), Vec::new())
    } else {
        (
            CategoryRepo::search(&state.pool, user.user_id, &term).await?,
            PageRepo::search(&state.pool, user.user_id, &term).await?,
        )
    };

    Ok(Json(DataResponse {
        data: SearchResults {
            query: term,
            categories,
            pages,
        },
    }))
}
