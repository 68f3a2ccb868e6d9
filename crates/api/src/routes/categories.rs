//! Route definitions for the `/categories` resource, including the pages
//! nested inside each category.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, pages};
use crate::state::AppState;

/// Routes mounted at `/categories`.
///
/// ```text
/// GET    /                              -> list_categories
/// POST   /                              -> create_category
/// GET    /{slug}                        -> get_category (with top-level pages)
/// PUT    /{slug}                        -> update_category
/// DELETE /{slug}                        -> delete_category (soft-delete cascade)
/// GET    /{slug}/pages                  -> list_pages
/// POST   /{slug}/pages                  -> create_page
/// GET    /{slug}/pages/{page_slug}      -> get_page (with children + files)
/// PUT    /{slug}/pages/{page_slug}      -> update_page
/// DELETE /{slug}/pages/{page_slug}      -> delete_page (soft-delete cascade)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/{slug}",
            get(categories::get_category)
                .put(categories::update_category)
                .delete(categories::delete_category),
        )
        .route(
            "/{slug}/pages",
            get(pages::list_pages).post(pages::create_page),
        )
        .route(
            "/{slug}/pages/{page_slug}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
}
