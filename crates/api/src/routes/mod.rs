pub mod auth;
pub mod categories;
pub mod files;
pub mod habits;
pub mod health;
pub mod journal;
pub mod scores;
pub mod todos;
pub mod trash;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                           register (public)
/// /auth/login                              login (public)
/// /auth/refresh                            refresh (public)
/// /auth/logout                             logout
///
/// /categories                              list, create
/// /categories/{slug}                       get, update, delete (soft)
/// /categories/{slug}/pages                 list, create
/// /categories/{slug}/pages/{page_slug}     get, update, delete (soft)
///
/// /pages/{id}/files                        list, register (GET, POST)
/// /files/{id}                              delete row (DELETE)
///
/// /search                                  title/content search (GET ?query=)
///
/// /trash                                   list (GET)
/// /trash/{entity_type}/{id}/restore        restore (POST)
/// /trash/{entity_type}/{id}/purge          purge (DELETE)
///
/// /habits                                  list, create
/// /habits/{id}                             update, delete
/// /habits/{id}/toggle-today                toggle today's log (POST)
/// /habits/{id}/streak                      current streak (GET)
/// /habits/{id}/reminders                   list, create
/// /reminders/{id}                          delete
///
/// /journal                                 list, create
/// /journal/{id}                            get, update, delete
///
/// /todos                                   list, create
/// /todos/{id}                              update, delete
/// /todos/{id}/toggle                       flip done state (POST)
///
/// /scores                                  list range (GET ?from=&to=)
/// /scores/{date}                           upsert (PUT)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication (register, login, refresh, logout).
        .nest("/auth", auth::router())
        // Notes hierarchy: categories and their nested pages.
        .nest("/categories", categories::router())
        // File-asset bookkeeping.
        .nest("/pages", files::page_files_router())
        .nest("/files", files::files_router())
        // Title/content search over active rows.
        .route("/search", get(handlers::search::search))
        // Trash lifecycle: list, restore, purge.
        .nest("/trash", trash::router())
        // Habit tracking and reminders.
        .nest("/habits", habits::router())
        .nest("/reminders", habits::reminders_router())
        // Daily journal.
        .nest("/journal", journal::router())
        // Todo / not-todo lists.
        .nest("/todos", todos::router())
        // Daily scoring calendar.
        .nest("/scores", scores::router())
}
