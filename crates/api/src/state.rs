use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// Constructed once at startup and threaded through request handling;
/// cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lifeboard_db::DbPool,
    /// Server configuration (JWT settings, notifier settings, timeouts).
    pub config: Arc<ServerConfig>,
}
