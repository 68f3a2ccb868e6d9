//! HTTP-level integration tests for journal entries and todo items.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete, get, post_json, seed_authed_user};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: journal CRUD round-trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_journal_roundtrip(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "journaler", "password-123").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/journal",
        Some(&token),
        serde_json::json!({
            "entry_date": "2024-03-10",
            "title": "Good day",
            "content": "<p>Closed two trades.</p>"
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let entry_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/journal/{entry_id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Good day");

    let app = build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/journal/{entry_id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool);
    let response = get(app, &format!("/api/v1/journal/{entry_id}"), Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: todo toggle and kind grouping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_todo_toggle_and_kinds(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "lister", "password-123").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/todos",
        Some(&token),
        serde_json::json!({ "label": "Review charts" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let todo_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/todos",
        Some(&token),
        serde_json::json!({ "label": "No revenge trading", "kind": "not_todo" }),
    )
    .await;

    // Toggle the first item done.
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/todos/{todo_id}/toggle"),
        Some(&token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_done"], true);

    // Listing returns both kinds.
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/todos", Some(&token)).await;
    let json = body_json(response).await;
    let items = json["data"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert!(items.iter().any(|i| i["kind"] == "not_todo"));
}
