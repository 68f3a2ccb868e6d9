//! HTTP-level integration tests for categories and pages.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, put_json, seed_authed_user};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: create assigns a slug and returns 201
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_category(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "creator", "password-123").await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/categories",
        Some(&token),
        serde_json::json!({ "title": "Trading Journal", "icon": "📁" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["slug"], "trading-journal");
    assert_eq!(json["data"]["icon"], "📁");
    assert_eq!(json["data"]["is_deleted"], false);
}

// ---------------------------------------------------------------------------
// Test: colliding titles increment the slug through the API
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_duplicate_titles(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "dupes", "password-123").await;

    for expected_slug in ["notes", "notes-1", "notes-2"] {
        let app = build_test_app(pool.clone());
        let response = post_json(
            app,
            "/api/v1/categories",
            Some(&token),
            serde_json::json!({ "title": "Notes" }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["data"]["slug"], expected_slug);
    }
}

// ---------------------------------------------------------------------------
// Test: empty title is rejected before any state mutation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_title_rejected(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "blank", "password-123").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/categories",
        Some(&token),
        serde_json::json!({ "title": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM categories")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "no category row may be created");
}

// ---------------------------------------------------------------------------
// Test: renaming a category moves its URL
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rename_moves_url(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "renamer", "password-123").await;

    let app = build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/categories",
        Some(&token),
        serde_json::json!({ "title": "Old Name" }),
    )
    .await;

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/categories/old-name",
        Some(&token),
        serde_json::json!({ "title": "New Name" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(
        json["data"]["slug"], "new-name",
        "the response carries the new address"
    );

    // Old address gone, new address resolves.
    let app = build_test_app(pool.clone());
    let response = get(app, "/api/v1/categories/old-name", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = build_test_app(pool);
    let response = get(app, "/api/v1/categories/new-name", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: nested page creation and detail view
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_nested_page_detail(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "nester", "password-123").await;

    let app = build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/categories",
        Some(&token),
        serde_json::json!({ "title": "Projects" }),
    )
    .await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/categories/projects/pages",
        Some(&token),
        serde_json::json!({ "title": "Roadmap", "content": "<p>Q3 goals</p>" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let parent_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/categories/projects/pages",
        Some(&token),
        serde_json::json!({ "title": "Milestones", "parent_page_id": parent_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The parent's detail view lists the child.
    let app = build_test_app(pool.clone());
    let response = get(
        app,
        "/api/v1/categories/projects/pages/roadmap",
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["page"]["slug"], "roadmap");
    assert_eq!(json["data"]["children"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["children"][0]["slug"], "milestones");

    // Nested pages are not in the category's top-level listing.
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/categories/projects", Some(&token)).await;
    let json = body_json(response).await;
    let top_level = json["data"]["pages"].as_array().unwrap();
    assert_eq!(top_level.len(), 1);
    assert_eq!(top_level[0]["slug"], "roadmap");
}

// ---------------------------------------------------------------------------
// Test: self-parenting is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_self_parent_rejected(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "looper", "password-123").await;

    let app = build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/categories",
        Some(&token),
        serde_json::json!({ "title": "Loops" }),
    )
    .await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/categories/loops/pages",
        Some(&token),
        serde_json::json!({ "title": "Ouroboros" }),
    )
    .await;
    let page_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/categories/loops/pages/ouroboros",
        Some(&token),
        serde_json::json!({ "parent_page_id": page_id }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: search finds pages by content
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_by_content(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "searcher", "password-123").await;

    let app = build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/categories",
        Some(&token),
        serde_json::json!({ "title": "Recipes" }),
    )
    .await;

    let app = build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/categories/recipes/pages",
        Some(&token),
        serde_json::json!({ "title": "Dinner", "content": "slow-cooked ragu with pasta" }),
    )
    .await;

    let app = build_test_app(pool.clone());
    let response = get(app, "/api/v1/search?query=ragu", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["pages"].as_array().unwrap().len(), 1);
    assert_eq!(json["data"]["pages"][0]["slug"], "dinner");

    // Blank query returns nothing rather than everything.
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/search?query=", Some(&token)).await;
    let json = body_json(response).await;
    assert!(json["data"]["pages"].as_array().unwrap().is_empty());
    assert!(json["data"]["categories"].as_array().unwrap().is_empty());
}
