//! HTTP-level integration tests for the `/auth` endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: register -> login -> authed request round-trip
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_login_roundtrip(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        None,
        serde_json::json!({
            "username": "maria",
            "email": "maria@example.com",
            "password": "a-long-enough-password",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["data"]["username"], "maria");
    assert!(
        json["data"].get("password_hash").is_none(),
        "responses must never carry the password hash"
    );

    // Login with the new credentials.
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({ "username": "maria", "password": "a-long-enough-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let access_token = json["access_token"].as_str().unwrap().to_string();
    assert!(json["refresh_token"].as_str().is_some());

    // The access token opens an authenticated endpoint.
    let app = build_test_app(pool);
    let response = get(app, "/api/v1/categories", Some(&access_token)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: wrong password is rejected without leaking which field was wrong
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_login_wrong_password(pool: PgPool) {
    common::seed_authed_user(&pool, "victor", "correct-password").await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({ "username": "victor", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid username or password");
}

// ---------------------------------------------------------------------------
// Test: duplicate registration conflicts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_duplicate_username(pool: PgPool) {
    common::seed_authed_user(&pool, "taken", "some-password-1").await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        None,
        serde_json::json!({
            "username": "taken",
            "email": "other@example.com",
            "password": "some-password-2",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

// ---------------------------------------------------------------------------
// Test: weak password rejected before any state mutation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_register_weak_password(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        None,
        serde_json::json!({
            "username": "weak",
            "email": "weak@example.com",
            "password": "short",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // No user row was created.
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users WHERE username = 'weak'")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Test: refresh rotates the token; the old one stops working
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_refresh_rotation(pool: PgPool) {
    common::seed_authed_user(&pool, "rotator", "rotate-me-please").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({ "username": "rotator", "password": "rotate-me-please" }),
    )
    .await;
    let json = body_json(response).await;
    let old_refresh = json["refresh_token"].as_str().unwrap().to_string();

    // Exchange it.
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        None,
        serde_json::json!({ "refresh_token": old_refresh.clone() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let new_refresh = json["refresh_token"].as_str().unwrap().to_string();
    assert_ne!(old_refresh, new_refresh);

    // The old token was revoked by the rotation.
    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        None,
        serde_json::json!({ "refresh_token": old_refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: logout revokes the refresh session
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_logout_revokes_session(pool: PgPool) {
    common::seed_authed_user(&pool, "leaver", "goodbye-forever").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({ "username": "leaver", "password": "goodbye-forever" }),
    )
    .await;
    let json = body_json(response).await;
    let refresh = json["refresh_token"].as_str().unwrap().to_string();

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/logout",
        None,
        serde_json::json!({ "refresh_token": refresh.clone() }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        None,
        serde_json::json!({ "refresh_token": refresh }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
