//! HTTP-level integration tests for habits, toggles, streaks, and scores.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, post_json, put_json, seed_authed_user};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: toggle-today flips the day's completion state
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_toggle_today_roundtrip(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "toggler", "password-123").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/habits",
        Some(&token),
        serde_json::json!({ "name": "Meditate" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let habit_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // First toggle checks today.
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/habits/{habit_id}/toggle-today"),
        Some(&token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["completed_today"], true);

    // A one-day streak.
    let app = build_test_app(pool.clone());
    let response = get(
        app,
        &format!("/api/v1/habits/{habit_id}/streak"),
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["streak"], 1);

    // Second toggle unchecks.
    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/habits/{habit_id}/toggle-today"),
        Some(&token),
        serde_json::json!({}),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["completed_today"], false);

    let app = build_test_app(pool);
    let response = get(
        app,
        &format!("/api/v1/habits/{habit_id}/streak"),
        Some(&token),
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["streak"], 0);
}

// ---------------------------------------------------------------------------
// Test: invalid custom_days csv is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_custom_days(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "customer", "password-123").await;

    let app = build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/habits",
        Some(&token),
        serde_json::json!({ "name": "Gym", "frequency": "custom", "custom_days": "mon,wed" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: reminder with an unknown channel is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reminder_unknown_channel(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "reminded", "password-123").await;

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/habits",
        Some(&token),
        serde_json::json!({ "name": "Hydrate" }),
    )
    .await;
    let habit_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let app = build_test_app(pool.clone());
    let response = post_json(
        app,
        &format!("/api/v1/habits/{habit_id}/reminders"),
        Some(&token),
        serde_json::json!({ "channel": "carrier-pigeon", "when_time": "08:30:00" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // A valid one goes through.
    let app = build_test_app(pool);
    let response = post_json(
        app,
        &format!("/api/v1/habits/{habit_id}/reminders"),
        Some(&token),
        serde_json::json!({ "channel": "email", "when_time": "08:30:00", "weekdays": "0,2,4" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Test: score upsert computes the total and color server-side
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_score_upsert_and_range(pool: PgPool) {
    let (_, token) = seed_authed_user(&pool, "scorer", "password-123").await;

    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/scores/2024-03-10",
        Some(&token),
        serde_json::json!({
            "do_points": 4, "dont_points": 3, "journal_point": 1, "learning_point": 0
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["total_points"], 8);
    assert_eq!(json["data"]["color"], "green");

    // Out-of-range components are rejected.
    let app = build_test_app(pool.clone());
    let response = put_json(
        app,
        "/api/v1/scores/2024-03-11",
        Some(&token),
        serde_json::json!({
            "do_points": 9, "dont_points": 0, "journal_point": 0, "learning_point": 0
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The calendar range returns the stored day.
    let app = build_test_app(pool);
    let response = get(
        app,
        "/api/v1/scores?from=2024-03-01&to=2024-03-31",
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let days = json["data"].as_array().unwrap();
    assert_eq!(days.len(), 1);
    assert_eq!(days[0]["score_date"], "2024-03-10");
}
