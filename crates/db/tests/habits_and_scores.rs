//! Integration tests for habit logs, reminders, and daily scores.

mod common;

use chrono::{NaiveDate, NaiveTime};
use common::seed_user;
use lifeboard_db::models::habit::CreateHabit;
use lifeboard_db::models::reminder::CreateReminder;
use lifeboard_db::models::score::UpsertDailyScore;
use lifeboard_db::repositories::{HabitLogRepo, HabitRepo, ReminderRepo, ScoreRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_habit(name: &str) -> CreateHabit {
    CreateHabit {
        name: name.to_string(),
        frequency: None,
        custom_days: None,
        category: None,
        color: None,
        icon: None,
        start_date: None,
        end_date: None,
    }
}

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

// ---------------------------------------------------------------------------
// Test: one log per habit per day
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_habit_log_unique_per_day(pool: PgPool) {
    let user = seed_user(&pool, "logger").await;
    let habit = HabitRepo::create(&pool, user.id, &new_habit("Meditate"))
        .await
        .unwrap();
    let day = d("2024-03-10");

    HabitLogRepo::create(&pool, user.id, habit.id, day)
        .await
        .unwrap();

    // Second insert for the same day violates uq_habit_log_once_per_day.
    let dup = HabitLogRepo::create(&pool, user.id, habit.id, day).await;
    assert!(dup.is_err(), "duplicate day log must hit the unique constraint");
}

// ---------------------------------------------------------------------------
// Test: toggle flow -- insert then delete for the same day
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_habit_log_toggle_roundtrip(pool: PgPool) {
    let user = seed_user(&pool, "toggler").await;
    let habit = HabitRepo::create(&pool, user.id, &new_habit("Run"))
        .await
        .unwrap();
    let day = d("2024-03-10");

    assert!(HabitLogRepo::find_for_day(&pool, user.id, habit.id, day)
        .await
        .unwrap()
        .is_none());

    HabitLogRepo::create(&pool, user.id, habit.id, day)
        .await
        .unwrap();
    assert!(HabitLogRepo::find_for_day(&pool, user.id, habit.id, day)
        .await
        .unwrap()
        .is_some());

    let removed = HabitLogRepo::delete_for_day(&pool, user.id, habit.id, day)
        .await
        .unwrap();
    assert!(removed);
    assert!(HabitLogRepo::find_for_day(&pool, user.id, habit.id, day)
        .await
        .unwrap()
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: completed dates come back newest first
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completed_dates_order(pool: PgPool) {
    let user = seed_user(&pool, "streaker").await;
    let habit = HabitRepo::create(&pool, user.id, &new_habit("Read"))
        .await
        .unwrap();

    for day in ["2024-03-08", "2024-03-10", "2024-03-09"] {
        HabitLogRepo::create(&pool, user.id, habit.id, d(day))
            .await
            .unwrap();
    }

    let dates = HabitLogRepo::completed_dates(&pool, user.id, habit.id)
        .await
        .unwrap();
    assert_eq!(dates, vec![d("2024-03-10"), d("2024-03-09"), d("2024-03-08")]);
}

// ---------------------------------------------------------------------------
// Test: deleting a habit cascades to its logs and reminders
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_habit_delete_cascades(pool: PgPool) {
    let user = seed_user(&pool, "cleaner").await;
    let habit = HabitRepo::create(&pool, user.id, &new_habit("Stretch"))
        .await
        .unwrap();
    HabitLogRepo::create(&pool, user.id, habit.id, d("2024-03-10"))
        .await
        .unwrap();
    ReminderRepo::create(
        &pool,
        user.id,
        habit.id,
        &CreateReminder {
            channel: None,
            when_time: NaiveTime::from_hms_opt(8, 30, 0).unwrap(),
            weekdays: None,
        },
    )
    .await
    .unwrap();

    let removed = HabitRepo::delete(&pool, user.id, habit.id).await.unwrap();
    assert!(removed);

    for table in ["habit_logs", "reminders"] {
        let (count,): (i64,) =
            sqlx::query_as(&format!("SELECT COUNT(*) FROM {table} WHERE habit_id = $1"))
                .bind(habit.id)
                .fetch_one(&pool)
                .await
                .unwrap();
        assert_eq!(count, 0, "{table} rows must die with their habit");
    }
}

// ---------------------------------------------------------------------------
// Test: score upsert replaces the day's row and recomputes the total
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_score_upsert_recomputes_total(pool: PgPool) {
    let user = seed_user(&pool, "scorer").await;
    let day = d("2024-03-10");

    let first = ScoreRepo::upsert(
        &pool,
        user.id,
        day,
        &UpsertDailyScore {
            do_points: 3,
            dont_points: 2,
            journal_point: 1,
            learning_point: 0,
            journal_text: None,
            learning_text: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(first.total_points, 6);

    let second = ScoreRepo::upsert(
        &pool,
        user.id,
        day,
        &UpsertDailyScore {
            do_points: 4,
            dont_points: 4,
            journal_point: 1,
            learning_point: 1,
            journal_text: Some("learned about recursive CTEs".to_string()),
            learning_text: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(second.id, first.id, "same day must update in place");
    assert_eq!(second.total_points, 10);

    let range = ScoreRepo::list_range(&pool, user.id, day, day).await.unwrap();
    assert_eq!(range.len(), 1);
}
