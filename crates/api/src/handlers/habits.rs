//! Handlers for the `/habits` resource: habit CRUD, the per-day
//! completion toggle, streaks, and habit-scoped reminders.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use lifeboard_core::error::CoreError;
use lifeboard_core::schedule::parse_weekdays;
use lifeboard_core::streak::current_streak;
use lifeboard_core::types::DbId;
use lifeboard_db::models::habit::{CreateHabit, Habit, UpdateHabit};
use lifeboard_db::models::reminder::{CreateReminder, Reminder, REMINDER_CHANNELS};
use lifeboard_db::repositories::{HabitLogRepo, HabitRepo, ReminderRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of toggling today's completion state.
#[derive(Debug, Serialize)]
pub struct ToggleResult {
    pub habit_id: DbId,
    pub completed_today: bool,
}

/// Current streak for a habit.
#[derive(Debug, Serialize)]
pub struct StreakResult {
    pub habit_id: DbId,
    pub streak: u32,
}

/// GET /api/v1/habits
///
/// List the user's habits.
pub async fn list_habits(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Habit>>>> {
    let habits = HabitRepo::list(&state.pool, user.user_id).await?;
    Ok(Json(DataResponse { data: habits }))
}

/// POST /api/v1/habits
///
/// Create a habit.
pub async fn create_habit(
    user: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateHabit>,
) -> AppResult<(StatusCode, Json<DataResponse<Habit>>)> {
    if input.name.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Habit name must not be empty".into(),
        )));
    }
    if let Some(days) = &input.custom_days {
        parse_weekdays(days).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let habit = HabitRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(user_id = user.user_id, habit_id = habit.id, "Habit created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: habit })))
}

/// PUT /api/v1/habits/{id}
///
/// Update a habit.
pub async fn update_habit(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateHabit>,
) -> AppResult<Json<DataResponse<Habit>>> {
    if let Some(name) = &input.name {
        if name.trim().is_empty() {
            return Err(AppError::Core(CoreError::Validation(
                "Habit name must not be empty".into(),
            )));
        }
    }
    if let Some(days) = &input.custom_days {
        parse_weekdays(days).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    let habit = HabitRepo::update(&state.pool, user.user_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Habit",
            id,
        }))?;
    Ok(Json(DataResponse { data: habit }))
}

/// DELETE /api/v1/habits/{id}
///
/// Delete a habit outright (no trash: logs and reminders cascade).
pub async fn delete_habit(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = HabitRepo::delete(&state.pool, user.user_id, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Habit",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/habits/{id}/toggle-today
///
/// Check or uncheck today's completion: deletes the log if one exists,
/// creates it otherwise.
pub async fn toggle_today(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ToggleResult>>> {
    ensure_habit(&state, &user, id).await?;
    let today = Utc::now().date_naive();

    let existing = HabitLogRepo::find_for_day(&state.pool, user.user_id, id, today).await?;
    let completed_today = match existing {
        Some(_) => {
            HabitLogRepo::delete_for_day(&state.pool, user.user_id, id, today).await?;
            false
        }
        None => {
            HabitLogRepo::create(&state.pool, user.user_id, id, today).await?;
            true
        }
    };

    Ok(Json(DataResponse {
        data: ToggleResult {
            habit_id: id,
            completed_today,
        },
    }))
}

/// GET /api/v1/habits/{id}/streak
///
/// The unbroken run of completed days ending today.
pub async fn streak(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StreakResult>>> {
    ensure_habit(&state, &user, id).await?;
    let dates = HabitLogRepo::completed_dates(&state.pool, user.user_id, id).await?;
    let streak = current_streak(Utc::now().date_naive(), &dates);
    Ok(Json(DataResponse {
        data: StreakResult {
            habit_id: id,
            streak,
        },
    }))
}

// ---------------------------------------------------------------------------
// Reminders
// ---------------------------------------------------------------------------

/// GET /api/v1/habits/{id}/reminders
///
/// List the habit's reminders.
pub async fn list_reminders(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Reminder>>>> {
    ensure_habit(&state, &user, id).await?;
    let reminders = ReminderRepo::list_for_habit(&state.pool, user.user_id, id).await?;
    Ok(Json(DataResponse { data: reminders }))
}

/// POST /api/v1/habits/{id}/reminders
///
/// Attach a reminder to the habit.
pub async fn create_reminder(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateReminder>,
) -> AppResult<(StatusCode, Json<DataResponse<Reminder>>)> {
    if let Some(channel) = &input.channel {
        if !REMINDER_CHANNELS.contains(&channel.as_str()) {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown reminder channel: {channel}"
            ))));
        }
    }
    if let Some(days) = &input.weekdays {
        parse_weekdays(days).map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
    }

    ensure_habit(&state, &user, id).await?;
    let reminder = ReminderRepo::create(&state.pool, user.user_id, id, &input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: reminder })))
}

/// DELETE /api/v1/reminders/{id}
///
/// Remove a reminder.
pub async fn delete_reminder(
    user: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let removed = ReminderRepo::delete(&state.pool, user.user_id, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Reminder",
            id,
        }));
    }
    Ok(StatusCode::NO_CONTENT)
}

/// Resolve the habit and confirm it is the caller's.
async fn ensure_habit(state: &AppState, user: &AuthUser, id: DbId) -> AppResult<()> {
    HabitRepo::find_by_id(&state.pool, user.user_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Habit",
            id,
        }))?;
    Ok(())
}
