//! Handlers for the `/scores` resource (daily scoring calendar).

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{Datelike, NaiveDate, Utc};
use lifeboard_core::error::CoreError;
use lifeboard_core::scoring::{validate_components, ScoreColor};
use lifeboard_db::models::score::{DailyScore, UpsertDailyScore};
use lifeboard_db::repositories::ScoreRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for the calendar range. Defaults to the current
/// month (first day through today).
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// A stored score plus its presentation color band.
#[derive(Debug, Serialize)]
pub struct ScoreView {
    #[serde(flatten)]
    pub score: DailyScore,
    pub color: ScoreColor,
}

impl From<DailyScore> for ScoreView {
    fn from(score: DailyScore) -> Self {
        let color = score.color();
        ScoreView { score, color }
    }
}

/// GET /api/v1/scores?from=YYYY-MM-DD&to=YYYY-MM-DD
///
/// Scores in the inclusive range, oldest first.
pub async fn list_scores(
    user: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> AppResult<Json<DataResponse<Vec<ScoreView>>>> {
    let today = Utc::now().date_naive();
    let from = params
        .from
        .unwrap_or_else(|| today.with_day(1).unwrap_or(today));
    let to = params.to.unwrap_or(today);

    if from > to {
        return Err(AppError::Core(CoreError::Validation(
            "'from' must not be after 'to'".into(),
        )));
    }

    let scores = ScoreRepo::list_range(&state.pool, user.user_id, from, to).await?;
    let views = scores.into_iter().map(ScoreView::from).collect();
    Ok(Json(DataResponse { data: views }))
}

/// PUT /api/v1/scores/{date}
///
/// Insert or replace the day's score. The total is computed server-side
/// from the four components.
pub async fn upsert_score(
    user: AuthUser,
    State(state): State<AppState>,
    Path(date): Path<NaiveDate>,
    Json(input): Json<UpsertDailyScore>,
) -> AppResult<Json<DataResponse<ScoreView>>> {
    validate_components(
        input.do_points,
        input.dont_points,
        input.journal_point,
        input.learning_point,
    )
    .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;

    let score = ScoreRepo::upsert(&state.pool, user.user_id, date, &input).await?;
    tracing::info!(
        user_id = user.user_id,
        score_date = %date,
        total = score.total_points,
        "Daily score saved"
    );
    Ok(Json(DataResponse { data: score.into() }))
}
