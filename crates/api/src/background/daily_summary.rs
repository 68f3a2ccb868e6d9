//! Daily habit summary emails.
//!
//! Fires once per day at the configured hour: for every active user,
//! counts today's completed habit logs and emails a one-line summary.
//! A last-sent-date latch keeps the minute-granular loop from sending
//! twice within the same day.

use std::time::Duration;

use chrono::{NaiveDate, Timelike};
use lifeboard_db::repositories::{HabitLogRepo, UserRepo};
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crate::notifications::Notifier;

/// How often the hour gate is checked.
const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Run the daily-summary loop until `cancel` is triggered.
///
/// `summary_hour` is the local hour of day (0-23) the summary goes out.
pub async fn run(pool: PgPool, notifier: Notifier, summary_hour: u32, cancel: CancellationToken) {
    tracing::info!(summary_hour, "Daily summary job started");

    let mut interval = tokio::time::interval(TICK_INTERVAL);
    let mut last_sent: Option<NaiveDate> = None;

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Daily summary job stopping");
                break;
            }
            _ = interval.tick() => {
                let now = chrono::Local::now();
                let today = now.date_naive();

                if now.hour() != summary_hour || last_sent == Some(today) {
                    continue;
                }

                match send_summaries(&pool, &notifier, today).await {
                    Ok(sent) => {
                        tracing::info!(sent, "Daily summaries sent");
                        last_sent = Some(today);
                    }
                    Err(e) => {
                        // Not latched: retry on the next tick within the hour.
                        tracing::error!(error = %e, "Daily summary run failed");
                    }
                }
            }
        }
    }
}

/// Email every active user their completed-habit count for `today`.
async fn send_summaries(
    pool: &PgPool,
    notifier: &Notifier,
    today: NaiveDate,
) -> Result<u64, sqlx::Error> {
    let users = UserRepo::list_active(pool).await?;
    let mut sent = 0;

    for user in users {
        let completed = HabitLogRepo::count_completed_on(pool, user.id, today).await?;
        let body = format!("You completed {completed} habits today. Keep it up!");
        notifier
            .send_email(&user.email, "Your daily summary", &body)
            .await;
        sent += 1;
    }

    Ok(sent)
}
