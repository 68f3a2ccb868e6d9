//! Minute-resolution reminder scan.
//!
//! Every tick loads the enabled reminders (joined with recipient email
//! and habit name) and sends the ones whose time and weekday filter match
//! the current minute. Runs on a fixed interval using
//! `tokio::time::interval`.

use std::time::Duration;

use lifeboard_core::schedule::reminder_is_due;
use lifeboard_db::repositories::ReminderRepo;
use sqlx::PgPool;
use tokio_util::sync::CancellationToken;

use crate::notifications::Notifier;

/// How often the reminder scan runs. Matching is minute-granular, so a
/// shorter interval would only produce duplicate sends.
const TICK_INTERVAL: Duration = Duration::from_secs(60);

/// Run the reminder scan loop until `cancel` is triggered.
pub async fn run(pool: PgPool, notifier: Notifier, cancel: CancellationToken) {
    tracing::info!(
        interval_secs = TICK_INTERVAL.as_secs(),
        "Reminder scan job started"
    );

    let mut interval = tokio::time::interval(TICK_INTERVAL);

    loop {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("Reminder scan job stopping");
                break;
            }
            _ = interval.tick() => {
                if let Err(e) = scan_once(&pool, &notifier).await {
                    tracing::error!(error = %e, "Reminder scan failed");
                }
            }
        }
    }
}

/// One scan: load enabled reminders and deliver the due ones.
async fn scan_once(pool: &PgPool, notifier: &Notifier) -> Result<(), sqlx::Error> {
    let now = chrono::Local::now().naive_local();
    let reminders = ReminderRepo::list_enabled_with_context(pool).await?;

    for reminder in reminders {
        if !reminder_is_due(reminder.when_time, reminder.weekdays.as_deref(), now) {
            continue;
        }

        let message = match &reminder.habit_name {
            Some(name) => format!("Reminder: {name}"),
            None => "Habit reminder".to_string(),
        };

        tracing::info!(
            reminder_id = reminder.id,
            channel = %reminder.channel,
            "Sending reminder"
        );

        if reminder.channel == "telegram" {
            notifier.send_telegram(&message).await;
        } else {
            notifier
                .send_email(&reminder.user_email, "Reminder", &message)
                .await;
        }
    }

    Ok(())
}
