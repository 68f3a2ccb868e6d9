//! Outbound notification channels (email via SMTP, Telegram bot).
//!
//! A channel with missing configuration is silently disabled: sends
//! become debug-logged no-ops so a development instance runs without
//! SMTP credentials or a bot token.

pub mod email;
pub mod telegram;

use crate::config::NotifierConfig;

/// Bundles both channels behind one send surface for the background jobs.
///
/// Sends never fail the caller: delivery errors are logged and swallowed,
/// because a reminder tick must not abort over one bad mailbox.
#[derive(Clone)]
pub struct Notifier {
    mailer: Option<email::Mailer>,
    telegram: Option<telegram::TelegramSender>,
}

impl Notifier {
    /// Build the notifier from configuration, enabling each channel only
    /// when its settings are complete.
    pub fn from_config(config: &NotifierConfig) -> Self {
        let mailer = email::Mailer::from_config(config);
        let telegram = telegram::TelegramSender::from_config(config);

        if mailer.is_none() {
            tracing::info!("SMTP not configured; email notifications disabled");
        }
        if telegram.is_none() {
            tracing::info!("Telegram not configured; telegram notifications disabled");
        }

        Notifier { mailer, telegram }
    }

    /// Send an email, if the channel is configured.
    pub async fn send_email(&self, to: &str, subject: &str, body: &str) {
        match &self.mailer {
            Some(mailer) => mailer.send(to, subject, body).await,
            None => tracing::debug!(to, subject, "Email channel disabled; dropping message"),
        }
    }

    /// Send a Telegram message to the configured chat, if enabled.
    pub async fn send_telegram(&self, text: &str) {
        match &self.telegram {
            Some(sender) => sender.send(text).await,
            None => tracing::debug!("Telegram channel disabled; dropping message"),
        }
    }
}
