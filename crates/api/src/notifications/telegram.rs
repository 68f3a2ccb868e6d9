//! Telegram delivery via the Bot API `sendMessage` call.

use std::time::Duration;

use crate::config::NotifierConfig;

/// Request timeout for the Bot API call.
const SEND_TIMEOUT: Duration = Duration::from_secs(10);

/// A Telegram sender bound to one bot token + chat id.
#[derive(Clone)]
pub struct TelegramSender {
    client: reqwest::Client,
    token: String,
    chat_id: String,
}

impl TelegramSender {
    /// Build the sender when both the bot token and chat id are set;
    /// `None` otherwise.
    pub fn from_config(config: &NotifierConfig) -> Option<TelegramSender> {
        let token = config.telegram_bot_token.clone()?;
        let chat_id = config.telegram_chat_id.clone()?;
        Some(TelegramSender {
            client: reqwest::Client::new(),
            token,
            chat_id,
        })
    }

    /// POST the message to the Bot API. Errors are logged, never
    /// propagated.
    pub async fn send(&self, text: &str) {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.token);
        let result = self
            .client
            .post(&url)
            .timeout(SEND_TIMEOUT)
            .json(&serde_json::json!({
                "chat_id": self.chat_id,
                "text": text,
            }))
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => {
                tracing::debug!("Telegram message sent");
            }
            Ok(response) => {
                tracing::warn!(status = %response.status(), "Telegram API rejected message");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Telegram delivery failed");
            }
        }
    }
}
