use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development,
/// except the JWT secret. In production, override via environment
/// variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Graceful shutdown timeout in seconds (default: `30`).
    pub shutdown_timeout_secs: u64,
    /// Hour of day (local time) the daily summary fires (default: `21`).
    pub summary_hour: u32,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// Outbound notification configuration (SMTP, Telegram).
    pub notifier: NotifierConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `SHUTDOWN_TIMEOUT_SECS`| `30`                       |
    /// | `SUMMARY_HOUR`         | `21`                       |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let shutdown_timeout_secs: u64 = std::env::var("SHUTDOWN_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SHUTDOWN_TIMEOUT_SECS must be a valid u64");

        let summary_hour: u32 = std::env::var("SUMMARY_HOUR")
            .unwrap_or_else(|_| "21".into())
            .parse()
            .expect("SUMMARY_HOUR must be a valid hour (0-23)");
        assert!(summary_hour < 24, "SUMMARY_HOUR must be 0-23");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            shutdown_timeout_secs,
            summary_hour,
            jwt: JwtConfig::from_env(),
            notifier: NotifierConfig::from_env(),
        }
    }
}

/// Outbound notification settings. Every field is optional: a channel
/// with missing settings is silently disabled rather than an error, so a
/// bare development instance runs without SMTP or a bot token.
#[derive(Debug, Clone, Default)]
pub struct NotifierConfig {
    /// SMTP relay host (`MAIL_SERVER`).
    pub smtp_host: Option<String>,
    /// SMTP port (`MAIL_PORT`, default `587`).
    pub smtp_port: u16,
    /// SMTP login (`MAIL_USERNAME`).
    pub smtp_username: Option<String>,
    /// SMTP password (`MAIL_PASSWORD`).
    pub smtp_password: Option<String>,
    /// From address (`MAIL_DEFAULT_SENDER`, falls back to the username).
    pub smtp_sender: Option<String>,
    /// Telegram bot token (`TELEGRAM_BOT_TOKEN`).
    pub telegram_bot_token: Option<String>,
    /// Telegram chat id reminders are sent to (`TELEGRAM_CHAT_ID`).
    pub telegram_chat_id: Option<String>,
}

impl NotifierConfig {
    /// Load notifier configuration from environment variables.
    pub fn from_env() -> Self {
        let smtp_port: u16 = std::env::var("MAIL_PORT")
            .unwrap_or_else(|_| "587".into())
            .parse()
            .expect("MAIL_PORT must be a valid u16");

        Self {
            smtp_host: std::env::var("MAIL_SERVER").ok(),
            smtp_port,
            smtp_username: std::env::var("MAIL_USERNAME").ok(),
            smtp_password: std::env::var("MAIL_PASSWORD").ok(),
            smtp_sender: std::env::var("MAIL_DEFAULT_SENDER").ok(),
            telegram_bot_token: std::env::var("TELEGRAM_BOT_TOKEN").ok(),
            telegram_chat_id: std::env::var("TELEGRAM_CHAT_ID").ok(),
        }
    }
}
