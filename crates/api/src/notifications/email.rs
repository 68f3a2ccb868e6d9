//! SMTP email delivery via lettre.

use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::NotifierConfig;

/// An SMTP sender bound to one relay + credentials.
#[derive(Clone)]
pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: String,
}

impl Mailer {
    /// Build the mailer when host, username, and password are all set;
    /// `None` otherwise. The From address falls back to the username.
    pub fn from_config(config: &NotifierConfig) -> Option<Mailer> {
        let host = config.smtp_host.as_deref()?;
        let username = config.smtp_username.as_deref()?;
        let password = config.smtp_password.as_deref()?;
        let sender = config
            .smtp_sender
            .clone()
            .unwrap_or_else(|| username.to_string());

        let transport = match AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host) {
            Ok(builder) => builder
                .port(config.smtp_port)
                .credentials(Credentials::new(username.to_string(), password.to_string()))
                .build(),
            Err(e) => {
                tracing::error!(error = %e, host, "Invalid SMTP relay; email disabled");
                return None;
            }
        };

        Some(Mailer { transport, sender })
    }

    /// Send a plain-text message. Errors are logged, never propagated.
    pub async fn send(&self, to: &str, subject: &str, body: &str) {
        let message = Message::builder()
            .from(match self.sender.parse() {
                Ok(mbox) => mbox,
                Err(e) => {
                    tracing::error!(error = %e, sender = %self.sender, "Invalid sender address");
                    return;
                }
            })
            .to(match to.parse() {
                Ok(mbox) => mbox,
                Err(e) => {
                    tracing::warn!(error = %e, to, "Invalid recipient address; skipping");
                    return;
                }
            })
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string());

        let message = match message {
            Ok(m) => m,
            Err(e) => {
                tracing::error!(error = %e, "Failed to build email message");
                return;
            }
        };

        match self.transport.send(message).await {
            Ok(_) => tracing::debug!(to, subject, "Email sent"),
            Err(e) => tracing::warn!(error = %e, to, "Email delivery failed"),
        }
    }
}
