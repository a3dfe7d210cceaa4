//! Mailer trait definition and shared error types.

/// Errors that can occur during mail delivery.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Mail API rejected the message ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("SMTP delivery failed: {0}")]
    Smtp(String),

    #[error("Template rendering failed: {0}")]
    Template(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// A rendered message ready for delivery.
#[derive(Debug, Clone, serde::Serialize)]
pub struct MailMessage {
    /// Sender address (e.g. `"alerts@example.com"`).
    pub from: String,
    /// Recipient address.
    pub to: String,
    /// Rendered subject line.
    pub subject: String,
    /// Rendered plain-text body.
    pub body: String,
}

/// Trait for mail delivery channel implementations.
#[async_trait::async_trait]
pub trait Mailer: Send + Sync {
    /// Deliver a message through this channel.
    async fn send(&self, message: &MailMessage) -> Result<(), MailError>;

    /// Human-readable name for this channel (e.g., "mail-api", "smtp").
    fn channel_name(&self) -> &str;
}
