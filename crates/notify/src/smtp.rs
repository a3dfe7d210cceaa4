//! SMTP mailer via `lettre` with TLS support.
//!
//! Alternative delivery channel for environments without a mail-provider
//! API key. Supports STARTTLS and plain connections.

use lettre::{
    message::Mailbox, transport::smtp::authentication::Credentials, AsyncSmtpTransport,
    AsyncTransport, Message, Tokio1Executor,
};

use crate::traits::{MailError, MailMessage, Mailer};

/// Sends messages through an SMTP relay.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpMailer {
    /// Build an `SmtpMailer` from SMTP configuration.
    ///
    /// - `smtp_host`: SMTP server hostname.
    /// - `smtp_port`: Optional port (defaults to 587).
    /// - `tls`: `None` or `Some(true)` enables STARTTLS.
    ///
    /// SMTP credentials are resolved from the `SMTP_USERNAME` and
    /// `SMTP_PASSWORD` environment variables; if both are set they are passed
    /// to the transport, otherwise the connection is unauthenticated.
    pub fn from_config(
        smtp_host: &str,
        smtp_port: Option<u16>,
        tls: Option<bool>,
    ) -> Result<Self, MailError> {
        if smtp_host.is_empty() {
            return Err(MailError::Config(
                "SMTP host must not be empty".to_string(),
            ));
        }

        let port = smtp_port.unwrap_or(587);
        let use_tls = tls.unwrap_or(true);

        let mut builder = if use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(smtp_host)
                .map_err(|e| MailError::Config(e.to_string()))?
                .port(port)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(smtp_host).port(port)
        };

        // Attach credentials from environment if available.
        if let (Ok(username), Ok(password)) =
            (std::env::var("SMTP_USERNAME"), std::env::var("SMTP_PASSWORD"))
        {
            builder = builder.credentials(Credentials::new(username, password));
        }

        Ok(Self {
            transport: builder.build(),
        })
    }
}

#[async_trait::async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let from: Mailbox = message
            .from
            .parse()
            .map_err(|e: lettre::address::AddressError| MailError::Config(e.to_string()))?;
        let to: Mailbox = message
            .to
            .parse()
            .map_err(|e: lettre::address::AddressError| MailError::Config(e.to_string()))?;

        let email = Message::builder()
            .from(from)
            .to(to)
            .subject(&message.subject)
            .body(message.body.clone())
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| MailError::Smtp(e.to_string()))?;

        tracing::info!(
            channel = "smtp",
            subject = %message.subject,
            to = %message.to,
            "mail delivered"
        );

        Ok(())
    }

    /// Returns `"smtp"`.
    fn channel_name(&self) -> &str {
        "smtp"
    }
}
