//! HTTP mail-provider API mailer.
//!
//! Delivers messages through a Mailgun-style REST endpoint:
//! `POST {base_url}/{domain}/messages` with basic auth (`api:<key>`) and
//! form-encoded `from`/`to`/`subject`/`text` fields.

use crate::traits::{MailError, MailMessage, Mailer};

const DEFAULT_BASE_URL: &str = "https://api.mailgun.net/v3";

/// Sends messages via an HTTP mail-provider API.
#[derive(Debug)]
pub struct HttpApiMailer {
    base_url: String,
    domain: String,
    api_key: String,
    client: reqwest::Client,
}

impl HttpApiMailer {
    /// Create a mailer for the given sending domain and API key.
    ///
    /// Returns [`MailError::Config`] if either is empty.
    pub fn new(domain: &str, api_key: &str) -> Result<Self, MailError> {
        Self::with_base_url(DEFAULT_BASE_URL, domain, api_key)
    }

    /// Like [`HttpApiMailer::new`] but against a custom endpoint (used by
    /// tests and non-default provider regions).
    pub fn with_base_url(base_url: &str, domain: &str, api_key: &str) -> Result<Self, MailError> {
        if domain.is_empty() {
            return Err(MailError::Config(
                "mail domain must not be empty".to_string(),
            ));
        }
        if api_key.is_empty() {
            return Err(MailError::Config(
                "mail API key must not be empty".to_string(),
            ));
        }
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            domain: domain.to_string(),
            api_key: api_key.to_string(),
            client: reqwest::Client::new(),
        })
    }
}

#[async_trait::async_trait]
impl Mailer for HttpApiMailer {
    async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
        let url = format!("{}/{}/messages", self.base_url, self.domain);

        let form = [
            ("from", message.from.as_str()),
            ("to", message.to.as_str()),
            ("subject", message.subject.as_str()),
            ("text", message.body.as_str()),
        ];

        let response = self
            .client
            .post(&url)
            .basic_auth("api", Some(&self.api_key))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MailError::Api {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(
            channel = "mail-api",
            subject = %message.subject,
            to = %message.to,
            "mail delivered"
        );

        Ok(())
    }

    /// Returns `"mail-api"`.
    fn channel_name(&self) -> &str {
        "mail-api"
    }
}
