//! Shared CLI surface for the monitor binaries: mail channel selection.

use clap::Args;

use modelops_notify::{HttpApiMailer, Mailer, SmtpMailer};

/// Mail delivery options shared by both scripts. The HTTP mail API is used
/// when a key and domain are configured; otherwise an SMTP relay host must
/// be given.
#[derive(Args, Debug)]
pub struct MailArgs {
    /// Mail provider API key.
    #[arg(long, env = "MAIL_API_KEY")]
    pub mail_api_key: Option<String>,

    /// Mail provider sending domain.
    #[arg(long, env = "MAIL_DOMAIN")]
    pub mail_domain: Option<String>,

    /// SMTP relay host (fallback channel when no API key is configured).
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP relay port.
    #[arg(long, env = "SMTP_PORT")]
    pub smtp_port: Option<u16>,

    /// Sender address.
    #[arg(long, env = "MAIL_FROM")]
    pub from: String,

    /// Recipient address.
    #[arg(long, env = "MAIL_TO")]
    pub to: String,
}

impl MailArgs {
    pub fn build_mailer(&self) -> anyhow::Result<Box<dyn Mailer>> {
        if let (Some(key), Some(domain)) = (&self.mail_api_key, &self.mail_domain) {
            return Ok(Box::new(HttpApiMailer::new(domain, key)?));
        }
        if let Some(host) = &self.smtp_host {
            return Ok(Box::new(SmtpMailer::from_config(
                host,
                self.smtp_port,
                None,
            )?));
        }
        anyhow::bail!("no mail channel configured: set --mail-api-key/--mail-domain or --smtp-host")
    }
}
