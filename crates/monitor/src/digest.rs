//! Check-log digest.
//!
//! Mails the full contents of the check log to a fixed recipient, then
//! truncates the log. Truncation happens strictly after a successful send:
//! a send failure propagates first and leaves the log intact.

use modelops_notify::{MailMessage, Mailer};

use crate::checklog::CheckLog;
use crate::MonitorError;

#[derive(Debug, Clone)]
pub struct DigestContext {
    pub environment: String,
    pub from: String,
    pub to: String,
}

/// Send the digest and truncate the log. Returns the number of log lines
/// that were mailed.
pub async fn run_digest(
    mailer: &dyn Mailer,
    log: &CheckLog,
    ctx: &DigestContext,
) -> Result<usize, MonitorError> {
    let contents = log.read_all()?;
    let line_count = contents.lines().count();

    let message = MailMessage {
        from: ctx.from.clone(),
        to: ctx.to.clone(),
        subject: format!("[{}] Backup check digest", ctx.environment),
        body: contents,
    };
    mailer.send(&message).await?;

    log.truncate()?;
    tracing::info!(lines = line_count, "digest sent, check log truncated");
    Ok(line_count)
}
