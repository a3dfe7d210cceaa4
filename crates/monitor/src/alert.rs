//! Backup freshness check.
//!
//! Reads the last-backup timestamp, decides `OK`/`FAIL` against "now", mails
//! an alert on `FAIL`, and appends one line to the check log. A mail-send
//! failure propagates before the log line is written, matching the
//! terminate-on-failure contract.

use std::path::Path;

use chrono::NaiveDateTime;
use serde::Serialize;

use modelops_notify::{MailMessage, Mailer, TemplateRenderer};

use crate::checklog::CheckLog;
use crate::timestamp::{elapsed_days, parse_backup_timestamp, status_for, BackupStatus};
use crate::MonitorError;

pub const ALERT_SUBJECT_TEMPLATE: &str =
    "[{{ environment }}] Backup check FAILED for {{ bucket }}";

pub const ALERT_BODY_TEMPLATE: &str = "\
The last backup for {{ bucket }} was taken at {{ timestamp }}, \
{{ elapsed_days }} day(s) ago.

Checked at {{ now }}.
";

/// Addresses and labels the alert email is built from.
#[derive(Debug, Clone)]
pub struct AlertContext {
    pub environment: String,
    pub bucket: String,
    pub from: String,
    pub to: String,
}

#[derive(Serialize)]
struct AlertTemplateContext<'a> {
    environment: &'a str,
    bucket: &'a str,
    timestamp: String,
    elapsed_days: i64,
    now: String,
}

/// Run one freshness check. Returns the status that was logged.
pub async fn run_alert(
    mailer: &dyn Mailer,
    log: &CheckLog,
    timestamp_file: &Path,
    ctx: &AlertContext,
    now: NaiveDateTime,
) -> Result<BackupStatus, MonitorError> {
    let raw = std::fs::read_to_string(timestamp_file)?;
    let backup_ts = parse_backup_timestamp(&raw)?;

    let elapsed = elapsed_days(backup_ts, now);
    let status = status_for(elapsed);

    if status == BackupStatus::Fail {
        let renderer = TemplateRenderer::new();
        let template_ctx = AlertTemplateContext {
            environment: &ctx.environment,
            bucket: &ctx.bucket,
            timestamp: backup_ts.format("%Y-%m-%d %H:%M").to_string(),
            elapsed_days: elapsed,
            now: now.format("%Y-%m-%d %H:%M").to_string(),
        };
        let message = MailMessage {
            from: ctx.from.clone(),
            to: ctx.to.clone(),
            subject: renderer.render(ALERT_SUBJECT_TEMPLATE, &template_ctx)?,
            body: renderer.render(ALERT_BODY_TEMPLATE, &template_ctx)?,
        };
        mailer.send(&message).await?;
        tracing::warn!(
            bucket = %ctx.bucket,
            elapsed_days = elapsed,
            "backup is stale, alert sent"
        );
    }

    log.append(backup_ts, now, status)?;
    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    use modelops_notify::MailError;

    /// Records sent messages; optionally fails every send.
    #[derive(Default)]
    struct RecordingMailer {
        sent: Mutex<Vec<MailMessage>>,
        fail: bool,
    }

    #[async_trait::async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, message: &MailMessage) -> Result<(), MailError> {
            if self.fail {
                return Err(MailError::Smtp("connection refused".to_string()));
            }
            self.sent.lock().unwrap().push(message.clone());
            Ok(())
        }

        fn channel_name(&self) -> &str {
            "recording"
        }
    }

    fn context() -> AlertContext {
        AlertContext {
            environment: "staging".to_string(),
            bucket: "db-backups".to_string(),
            from: "alerts@example.com".to_string(),
            to: "ops@example.com".to_string(),
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn setup(ts_value: &str) -> (tempfile::TempDir, std::path::PathBuf, CheckLog) {
        let tmp = tempfile::tempdir().unwrap();
        let ts_path = tmp.path().join("last-backup");
        std::fs::write(&ts_path, ts_value).unwrap();
        let log = CheckLog::new(tmp.path().join("checks.log"));
        (tmp, ts_path, log)
    }

    #[tokio::test]
    async fn stale_backup_sends_one_mail_and_logs_fail() {
        let (_tmp, ts_path, log) = setup("2026-8-3-12-0");
        let mailer = RecordingMailer::default();

        let status = run_alert(&mailer, &log, &ts_path, &context(), now())
            .await
            .unwrap();

        assert_eq!(status, BackupStatus::Fail);
        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].subject, "[staging] Backup check FAILED for db-backups");
        assert!(sent[0].body.contains("3 day(s) ago"));
        assert!(sent[0].body.contains("2026-08-03 12:00"));

        let contents = log.read_all().unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("\tFAIL"));
    }

    #[tokio::test]
    async fn fresh_backup_sends_nothing_and_logs_ok() {
        let (_tmp, ts_path, log) = setup("2026-8-6-1-0");
        let mailer = RecordingMailer::default();

        let status = run_alert(&mailer, &log, &ts_path, &context(), now())
            .await
            .unwrap();

        assert_eq!(status, BackupStatus::Ok);
        assert!(mailer.sent.lock().unwrap().is_empty());

        let contents = log.read_all().unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("\tOK"));
    }

    #[tokio::test]
    async fn send_failure_propagates_before_the_log_line() {
        let (_tmp, ts_path, log) = setup("2026-8-1-0-0");
        let mailer = RecordingMailer {
            fail: true,
            ..Default::default()
        };

        let err = run_alert(&mailer, &log, &ts_path, &context(), now())
            .await
            .unwrap_err();
        assert!(matches!(err, MonitorError::Mail(_)));
        assert!(log.read_all().is_err(), "log must not have been created");
    }

    #[tokio::test]
    async fn malformed_timestamp_is_an_error() {
        let (_tmp, ts_path, log) = setup("not-a-timestamp");
        let mailer = RecordingMailer::default();

        let err = run_alert(&mailer, &log, &ts_path, &context(), now())
            .await
            .unwrap_err();
        assert!(matches!(err, MonitorError::Timestamp(_)));
    }
}
