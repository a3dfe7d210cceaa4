//! backup-alert — one-shot backup freshness check.
//!
//! Reads the last-backup timestamp file, emails an alert when the backup is
//! more than one day old, and appends the outcome to the check log. Any
//! failure (unreadable file, malformed timestamp, mail rejection) terminates
//! the process with a non-zero exit.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use modelops_monitor::cli::MailArgs;
use modelops_monitor::{run_alert, AlertContext, CheckLog};

/// Backup freshness check — alerts by email when the last backup is stale.
#[derive(Parser, Debug)]
#[command(name = "backup-alert", version, about)]
struct Cli {
    /// Path to the file holding the last-backup timestamp (YYYY-M-D-H-M).
    timestamp_file: PathBuf,

    /// Append-only check log.
    #[arg(long, env = "BACKUP_CHECK_LOG", default_value = "/var/log/backup-checks.log")]
    log: PathBuf,

    #[command(flatten)]
    mail: MailArgs,

    /// Environment label used in the alert subject.
    #[arg(long, env = "ENV_NAME", default_value = "")]
    environment: String,

    /// Label naming the monitored backup set.
    #[arg(long)]
    bucket: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mailer = cli.mail.build_mailer()?;

    let ctx = AlertContext {
        environment: cli.environment,
        bucket: cli.bucket,
        from: cli.mail.from.clone(),
        to: cli.mail.to.clone(),
    };
    let log = CheckLog::new(cli.log);

    let status = run_alert(
        mailer.as_ref(),
        &log,
        &cli.timestamp_file,
        &ctx,
        chrono::Utc::now().naive_utc(),
    )
    .await?;

    info!(status = %status, "backup check complete");
    Ok(())
}
