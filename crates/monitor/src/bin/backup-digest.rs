//! backup-digest — mails the accumulated check log and truncates it.
//!
//! The truncation only runs after the digest email is accepted; a send
//! failure exits non-zero and leaves the log untouched for the next run.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use modelops_monitor::cli::MailArgs;
use modelops_monitor::{run_digest, CheckLog, DigestContext};

/// Emails the backup check log as a digest, then empties it.
#[derive(Parser, Debug)]
#[command(name = "backup-digest", version, about)]
struct Cli {
    /// Path to the check log written by backup-alert.
    #[arg(default_value = "/var/log/backup-checks.log")]
    log: PathBuf,

    #[command(flatten)]
    mail: MailArgs,

    /// Environment label used in the digest subject.
    #[arg(long, env = "ENV_NAME", default_value = "")]
    environment: String,
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

    let ctx = DigestContext {
        environment: cli.environment,
        from: cli.mail.from.clone(),
        to: cli.mail.to.clone(),
    };
    let log = CheckLog::new(cli.log);

    let lines = run_digest(mailer.as_ref(), &log, &ctx).await?;
    info!(lines, "digest complete");
    Ok(())
}
