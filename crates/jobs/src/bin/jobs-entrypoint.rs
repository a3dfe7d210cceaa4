//! jobs-entrypoint — prepares the job-runner pod and hands control over.
//!
//! Writes the interactive-shell banner, generates the defaults document
//! (with permanent-failure reporting when a DSN is configured), merges the
//! caller's job definitions over it, and execs the external job runner.
//! On success this process is replaced and never returns.

use std::path::PathBuf;
use std::process::Command;

use clap::Parser;
use tracing::info;

use modelops_jobs::{deep_merge, job_defaults, SentrySettings};

const MOTD: &str = "
Welcome to the jobs pod.

Example commands:

  # List all jobs running on this pod:
  curl -s -H \"Accept: application/json\" localhost:2600/status | jq

  # Force the start of a scheduled job:
  curl -s -XPOST localhost:2600/jobs/example/start
";

/// Job-runner entrypoint: merge job definitions over defaults and exec the
/// runner.
#[derive(Parser, Debug)]
#[command(name = "jobs-entrypoint", version, about)]
struct Cli {
    /// Path to the caller's job-definition YAML.
    jobs_file: PathBuf,

    /// Alerting DSN; when set, permanent job failures are reported.
    #[arg(long, env = "SENTRY_DSN")]
    sentry_dsn: Option<String>,

    /// Environment label attached to failure reports.
    #[arg(long, env = "ENV_NAME", default_value = "")]
    env_name: String,

    /// Where the welcome banner is written.
    #[arg(long, default_value = "/service/.motd")]
    motd_path: PathBuf,

    /// Shell profile that gets a `cat <motd>` line appended.
    #[arg(long, default_value = "/root/.bashrc")]
    profile_path: PathBuf,

    /// Where the generated defaults document is written.
    #[arg(long, default_value = "/service/job-base.yml")]
    defaults_out: PathBuf,

    /// Where the merged configuration is written.
    #[arg(long, default_value = "/service/job.yml")]
    merged_out: PathBuf,

    /// External job-runner command.
    #[arg(long, env = "JOB_RUNNER_BIN", default_value = "yacron")]
    runner: String,
}

fn write_motd(cli: &Cli) -> anyhow::Result<()> {
    std::fs::write(&cli.motd_path, MOTD)?;

    use std::io::Write;
    let mut profile = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&cli.profile_path)?;
    writeln!(profile, "cat {}", cli.motd_path.display())?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    write_motd(&cli)?;

    let sentry = cli.sentry_dsn.as_ref().map(|dsn| SentrySettings {
        dsn: dsn.clone(),
        env_name: cli.env_name.clone(),
    });
    let defaults = job_defaults(&cli.runner, sentry.as_ref());
    let defaults_value: serde_yaml::Value = serde_yaml::to_value(&defaults)?;
    std::fs::write(&cli.defaults_out, serde_yaml::to_string(&defaults_value)?)?;

    let caller: serde_yaml::Value = serde_yaml::from_str(&std::fs::read_to_string(&cli.jobs_file)?)?;
    let merged = deep_merge(defaults_value, caller);
    std::fs::write(&cli.merged_out, serde_yaml::to_string(&merged)?)?;

    info!(
        runner = %cli.runner,
        config = %cli.merged_out.display(),
        "configuration merged, handing off to job runner"
    );

    let mut command = Command::new(&cli.runner);
    command.arg("-c").arg(&cli.merged_out);

    // Replace this process; exec only returns on failure.
    #[cfg(unix)]
    {
        use std::os::unix::process::CommandExt;
        return Err(command.exec().into());
    }

    #[cfg(not(unix))]
    {
        let status = command.status()?;
        std::process::exit(status.code().unwrap_or(1));
    }
}
