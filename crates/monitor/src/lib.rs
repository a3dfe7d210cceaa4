//! Backup monitoring: a freshness-check alert and a periodic log digest,
//! each shipped as a one-shot binary.

pub mod alert;
pub mod checklog;
pub mod cli;
pub mod digest;
pub mod timestamp;

pub use alert::{run_alert, AlertContext};
pub use checklog::CheckLog;
pub use digest::{run_digest, DigestContext};
pub use timestamp::{elapsed_days, parse_backup_timestamp, status_for, BackupStatus};

/// Errors surfaced by the monitor scripts. Any of these terminates the run
/// with a non-zero exit; there is no retry.
#[derive(Debug, thiserror::Error)]
pub enum MonitorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid backup timestamp '{0}': expected YYYY-M-D-H-M")]
    Timestamp(String),

    #[error(transparent)]
    Mail(#[from] modelops_notify::MailError),
}
