//! Backup timestamp parsing and staleness computation.
//!
//! The timestamp file holds a single hyphen-delimited `YYYY-M-D-H-M` value
//! with unpadded fields (e.g. `2026-8-6-3-5`).

use std::fmt;

use chrono::{NaiveDateTime, TimeDelta};

use crate::MonitorError;

const BACKUP_TS_FORMAT: &str = "%Y-%m-%d-%H-%M";

/// Outcome of a freshness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackupStatus {
    Ok,
    Fail,
}

impl fmt::Display for BackupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackupStatus::Ok => write!(f, "OK"),
            BackupStatus::Fail => write!(f, "FAIL"),
        }
    }
}

/// Parse the hyphen-delimited backup timestamp. Surrounding whitespace is
/// tolerated; anything else is an error.
pub fn parse_backup_timestamp(raw: &str) -> Result<NaiveDateTime, MonitorError> {
    let trimmed = raw.trim();
    NaiveDateTime::parse_from_str(trimmed, BACKUP_TS_FORMAT)
        .map_err(|_| MonitorError::Timestamp(trimmed.to_string()))
}

/// Elapsed whole days between the backup timestamp and "now".
pub fn elapsed_days(backup: NaiveDateTime, now: NaiveDateTime) -> i64 {
    now.signed_duration_since(backup)
        .max(TimeDelta::zero())
        .num_days()
}

/// `FAIL` when more than one whole day has elapsed, else `OK`.
pub fn status_for(elapsed: i64) -> BackupStatus {
    if elapsed > 1 {
        BackupStatus::Fail
    } else {
        BackupStatus::Ok
    }
}
