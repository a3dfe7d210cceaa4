//! Append-only check log shared by the alert and digest scripts.
//!
//! One tab-separated line per check: checked timestamp, check time, status.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::timestamp::BackupStatus;
use crate::MonitorError;

const CHECK_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct CheckLog {
    path: PathBuf,
}

impl CheckLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one check line, creating the file on first use.
    pub fn append(
        &self,
        checked: NaiveDateTime,
        checked_at: NaiveDateTime,
        status: BackupStatus,
    ) -> Result<(), MonitorError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "{}\t{}\t{}",
            checked.format(CHECK_TIME_FORMAT),
            checked_at.format(CHECK_TIME_FORMAT),
            status
        )?;
        Ok(())
    }

    /// Read the entire log. A missing file is an error; an empty file is an
    /// empty string.
    pub fn read_all(&self) -> Result<String, MonitorError> {
        Ok(std::fs::read_to_string(&self.path)?)
    }

    /// Truncate the log to empty.
    pub fn truncate(&self) -> Result<(), MonitorError> {
        std::fs::write(&self.path, "")?;
        Ok(())
    }
}
