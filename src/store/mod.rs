//! Daily flat-file persistence of record snapshots.

mod daily_csv;
mod fs_utils;

pub use fs_utils::daily_file_name;

use crate::errors::AppResult;
use crate::models::Snapshot;
use chrono::NaiveDate;
use std::path::PathBuf;

pub const DEFAULT_PREFIX: &str = "abq_data_record";

/// Result of one append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub path: PathBuf,
    /// The file did not exist before this save and got a header row.
    pub created: bool,
}

/// Appends snapshots to one CSV file per calendar day inside `dir`.
#[derive(Debug, Clone)]
pub struct RecordStore {
    dir: PathBuf,
    prefix: String,
}

impl RecordStore {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
        }
    }

    pub fn file_for(&self, day: NaiveDate) -> PathBuf {
        self.dir.join(daily_file_name(&self.prefix, day))
    }

    /// Append `snapshot` to the file for `day`, writing the header first when
    /// the file is new.
    pub fn append(&self, snapshot: &Snapshot, day: NaiveDate) -> AppResult<SaveOutcome> {
        let path = self.file_for(day);
        let created = daily_csv::append_row(&path, snapshot)?;
        Ok(SaveOutcome { path, created })
    }
}
