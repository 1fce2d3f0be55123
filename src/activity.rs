// gradbingo/src/activity.rs
// Persisted log of saved goal selections. One CSV file with the columns
// "Name" and "Selected Goals"; rows stay in append order. Every save reads
// the whole file back and rewrites it, with no locking, so at most one
// writer at a time is assumed. Concurrent writers can lose records.

use crate::defs::Goal;

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("activity log is malformed: {0}")]
    Malformed(#[from] csv::Error),
}

/// One saved row. `selected_goals` is the comma-space-joined goal list,
/// matching the on-disk column value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Selected Goals")]
    pub selected_goals: String,
}

impl UserRecord {
    pub fn new(name: &str, goals: &[Goal]) -> Self {
        UserRecord {
            name: name.to_string(),
            selected_goals: goals.join(", "),
        }
    }
}

pub struct ActivityLog {
    path: PathBuf,
}

impl ActivityLog {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        ActivityLog {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read all records in stored order. A missing file is an empty log,
    /// not an error; a present but unreadable or malformed file is.
    pub fn load_records(&self) -> Result<Vec<UserRecord>, ActivityError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = csv::Reader::from_path(&self.path)?;
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    /// Append one record. Existing rows are preserved unchanged and in
    /// order; the file is created on first use.
    pub fn save_record(&self, name: &str, goals: &[Goal]) -> Result<(), ActivityError> {
        let mut records = self.load_records()?;
        records.push(UserRecord::new(name, goals));
        self.write_records(&records)
    }

    fn write_records(&self, records: &[UserRecord]) -> Result<(), ActivityError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(&self.path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // These tests exercise the single-writer contract only. The log has no
    // locking around its read-rewrite cycle, so concurrent writers are a
    // known limitation, not covered behavior.

    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_first_save_creates_the_log() {
        let dir = tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("user_activities.csv"));

        log.save_record(
            "Alice",
            &["Quit job dramatically".to_string(), "Go vegan".to_string()],
        )
        .unwrap();

        let records = log.load_records().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].selected_goals, "Quit job dramatically, Go vegan");
    }

    #[test]
    fn test_second_save_appends_after_the_first() {
        let dir = tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("user_activities.csv"));

        log.save_record(
            "Alice",
            &["Quit job dramatically".to_string(), "Go vegan".to_string()],
        )
        .unwrap();
        log.save_record("Bob", &["Move abroad".to_string()]).unwrap();

        let records = log.load_records().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Alice");
        assert_eq!(records[0].selected_goals, "Quit job dramatically, Go vegan");
        assert_eq!(records[1].name, "Bob");
        assert_eq!(records[1].selected_goals, "Move abroad");
    }

    #[test]
    fn test_missing_log_reads_empty() {
        let dir = tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("nothing_here.csv"));
        assert!(log.load_records().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_log_is_an_error_not_recreated() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("user_activities.csv");
        fs::write(&path, "this is not,a bingo log\njust,some,stray,cells\n").unwrap();

        let log = ActivityLog::new(&path);
        assert!(matches!(
            log.load_records(),
            Err(ActivityError::Malformed(_))
        ));
        assert!(log.save_record("Alice", &["Go vegan".to_string()]).is_err());

        // The corrupt file must survive the failed save untouched.
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("this is not,a bingo log"));
    }

    #[test]
    fn test_goals_with_commas_round_trip() {
        let dir = tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("user_activities.csv"));

        let goals = vec!["Join cult (briefly)".to_string(), "Need therapy".to_string()];
        log.save_record("Cleo", &goals).unwrap();

        // The joined value itself contains ", ", which the CSV layer must
        // quote and restore intact.
        let records = log.load_records().unwrap();
        assert_eq!(records[0].selected_goals, "Join cult (briefly), Need therapy");
    }

    #[test]
    fn test_empty_name_and_no_goals_are_allowed() {
        let dir = tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("user_activities.csv"));

        log.save_record("", &[]).unwrap();
        let records = log.load_records().unwrap();
        assert_eq!(records[0], UserRecord::new("", &[]));
    }

    #[test]
    fn test_log_in_missing_directory_is_created() {
        let dir = tempdir().unwrap();
        let log = ActivityLog::new(dir.path().join("data").join("log.csv"));
        log.save_record("Dana", &["Back to school".to_string()]).unwrap();
        assert_eq!(log.load_records().unwrap().len(), 1);
    }
}
