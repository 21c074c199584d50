#![allow(dead_code)]

use chrono::{DateTime, Utc};
use tempfile::TempDir;

use timecard::clock::Clock;
use timecard::models::EntryDraft;
use timecard::store::Store;

/// Clock pinned to a known instant so ids and creation stamps come out
/// predictable.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(iso: &str) -> Self {
        Self(iso.parse().unwrap())
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn draft(date: &str, project: &str, task: &str, hours: &str) -> EntryDraft {
    EntryDraft::new(
        date.to_string(),
        project.to_string(),
        task.to_string(),
        hours.to_string(),
    )
}

/// Store backed by a fresh temp directory. Keep the TempDir alive for the
/// duration of the test; dropping it deletes the database file.
pub fn temp_store() -> (Store, TempDir) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("timecard.db");
    let store = Store::new(path.to_str().unwrap()).unwrap();
    (store, dir)
}
