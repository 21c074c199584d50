use thiserror::Error;

use crate::clock::Clock;
use crate::models::{EntryDraft, TimesheetEntry};
use crate::store::{Store, StoreError};

#[derive(Debug, Error)]
pub enum TimesheetError {
    #[error("No entry found with id: {0}")]
    NotFound(String),
    #[error("Hours value is not numeric: {0}")]
    InvalidHours(String),
    #[error("Store error: {0}")]
    StoreError(#[from] StoreError),
}

/// The authoritative in-memory entry collection, newest first.
///
/// Mutating operations take the store as an argument and write the full
/// collection back before returning, so persistence is a visible
/// post-condition of each call rather than a background effect. Drafts are
/// expected to have passed [`crate::validate::validate`] already; the
/// operations here do not re-validate.
pub struct Timesheet {
    entries: Vec<TimesheetEntry>,
}

impl Timesheet {
    /// Build the collection from persisted state. A missing or unreadable
    /// payload yields an empty collection (see [`Store::load_entries`]).
    pub fn load(store: &Store) -> Self {
        Self {
            entries: store.load_entries(),
        }
    }

    /// Read-only view of the current ordering
    pub fn entries(&self) -> &[TimesheetEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of hours across all entries; 0 when empty
    pub fn total_hours(&self) -> f64 {
        self.entries.iter().map(|e| e.hours).sum()
    }

    /// Create an entry from a validated draft and prepend it, so the newest
    /// entry is always first. The id and creation stamp come from the clock.
    pub fn add(
        &mut self,
        store: &Store,
        clock: &dyn Clock,
        draft: &EntryDraft,
    ) -> Result<TimesheetEntry, TimesheetError> {
        let hours = parse_draft_hours(&draft.hours)?;
        let entry = TimesheetEntry {
            id: self.next_id(clock),
            date: draft.date.trim().to_string(),
            project: draft.project.trim().to_string(),
            task: draft.task.trim().to_string(),
            hours,
            description: draft.description.clone(),
            created_at: clock.iso_now(),
        };

        self.entries.insert(0, entry.clone());
        store.save_entries(&self.entries)?;
        Ok(entry)
    }

    /// Replace the draft fields on the entry with the given id, keeping its
    /// id, creation stamp and position. Fails with `NotFound` for stale ids,
    /// leaving the collection untouched.
    pub fn update(
        &mut self,
        store: &Store,
        id: &str,
        draft: &EntryDraft,
    ) -> Result<TimesheetEntry, TimesheetError> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| TimesheetError::NotFound(id.to_string()))?;
        let hours = parse_draft_hours(&draft.hours)?;

        let entry = &mut self.entries[position];
        entry.date = draft.date.trim().to_string();
        entry.project = draft.project.trim().to_string();
        entry.task = draft.task.trim().to_string();
        entry.hours = hours;
        entry.description = draft.description.clone();
        let updated = entry.clone();

        store.save_entries(&self.entries)?;
        Ok(updated)
    }

    /// Remove the entry with the given id. An unknown id is a no-op, not an
    /// error; the collection is persisted either way.
    pub fn delete(&mut self, store: &Store, id: &str) -> Result<(), TimesheetError> {
        self.entries.retain(|e| e.id != id);
        store.save_entries(&self.entries)?;
        Ok(())
    }

    /// Ids are the creation timestamp in milliseconds; a counter suffix
    /// keeps same-millisecond adds distinct.
    fn next_id(&self, clock: &dyn Clock) -> String {
        let base = clock.timestamp_millis().to_string();
        if !self.contains_id(&base) {
            return base;
        }
        let mut n = 1;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.contains_id(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    fn contains_id(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }
}

/// Coerce already-validated draft hours to numeric. A parse failure here
/// means the caller skipped validation, which is a contract breach worth
/// surfacing rather than storing a default.
fn parse_draft_hours(hours: &str) -> Result<f64, TimesheetError> {
    hours
        .trim()
        .parse()
        .map_err(|_| TimesheetError::InvalidHours(hours.to_string()))
}
