use serde::{Deserialize, Serialize};

/// A single recorded unit of work.
///
/// Serialized field names match the persisted JSON layout exactly; only the
/// creation timestamp is camelCase there.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimesheetEntry {
    pub id: String,
    pub date: String, // ISO 8601: YYYY-MM-DD
    pub project: String,
    pub task: String,
    pub hours: f64,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: String, // ISO 8601 timestamp, set once at creation
}

/// Candidate entry fields as the user typed them.
///
/// `hours` stays raw text until validation has accepted it; `Timesheet::add`
/// and `Timesheet::update` do the numeric coercion.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub date: String,
    pub project: String,
    pub task: String,
    pub hours: String,
    pub description: String,
}

impl EntryDraft {
    pub fn new(date: String, project: String, task: String, hours: String) -> Self {
        Self {
            date,
            project,
            task,
            hours,
            description: String::new(),
        }
    }
}

impl From<&TimesheetEntry> for EntryDraft {
    fn from(entry: &TimesheetEntry) -> Self {
        Self {
            date: entry.date.clone(),
            project: entry.project.clone(),
            task: entry.task.clone(),
            hours: crate::utils::format_hours(entry.hours),
            description: entry.description.clone(),
        }
    }
}

/// Display theme. Persisted in the entry store as a single token,
/// independent of entry data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Unrecognized tokens fall back to the default rather than erroring,
    /// so a hand-edited or stale value never blocks startup.
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}
