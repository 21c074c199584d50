use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::models::EntryDraft;
use crate::utils::parse_date;

/// Upper bound for a single entry's hours
pub const MAX_HOURS: f64 = 24.0;

/// Entry fields a validation error can attach to.
/// Description is free text and never fails, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Date,
    Project,
    Task,
    Hours,
}

/// The rule category a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MissingField,
    InvalidDate,
    NotANumber,
    OutOfRange,
}

/// A rejected field: the rule that failed plus the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub kind: ErrorKind,
    pub message: &'static str,
}

impl FieldError {
    fn new(kind: ErrorKind, message: &'static str) -> Self {
        Self { kind, message }
    }
}

/// One error per failing field; empty means the draft is acceptable.
pub type ValidationErrors = BTreeMap<Field, FieldError>;

/// Check a draft against the entry rules, collecting one error per failing
/// field. Fields are judged independently; a bad date never masks bad hours.
///
/// `today` is passed in (rather than read from the wall clock) so the
/// function stays pure: the future-date rule compares against whatever the
/// caller considers the current date.
pub fn validate(draft: &EntryDraft, today: NaiveDate) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if let Some(error) = check_date(&draft.date, today) {
        errors.insert(Field::Date, error);
    }
    if draft.project.trim().is_empty() {
        errors.insert(
            Field::Project,
            FieldError::new(ErrorKind::MissingField, "Project name is required"),
        );
    }
    if draft.task.trim().is_empty() {
        errors.insert(
            Field::Task,
            FieldError::new(ErrorKind::MissingField, "Task description is required"),
        );
    }
    if let Some(error) = check_hours(&draft.hours) {
        errors.insert(Field::Hours, error);
    }

    errors
}

fn check_date(date: &str, today: NaiveDate) -> Option<FieldError> {
    let date = date.trim();
    if date.is_empty() {
        return Some(FieldError::new(ErrorKind::MissingField, "Date is required"));
    }
    match parse_date(date) {
        Err(_) => Some(FieldError::new(
            ErrorKind::InvalidDate,
            "Date must be in YYYY-MM-DD format",
        )),
        Ok(parsed) if parsed > today => Some(FieldError::new(
            ErrorKind::OutOfRange,
            "Date cannot be in the future",
        )),
        Ok(_) => None,
    }
}

/// At most one hours error, in priority order: missing, then unparseable,
/// then out of range.
fn check_hours(hours: &str) -> Option<FieldError> {
    let hours = hours.trim();
    if hours.is_empty() {
        return Some(FieldError::new(ErrorKind::MissingField, "Hours are required"));
    }
    let parsed: f64 = match hours.parse() {
        Ok(value) => value,
        Err(_) => {
            return Some(FieldError::new(
                ErrorKind::NotANumber,
                "Hours must be a positive number",
            ));
        }
    };
    // f64 parsing accepts "NaN" and "inf"; neither is a usable hours value
    if !parsed.is_finite() {
        return Some(FieldError::new(
            ErrorKind::NotANumber,
            "Hours must be a positive number",
        ));
    }
    if parsed <= 0.0 {
        return Some(FieldError::new(
            ErrorKind::OutOfRange,
            "Hours must be a positive number",
        ));
    }
    if parsed > MAX_HOURS {
        return Some(FieldError::new(
            ErrorKind::OutOfRange,
            "Hours cannot exceed 24",
        ));
    }
    None
}
