mod common;

use chrono::NaiveDate;

use common::draft;
use timecard::validate::{validate, ErrorKind, Field};

#[test]
fn well_formed_draft_passes() {
    let d = draft("2024-01-05", "Acme", "Design work", "4");
    let errors = validate(&d, today());
    assert!(errors.is_empty());
}

#[test]
fn description_is_never_required() {
    let mut d = draft("2024-01-05", "Acme", "Design work", "4");
    d.description = String::new();
    assert!(validate(&d, today()).is_empty());
}

#[test]
fn empty_draft_collects_one_error_per_field() {
    let d = draft("", "", "", "");
    let errors = validate(&d, today());

    assert_eq!(errors.len(), 4);
    assert_eq!(errors[&Field::Date].kind, ErrorKind::MissingField);
    assert_eq!(errors[&Field::Project].kind, ErrorKind::MissingField);
    assert_eq!(errors[&Field::Task].kind, ErrorKind::MissingField);
    assert_eq!(errors[&Field::Hours].kind, ErrorKind::MissingField);
    assert_eq!(errors[&Field::Date].message, "Date is required");
    assert_eq!(errors[&Field::Project].message, "Project name is required");
    assert_eq!(errors[&Field::Task].message, "Task description is required");
    assert_eq!(errors[&Field::Hours].message, "Hours are required");
}

#[test]
fn whitespace_only_text_counts_as_missing() {
    let d = draft("2024-01-05", "   ", "\t", "4");
    let errors = validate(&d, today());

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[&Field::Project].kind, ErrorKind::MissingField);
    assert_eq!(errors[&Field::Task].kind, ErrorKind::MissingField);
}

#[test]
fn missing_project_is_the_only_error() {
    let d = draft("2024-01-05", "", "Design work", "4");
    let errors = validate(&d, today());

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[&Field::Project].message, "Project name is required");
}

#[test]
fn malformed_date_is_rejected() {
    for bad in ["01/05/2024", "Jan 5 2024", "2024-13-40", "2024-01"] {
        let d = draft(bad, "Acme", "Design work", "4");
        let errors = validate(&d, today());
        assert_eq!(errors.len(), 1, "date {:?} should fail", bad);
        assert_eq!(errors[&Field::Date].kind, ErrorKind::InvalidDate);
        assert_eq!(errors[&Field::Date].message, "Date must be in YYYY-MM-DD format");
    }
}

#[test]
fn future_date_is_rejected() {
    let d = draft("2024-01-11", "Acme", "Design work", "4");
    let errors = validate(&d, today());

    assert_eq!(errors[&Field::Date].kind, ErrorKind::OutOfRange);
    assert_eq!(errors[&Field::Date].message, "Date cannot be in the future");
}

#[test]
fn today_is_accepted() {
    let d = draft("2024-01-10", "Acme", "Design work", "4");
    assert!(validate(&d, today()).is_empty());
}

#[test]
fn hours_zero_or_negative_are_rejected() {
    for bad in ["0", "-1", "-0.5"] {
        let d = draft("2024-01-05", "Acme", "Design work", bad);
        let errors = validate(&d, today());
        assert_eq!(errors[&Field::Hours].kind, ErrorKind::OutOfRange, "hours {:?}", bad);
        assert_eq!(errors[&Field::Hours].message, "Hours must be a positive number");
    }
}

#[test]
fn hours_above_the_daily_cap_are_rejected() {
    let d = draft("2024-01-05", "Acme", "Design work", "24.5");
    let errors = validate(&d, today());

    assert_eq!(errors[&Field::Hours].kind, ErrorKind::OutOfRange);
    assert_eq!(errors[&Field::Hours].message, "Hours cannot exceed 24");
}

#[test]
fn hours_at_the_cap_and_fractions_pass() {
    for ok in ["24", "0.5", "1", "7.25"] {
        let d = draft("2024-01-05", "Acme", "Design work", ok);
        assert!(validate(&d, today()).is_empty(), "hours {:?} should pass", ok);
    }
}

#[test]
fn non_numeric_hours_are_rejected() {
    for bad in ["abc", "4h", "1,5"] {
        let d = draft("2024-01-05", "Acme", "Design work", bad);
        let errors = validate(&d, today());
        assert_eq!(errors[&Field::Hours].kind, ErrorKind::NotANumber, "hours {:?}", bad);
        assert_eq!(errors[&Field::Hours].message, "Hours must be a positive number");
    }
}

#[test]
fn nan_and_infinity_are_rejected_like_text() {
    // f64::from_str happily parses these; the validator must not
    for bad in ["NaN", "inf", "-inf"] {
        let d = draft("2024-01-05", "Acme", "Design work", bad);
        let errors = validate(&d, today());
        assert_eq!(errors[&Field::Hours].kind, ErrorKind::NotANumber, "hours {:?}", bad);
    }
}

#[test]
fn bad_date_does_not_mask_bad_hours() {
    let d = draft("not-a-date", "Acme", "Design work", "abc");
    let errors = validate(&d, today());

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[&Field::Date].kind, ErrorKind::InvalidDate);
    assert_eq!(errors[&Field::Hours].kind, ErrorKind::NotANumber);
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()
}
