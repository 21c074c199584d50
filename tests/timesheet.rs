mod common;

use common::{draft, temp_store, FixedClock};
use timecard::models::EntryDraft;
use timecard::timesheet::{Timesheet, TimesheetError};

#[test]
fn add_fills_id_and_creation_stamp_from_clock() {
    let (store, _dir) = temp_store();
    let clock = FixedClock::at("2024-01-10T09:00:00Z");
    let mut sheet = Timesheet::load(&store);

    let d = draft("2024-01-05", "Acme", "Design work", "4");
    let entry = sheet.add(&store, &clock, &d).unwrap();

    assert_eq!(entry.id, clock.0.timestamp_millis().to_string());
    assert_eq!(entry.created_at, "2024-01-10T09:00:00.000Z");
    assert_eq!(entry.date, "2024-01-05");
    assert_eq!(entry.project, "Acme");
    assert_eq!(entry.task, "Design work");
    assert_eq!(entry.hours, 4.0);
    assert_eq!(entry.description, "");
    assert_eq!(sheet.total_hours(), 4.0);
}

#[test]
fn add_trims_text_fields_but_not_description() {
    let (store, _dir) = temp_store();
    let clock = FixedClock::at("2024-01-10T09:00:00Z");
    let mut sheet = Timesheet::load(&store);

    let mut d = draft(" 2024-01-05 ", "  Acme ", " Design work ", " 4 ");
    d.description = "notes ".to_string();
    let entry = sheet.add(&store, &clock, &d).unwrap();

    assert_eq!(entry.date, "2024-01-05");
    assert_eq!(entry.project, "Acme");
    assert_eq!(entry.task, "Design work");
    assert_eq!(entry.hours, 4.0);
    assert_eq!(entry.description, "notes ");
}

#[test]
fn add_prepends_so_newest_is_first() {
    let (store, _dir) = temp_store();
    let mut sheet = Timesheet::load(&store);

    let first = FixedClock::at("2024-01-10T09:00:00Z");
    let second = FixedClock::at("2024-01-10T10:30:00Z");
    sheet
        .add(&store, &first, &draft("2024-01-09", "Acme", "Design", "2"))
        .unwrap();
    sheet
        .add(&store, &second, &draft("2024-01-10", "Acme", "Review", "1"))
        .unwrap();

    assert_eq!(sheet.len(), 2);
    assert_eq!(sheet.entries()[0].task, "Review");
    assert_eq!(sheet.entries()[1].task, "Design");
}

#[test]
fn same_instant_adds_get_distinct_ids() {
    let (store, _dir) = temp_store();
    let clock = FixedClock::at("2024-01-10T09:00:00Z");
    let mut sheet = Timesheet::load(&store);

    let a = sheet
        .add(&store, &clock, &draft("2024-01-10", "Acme", "Design", "2"))
        .unwrap();
    let b = sheet
        .add(&store, &clock, &draft("2024-01-10", "Acme", "Review", "1"))
        .unwrap();

    assert_ne!(a.id, b.id);
    assert_eq!(b.id, format!("{}-1", a.id));
}

#[test]
fn total_hours_sums_all_entries() {
    let (store, _dir) = temp_store();
    let clock = FixedClock::at("2024-01-10T09:00:00Z");
    let mut sheet = Timesheet::load(&store);
    assert_eq!(sheet.total_hours(), 0.0);

    for hours in ["2", "3.5", "1"] {
        sheet
            .add(&store, &clock, &draft("2024-01-10", "Acme", "Work", hours))
            .unwrap();
    }

    assert_eq!(sheet.total_hours(), 6.5);
}

#[test]
fn update_replaces_fields_but_keeps_identity_and_position() {
    let (store, _dir) = temp_store();
    let mut sheet = Timesheet::load(&store);
    sheet
        .add(
            &store,
            &FixedClock::at("2024-01-10T09:00:00Z"),
            &draft("2024-01-09", "Acme", "Design", "2"),
        )
        .unwrap();
    let target = sheet
        .add(
            &store,
            &FixedClock::at("2024-01-10T10:00:00Z"),
            &draft("2024-01-10", "Acme", "Review", "1"),
        )
        .unwrap();

    let mut d = EntryDraft::from(&target);
    d.project = "Initech".to_string();
    d.hours = "3.5".to_string();
    let updated = sheet.update(&store, &target.id, &d).unwrap();

    assert_eq!(updated.id, target.id);
    assert_eq!(updated.created_at, target.created_at);
    assert_eq!(updated.project, "Initech");
    assert_eq!(updated.hours, 3.5);
    // Position is stable: the edited entry is still first
    assert_eq!(sheet.entries()[0].id, target.id);
    assert_eq!(sheet.entries()[1].task, "Design");
}

#[test]
fn update_of_hours_alone_touches_nothing_else() {
    let (store, _dir) = temp_store();
    let clock = FixedClock::at("2024-01-10T09:00:00Z");
    let mut sheet = Timesheet::load(&store);
    let mut d = draft("2024-01-09", "Acme", "Design", "2");
    d.description = "sketches".to_string();
    let entry = sheet.add(&store, &clock, &d).unwrap();

    let mut change = EntryDraft::from(&entry);
    change.hours = "5".to_string();
    let updated = sheet.update(&store, &entry.id, &change).unwrap();

    assert_eq!(updated.hours, 5.0);
    assert_eq!(updated.id, entry.id);
    assert_eq!(updated.created_at, entry.created_at);
    assert_eq!(updated.date, entry.date);
    assert_eq!(updated.project, entry.project);
    assert_eq!(updated.task, entry.task);
    assert_eq!(updated.description, entry.description);
}

#[test]
fn update_unknown_id_fails_and_leaves_entries_alone() {
    let (store, _dir) = temp_store();
    let clock = FixedClock::at("2024-01-10T09:00:00Z");
    let mut sheet = Timesheet::load(&store);
    sheet
        .add(&store, &clock, &draft("2024-01-10", "Acme", "Design", "2"))
        .unwrap();
    let before = sheet.entries().to_vec();

    let err = sheet
        .update(&store, "missing", &draft("2024-01-10", "X", "Y", "1"))
        .unwrap_err();

    assert!(matches!(err, TimesheetError::NotFound(_)));
    assert_eq!(err.to_string(), "No entry found with id: missing");
    assert_eq!(sheet.entries(), before.as_slice());
}

#[test]
fn add_rejects_unparseable_hours_without_inserting() {
    let (store, _dir) = temp_store();
    let clock = FixedClock::at("2024-01-10T09:00:00Z");
    let mut sheet = Timesheet::load(&store);

    let err = sheet
        .add(&store, &clock, &draft("2024-01-10", "Acme", "Design", "abc"))
        .unwrap_err();

    assert!(matches!(err, TimesheetError::InvalidHours(_)));
    assert!(sheet.is_empty());
    assert!(store.load_entries().is_empty());
}

#[test]
fn delete_removes_the_entry_and_persists() {
    let (store, _dir) = temp_store();
    let clock = FixedClock::at("2024-01-10T09:00:00Z");
    let mut sheet = Timesheet::load(&store);
    let entry = sheet
        .add(&store, &clock, &draft("2024-01-10", "Acme", "Design", "2"))
        .unwrap();

    sheet.delete(&store, &entry.id).unwrap();

    assert!(sheet.is_empty());
    assert!(store.load_entries().is_empty());
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let (store, _dir) = temp_store();
    let clock = FixedClock::at("2024-01-10T09:00:00Z");
    let mut sheet = Timesheet::load(&store);
    sheet
        .add(&store, &clock, &draft("2024-01-10", "Acme", "Design", "2"))
        .unwrap();

    sheet.delete(&store, "missing").unwrap();

    assert_eq!(sheet.len(), 1);
}

#[test]
fn reload_sees_the_persisted_collection() {
    let (store, _dir) = temp_store();
    let mut sheet = Timesheet::load(&store);
    let kept = sheet
        .add(
            &store,
            &FixedClock::at("2024-01-10T09:00:00Z"),
            &draft("2024-01-09", "Acme", "Design", "2"),
        )
        .unwrap();
    let dropped = sheet
        .add(
            &store,
            &FixedClock::at("2024-01-10T10:00:00Z"),
            &draft("2024-01-10", "Acme", "Review", "1"),
        )
        .unwrap();

    let mut d = EntryDraft::from(&kept);
    d.task = "Design review".to_string();
    sheet.update(&store, &kept.id, &d).unwrap();
    sheet.delete(&store, &dropped.id).unwrap();

    let reloaded = Timesheet::load(&store);
    assert_eq!(reloaded.entries(), sheet.entries());
    assert_eq!(reloaded.entries()[0].task, "Design review");
}
