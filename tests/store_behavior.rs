// File: tests/store_behavior.rs
use chrono::NaiveDate;
use orthotrack::model::ProcedureRecord;
use orthotrack::store::{DEFAULT_STAFF, RecordStore, StaffError, StaffRoster};
use std::collections::HashSet;

fn record(date: &str, region: &str) -> ProcedureRecord {
    let mut r = ProcedureRecord::new(NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap());
    r.region = region.to_string();
    r
}

#[test]
fn test_new_store_has_default_roster_and_no_records() {
    let store = RecordStore::new();
    assert!(store.is_empty());
    assert_eq!(store.list_staff().len(), DEFAULT_STAFF.len());
    assert_eq!(store.list_staff()[0], "JOSEPHINE");
    assert_eq!(store.list_staff()[13], "KENYORU");
}

#[test]
fn test_append_preserves_insertion_order_and_duplicates() {
    let mut store = RecordStore::new();
    store.append(record("2024-03-01", "Meru"));
    store.append(record("2024-01-01", "Eldoret"));
    store.append(record("2024-03-01", "Meru"));

    let regions: Vec<&str> = store.list_records().iter().map(|r| r.region.as_str()).collect();
    assert_eq!(regions, vec!["Meru", "Eldoret", "Meru"]);
}

#[test]
fn test_replace_all_discards_previous_records() {
    let mut store = RecordStore::new();
    store.append(record("2024-03-01", "Meru"));
    store.replace_all(vec![record("2023-05-05", "Kisii"), record("2023-06-06", "Kisii")]);

    assert_eq!(store.len(), 2);
    assert!(store.list_records().iter().all(|r| r.region == "Kisii"));
}

#[test]
fn test_add_staff_trims_and_appends() {
    let mut store = RecordStore::new();
    let added = store.add_staff("  WANJIKU ").unwrap();
    assert_eq!(added, "WANJIKU");
    assert_eq!(store.list_staff().last().unwrap(), "WANJIKU");
}

#[test]
fn test_add_staff_rejects_empty_names() {
    let mut store = RecordStore::new();
    let before = store.list_staff().to_vec();

    assert_eq!(store.add_staff(""), Err(StaffError::Empty));
    assert_eq!(store.add_staff("   "), Err(StaffError::Empty));
    assert_eq!(store.list_staff(), before.as_slice());
}

#[test]
fn test_add_staff_rejects_duplicates_after_trim() {
    let mut store = RecordStore::new();
    let before = store.list_staff().to_vec();

    assert_eq!(
        store.add_staff(" KEVIN  "),
        Err(StaffError::Duplicate("KEVIN".to_string()))
    );
    assert_eq!(store.list_staff(), before.as_slice());
}

#[test]
fn test_staff_names_are_case_sensitive() {
    let mut store = RecordStore::new();
    assert!(store.add_staff("Kevin").is_ok());
    assert!(store.list_staff().contains(&"KEVIN".to_string()));
    assert!(store.list_staff().contains(&"Kevin".to_string()));
}

#[test]
fn test_roster_never_holds_duplicates() {
    let mut roster = StaffRoster::new();
    let attempts = [
        "A", "B", " A", "A ", "b", "", "C", "  ", "B", "c", " C ", "a",
    ];
    for name in attempts {
        let _ = roster.add(name);
    }

    let unique: HashSet<&String> = roster.names().iter().collect();
    assert_eq!(unique.len(), roster.len());
    assert_eq!(roster.names(), &["A", "B", "b", "C", "c", "a"]);
}

#[test]
fn test_roster_from_names_skips_invalid_entries() {
    let roster = StaffRoster::from_names(["X", " ", "X", "Y "]);
    assert_eq!(roster.names(), &["X", "Y"]);
}
