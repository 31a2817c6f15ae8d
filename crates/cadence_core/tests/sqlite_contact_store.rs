use cadence_core::db::open_db_in_memory;
use cadence_core::{
    Cadence, ContactId, ContactStatus, ContactStore, NewContact, SqliteContactStore, StoreError,
    StoredDate,
};
use chrono::NaiveDate;

fn day(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").unwrap()
}

#[test]
fn create_assigns_id_and_round_trips() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);

    let created = store
        .create(&NewContact::new("Contact 1", Cadence::Weekly, day("2024-01-01")))
        .unwrap();
    assert!(!created.id.as_str().is_empty());

    let loaded = store.get(&created.id).unwrap().unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.expiry_date, StoredDate::Valid(day("2024-01-09")));
    assert_eq!(loaded.status, ContactStatus::Active);
}

#[test]
fn created_ids_are_unique() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);
    let draft = NewContact::new("Same", Cadence::Daily, day("2024-01-01"));

    let first = store.create(&draft).unwrap();
    let second = store.create(&draft).unwrap();

    assert_ne!(first.id, second.id);
}

#[test]
fn list_returns_insertion_order() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);

    let names = ["Contact 1", "Contact 2", "Contact 3"];
    for name in names {
        store
            .create(&NewContact::new(name, Cadence::Monthly, day("2024-01-01")))
            .unwrap();
    }

    let listed = store
        .list()
        .unwrap()
        .into_iter()
        .map(|contact| contact.name)
        .collect::<Vec<_>>();
    assert_eq!(listed, names);
}

#[test]
fn update_replaces_record_and_reports_missing_target() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);
    let mut contact = store
        .create(&NewContact::new("Contact 1", Cadence::Daily, day("2024-01-01")))
        .unwrap();

    contact.status = ContactStatus::Expired;
    contact.reschedule(Cadence::Monthly, day("2024-02-01"));
    let saved = store.update(&contact.id, &contact).unwrap();
    assert_eq!(saved, contact);
    assert_eq!(store.get(&contact.id).unwrap().unwrap(), contact);

    let missing = ContactId::new("missing");
    let err = store.update(&missing, &contact).unwrap_err();
    assert_eq!(err, StoreError::NotFound(missing));
}

#[test]
fn delete_removes_row_and_reports_missing_target() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);
    let contact = store
        .create(&NewContact::new("Contact 1", Cadence::Daily, day("2024-01-01")))
        .unwrap();

    store.delete(&contact.id).unwrap();
    assert!(store.get(&contact.id).unwrap().is_none());
    assert!(store.list().unwrap().is_empty());

    let err = store.delete(&contact.id).unwrap_err();
    assert_eq!(err, StoreError::NotFound(contact.id));
}

#[test]
fn malformed_dates_and_unknown_cadence_survive_storage() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO contacts (id, name, cadence, start_date, expiry_date, status)
         VALUES ('legacy', 'Legacy', 'Fortnightly', '01/02/2024', '2024-13-40', 'active');",
        [],
    )
    .unwrap();
    let store = SqliteContactStore::new(&conn);

    let contact = store.get(&ContactId::new("legacy")).unwrap().unwrap();

    assert_eq!(contact.cadence, Cadence::Unrecognized("Fortnightly".to_string()));
    assert_eq!(contact.start_date, StoredDate::Malformed("01/02/2024".to_string()));
    assert_eq!(contact.expiry_date, StoredDate::Malformed("2024-13-40".to_string()));
}

#[test]
fn unknown_status_row_is_skipped_by_list_and_rejected_by_get() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteContactStore::new(&conn);
    let first = store
        .create(&NewContact::new("First", Cadence::Daily, day("2024-01-01")))
        .unwrap();
    conn.execute(
        "INSERT INTO contacts (id, name, cadence, start_date, expiry_date, status)
         VALUES ('bad', 'Bad', 'Daily', '2024-01-01', '2024-01-03', 'archived');",
        [],
    )
    .unwrap();
    let last = store
        .create(&NewContact::new("Last", Cadence::Weekly, day("2024-01-01")))
        .unwrap();

    let listed = store.list().unwrap();
    assert_eq!(listed, vec![first, last]);

    let err = store.get(&ContactId::new("bad")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidData(message) if message.contains("archived")));
}

#[test]
fn broken_schema_surfaces_as_unavailable() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE contacts;").unwrap();
    let store = SqliteContactStore::new(&conn);

    assert!(matches!(store.list(), Err(StoreError::Unavailable(_))));
}
