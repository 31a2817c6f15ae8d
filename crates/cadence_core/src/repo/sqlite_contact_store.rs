//! SQLite-backed contact store.
//!
//! # Invariants
//! - `list` returns contacts in insertion order.
//! - Dates are stored as the exact text they were given, so malformed
//!   values survive a round trip.
//! - A row with an unknown `status` is skipped by `list` (logged with
//!   `error_code=invalid_data`) and rejected as `InvalidData` by `get`.

use crate::model::cadence::Cadence;
use crate::model::contact::{Contact, ContactId, ContactStatus, NewContact};
use crate::model::date::StoredDate;
use crate::repo::contact_store::{ContactStore, StoreError, StoreResult};
use log::warn;
use rusqlite::{params, Connection, Row};

const CONTACT_SELECT_SQL: &str = "SELECT
    id,
    name,
    cadence,
    start_date,
    expiry_date,
    status
FROM contacts";

/// Contact store over a migrated SQLite connection.
pub struct SqliteContactStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactStore<'conn> {
    /// Wraps a connection returned by `db::open_db` or `db::open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContactStore for SqliteContactStore<'_> {
    fn list(&self) -> StoreResult<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY created_at ASC, rowid ASC"))?;
        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();

        while let Some(row) = rows.next()? {
            match parse_contact_row(row) {
                Ok(contact) => contacts.push(contact),
                Err(StoreError::InvalidData(message)) => warn!(
                    "event=contact_row_skipped module=repo status=warn error_code=invalid_data error={message}"
                ),
                Err(err) => return Err(err),
            }
        }

        Ok(contacts)
    }

    fn create(&self, contact: &NewContact) -> StoreResult<Contact> {
        let id = ContactId::generate();

        self.conn.execute(
            "INSERT INTO contacts (
                id,
                name,
                cadence,
                start_date,
                expiry_date,
                status
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                id.as_str(),
                contact.name.as_str(),
                contact.cadence.label(),
                contact.start_date.to_string(),
                contact.expiry_date.to_string(),
                contact.status.as_str(),
            ],
        )?;

        Ok(Contact::from_new(id, contact.clone()))
    }

    fn update(&self, id: &ContactId, contact: &Contact) -> StoreResult<Contact> {
        let changed = self.conn.execute(
            "UPDATE contacts
             SET
                name = ?1,
                cadence = ?2,
                start_date = ?3,
                expiry_date = ?4,
                status = ?5,
                updated_at = (CAST(strftime('%s', 'now') AS INTEGER) * 1000)
             WHERE id = ?6;",
            params![
                contact.name.as_str(),
                contact.cadence.label(),
                contact.start_date.to_string(),
                contact.expiry_date.to_string(),
                contact.status.as_str(),
                id.as_str(),
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }

        Ok(Contact {
            id: id.clone(),
            ..contact.clone()
        })
    }

    fn delete(&self, id: &ContactId) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", [id.as_str()])?;

        if changed == 0 {
            return Err(StoreError::NotFound(id.clone()));
        }

        Ok(())
    }

    fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.as_str()])?;
        match rows.next()? {
            Some(row) => Ok(Some(parse_contact_row(row)?)),
            None => Ok(None),
        }
    }
}

fn parse_contact_row(row: &Row<'_>) -> StoreResult<Contact> {
    let id: String = row.get("id")?;
    let status_text: String = row.get("status")?;
    let status = ContactStatus::parse(&status_text).ok_or_else(|| {
        StoreError::InvalidData(format!(
            "invalid status `{status_text}` in contacts.status for {id}"
        ))
    })?;

    Ok(Contact {
        id: ContactId::new(id),
        name: row.get("name")?,
        cadence: Cadence::from_label(&row.get::<_, String>("cadence")?),
        start_date: StoredDate::parse(&row.get::<_, String>("start_date")?),
        expiry_date: StoredDate::parse(&row.get::<_, String>("expiry_date")?),
        status,
    })
}
