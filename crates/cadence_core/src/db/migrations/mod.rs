//! Ordered schema migrations for the contact store.
//!
//! # Invariants
//! - `version` values strictly increase.
//! - All pending migrations apply in one transaction or not at all.
//! - After migrating, the `contacts` table must exist.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

#[derive(Debug, Clone, Copy)]
struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    sql: include_str!("0001_contacts.sql"),
}];

/// Latest schema version this binary can write.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |migration| migration.version)
}

/// Brings `conn` to [`latest_version`] and checks the contacts table.
///
/// # Errors
/// - [`DbError::SchemaTooNew`] when the file is ahead of this binary.
/// - [`DbError::Migration`] naming the first migration that failed.
/// - [`DbError::MissingContactsTable`] when the version is current but the
///   table is absent.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let found = current_user_version(conn)?;
    let supported = latest_version();

    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    if found < supported {
        let tx = conn.transaction()?;
        for migration in MIGRATIONS.iter().filter(|migration| migration.version > found) {
            tx.execute_batch(migration.sql)
                .and_then(|()| tx.pragma_update(None, "user_version", migration.version))
                .map_err(|source| DbError::Migration {
                    version: migration.version,
                    source,
                })?;
        }
        tx.commit().map_err(|source| DbError::Migration {
            version: supported,
            source,
        })?;
    }

    if !contacts_table_exists(conn)? {
        return Err(DbError::MissingContactsTable { version: supported });
    }
    Ok(())
}

fn current_user_version(conn: &Connection) -> DbResult<u32> {
    let version = conn.query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))?;
    Ok(version)
}

fn contacts_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = 'contacts');",
        [],
        |row| row.get::<_, bool>(0),
    )?;
    Ok(exists)
}
