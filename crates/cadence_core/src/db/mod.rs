//! SQLite bootstrap for the local contact store.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Bring the `contacts` schema up to date before any read or write.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A database written by a newer binary is refused, never downgraded.
//! - A connection is only handed out once the `contacts` table exists.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Failure to produce a ready contact database.
#[derive(Debug)]
pub enum DbError {
    /// The file could not be opened or configured.
    Open(rusqlite::Error),
    /// Migration `version` failed; the whole upgrade was rolled back.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// The file was written by a newer binary.
    SchemaTooNew { found: u32, supported: u32 },
    /// `user_version` claims a migrated schema but there is no `contacts`
    /// table, so the file belongs to something else.
    MissingContactsTable { version: u32 },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open(err) => write!(f, "cannot open contact database: {err}"),
            Self::Migration { version, source } => {
                write!(f, "contact schema migration {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "contact database schema version {found} is newer than supported {supported}"
            ),
            Self::MissingContactsTable { version } => write!(
                f,
                "database reports schema version {version} but has no contacts table"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open(err) | Self::Migration { source: err, .. } => Some(err),
            Self::SchemaTooNew { .. } | Self::MissingContactsTable { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Open(value)
    }
}
