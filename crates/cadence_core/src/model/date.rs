//! Calendar dates as persisted by the contact store.
//!
//! # Invariants
//! - Valid dates render as `YYYY-MM-DD` with no time component.
//! - Unparseable input is kept verbatim and never silently replaced.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Wire and storage format for every date the core exchanges.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// A persisted date that may or may not parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StoredDate {
    Valid(NaiveDate),
    /// Raw text that is not a `YYYY-MM-DD` calendar date.
    Malformed(String),
}

impl StoredDate {
    /// Parses a persisted `YYYY-MM-DD` string.
    pub fn parse(value: &str) -> Self {
        match NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT) {
            Ok(date) => Self::Valid(date),
            Err(_) => Self::Malformed(value.to_string()),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::Valid(date) => Some(*date),
            Self::Malformed(_) => None,
        }
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed(_))
    }
}

impl From<NaiveDate> for StoredDate {
    fn from(value: NaiveDate) -> Self {
        Self::Valid(value)
    }
}

impl From<String> for StoredDate {
    fn from(value: String) -> Self {
        Self::parse(value.as_str())
    }
}

impl From<StoredDate> for String {
    fn from(value: StoredDate) -> Self {
        value.to_string()
    }
}

impl Display for StoredDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Valid(date) => write!(f, "{}", date.format(ISO_DATE_FORMAT)),
            Self::Malformed(raw) => f.write_str(raw),
        }
    }
}

/// Formats a calendar date the way the store expects it.
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}
