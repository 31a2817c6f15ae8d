//! Contact domain model.
//!
//! # Responsibility
//! - Define the saved `Contact` record and its unsaved `NewContact` shape.
//! - Define the status set driven by the lifecycle state machine.
//!
//! # Invariants
//! - `id` is assigned by the store and never changes afterwards.
//! - `expiry_date` mirrors `compute_expiry(start_date, cadence)`.
//! - Serialized field names match the remote contact store
//!   (`_id`, `type`, `startDate`, `expiryDate`).

use crate::lifecycle::expiry::compute_expiry;
use crate::model::cadence::Cadence;
use crate::model::date::StoredDate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Opaque store-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random id for stores that assign their own.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ContactId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

/// Lifecycle state of a contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    /// Within its cadence window.
    Active,
    /// Past its expiry date and not yet disposed.
    Overdue,
    /// Disposed by the user. Only `undo` leaves this state.
    Expired,
}

impl ContactStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Overdue => "overdue",
            Self::Expired => "expired",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "active" => Some(Self::Active),
            "overdue" => Some(Self::Overdue),
            "expired" => Some(Self::Expired),
            _ => None,
        }
    }
}

impl Display for ContactStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A contact that has been saved at least once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(rename = "_id")]
    pub id: ContactId,
    pub name: String,
    #[serde(rename = "type")]
    pub cadence: Cadence,
    pub start_date: StoredDate,
    pub expiry_date: StoredDate,
    pub status: ContactStatus,
}

impl Contact {
    /// Attaches a store-assigned id to an unsaved record.
    pub fn from_new(id: ContactId, contact: NewContact) -> Self {
        Self {
            id,
            name: contact.name,
            cadence: contact.cadence,
            start_date: contact.start_date,
            expiry_date: contact.expiry_date,
            status: contact.status,
        }
    }

    /// Replaces cadence and start date, recomputing the expiry date.
    pub fn reschedule(&mut self, cadence: Cadence, start_date: NaiveDate) {
        self.expiry_date = StoredDate::Valid(compute_expiry(start_date, &cadence));
        self.start_date = StoredDate::Valid(start_date);
        self.cadence = cadence;
    }

    /// Expiry derived from the current start date and cadence, if the start
    /// date parses.
    pub fn expected_expiry(&self) -> Option<NaiveDate> {
        self.start_date
            .date()
            .map(|start| compute_expiry(start, &self.cadence))
    }
}

/// A contact that has not been saved yet and therefore has no id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub name: String,
    #[serde(rename = "type")]
    pub cadence: Cadence,
    pub start_date: StoredDate,
    pub expiry_date: StoredDate,
    pub status: ContactStatus,
}

impl NewContact {
    /// Builds an `active` record with a derived expiry date.
    pub fn new(name: impl Into<String>, cadence: Cadence, start_date: NaiveDate) -> Self {
        let expiry = compute_expiry(start_date, &cadence);
        Self {
            name: name.into(),
            cadence,
            start_date: StoredDate::Valid(start_date),
            expiry_date: StoredDate::Valid(expiry),
            status: ContactStatus::Active,
        }
    }
}
