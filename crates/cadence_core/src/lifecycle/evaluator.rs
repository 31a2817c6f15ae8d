//! Automatic status evaluation.
//!
//! # Responsibility
//! - Apply the automatic `active -> overdue` transition against a given day.
//! - Report which contacts changed so callers can write back deltas only.
//! - Surface data-integrity problems without failing the pass.
//!
//! # Invariants
//! - Re-evaluating an evaluated list against the same day changes nothing.
//! - `expired` and `overdue` are never moved by evaluation.
//! - Contacts with an unparseable expiry date keep their status.

use crate::model::contact::{Contact, ContactId, ContactStatus};
use chrono::NaiveDate;
use std::fmt::{Display, Formatter};

/// Which persisted date field a warning refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    StartDate,
    ExpiryDate,
}

impl DateField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartDate => "start_date",
            Self::ExpiryDate => "expiry_date",
        }
    }
}

/// Data-integrity finding raised while evaluating a contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataWarning {
    /// A persisted date does not parse as `YYYY-MM-DD`.
    MalformedDate {
        id: ContactId,
        field: DateField,
        raw: String,
    },
    /// The stored expiry disagrees with the one derived from start date and
    /// cadence.
    ExpiryMismatch {
        id: ContactId,
        stored: NaiveDate,
        expected: NaiveDate,
    },
}

impl Display for DataWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedDate { id, field, raw } => {
                write!(f, "contact {id} has malformed {}: `{raw}`", field.as_str())
            }
            Self::ExpiryMismatch {
                id,
                stored,
                expected,
            } => write!(
                f,
                "contact {id} stores expiry {stored} but its cadence yields {expected}"
            ),
        }
    }
}

/// Output of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Evaluation {
    /// Every input contact, in input order, with recomputed status.
    pub contacts: Vec<Contact>,
    /// Contacts whose status changed in this pass, in input order.
    pub changed: Vec<Contact>,
    pub warnings: Vec<DataWarning>,
}

/// Status a contact should have on `today` given its expiry date.
///
/// Only `active` contacts with a known expiry strictly before `today` move.
pub fn auto_status(
    status: ContactStatus,
    expiry_date: Option<NaiveDate>,
    today: NaiveDate,
) -> ContactStatus {
    match (status, expiry_date) {
        (ContactStatus::Active, Some(expiry)) if expiry < today => ContactStatus::Overdue,
        (current, _) => current,
    }
}

/// Evaluates every contact against `today`.
pub fn evaluate(today: NaiveDate, contacts: Vec<Contact>) -> Evaluation {
    let mut evaluation = Evaluation {
        contacts: Vec::with_capacity(contacts.len()),
        ..Evaluation::default()
    };

    for mut contact in contacts {
        collect_warnings(&contact, &mut evaluation.warnings);

        let next = auto_status(contact.status, contact.expiry_date.date(), today);
        if next != contact.status {
            contact.status = next;
            evaluation.changed.push(contact.clone());
        }
        evaluation.contacts.push(contact);
    }

    evaluation
}

fn collect_warnings(contact: &Contact, warnings: &mut Vec<DataWarning>) {
    if contact.start_date.is_malformed() {
        warnings.push(DataWarning::MalformedDate {
            id: contact.id.clone(),
            field: DateField::StartDate,
            raw: contact.start_date.to_string(),
        });
    }

    match contact.expiry_date.date() {
        None => warnings.push(DataWarning::MalformedDate {
            id: contact.id.clone(),
            field: DateField::ExpiryDate,
            raw: contact.expiry_date.to_string(),
        }),
        Some(stored) => {
            if let Some(expected) = contact.expected_expiry() {
                if expected != stored {
                    warnings.push(DataWarning::ExpiryMismatch {
                        id: contact.id.clone(),
                        stored,
                        expected,
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::auto_status;
    use crate::model::contact::ContactStatus;
    use chrono::NaiveDate;

    fn day(value: &str) -> NaiveDate {
        NaiveDate::parse_from_str(value, "%Y-%m-%d").expect("valid test date")
    }

    #[test]
    fn expiry_on_the_same_day_is_not_overdue() {
        let today = day("2024-04-01");
        assert_eq!(
            auto_status(ContactStatus::Active, Some(today), today),
            ContactStatus::Active
        );
    }

    #[test]
    fn unknown_expiry_keeps_status() {
        assert_eq!(
            auto_status(ContactStatus::Active, None, day("2030-01-01")),
            ContactStatus::Active
        );
    }
}
