//! Pure reducer for user-initiated contact changes.
//!
//! # Responsibility
//! - Translate edit and status actions into the next contact state.
//! - Keep status rules out of the orchestration layer.
//!
//! # Invariants
//! - Rescheduling recomputes `expiry_date` and re-evaluates status from a
//!   fresh `active` record against `today`.
//! - Rescheduling a disposed (`expired`) contact keeps it disposed.
//! - A cadence change on a contact with a malformed start date is a no-op;
//!   cadence and expiry only ever change together.
//! - `dispose` and `undo` only touch `status`.

use crate::lifecycle::evaluator::auto_status;
use crate::model::cadence::Cadence;
use crate::model::contact::{Contact, ContactId, ContactStatus};
use chrono::NaiveDate;

/// User-initiated change applied to one contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactEvent {
    CadenceChanged(Cadence),
    StartDateChanged(NaiveDate),
    /// Mark the contact as ended (`expired`).
    Dispose,
    /// Reactivate a disposed contact.
    Undo,
    Delete,
}

/// Next state produced by [`reduce`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reduced {
    /// The event is a no-op for this contact.
    Unchanged(Contact),
    Changed(Contact),
    Removed(ContactId),
}

impl Reduced {
    pub fn is_changed(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }

    /// Remaining contact, if the event did not remove it.
    pub fn into_contact(self) -> Option<Contact> {
        match self {
            Self::Unchanged(contact) | Self::Changed(contact) => Some(contact),
            Self::Removed(_) => None,
        }
    }
}

/// Applies `event` to `contact` as of `today`.
pub fn reduce(contact: Contact, event: &ContactEvent, today: NaiveDate) -> Reduced {
    let before = contact.clone();
    let mut next = contact;

    match event {
        ContactEvent::CadenceChanged(cadence) => match next.start_date.date() {
            Some(start) => next.reschedule(cadence.clone(), start),
            // Expiry cannot be derived without a start date.
            None => return Reduced::Unchanged(next),
        },
        ContactEvent::StartDateChanged(start) => {
            let cadence = next.cadence.clone();
            next.reschedule(cadence, *start);
        }
        ContactEvent::Dispose => {
            next.status = ContactStatus::Expired;
            return settle(before, next);
        }
        ContactEvent::Undo => {
            if next.status == ContactStatus::Expired {
                next.status = ContactStatus::Active;
            }
            return settle(before, next);
        }
        ContactEvent::Delete => return Reduced::Removed(next.id),
    }

    if next.status != ContactStatus::Expired {
        next.status = auto_status(ContactStatus::Active, next.expiry_date.date(), today);
    }
    settle(before, next)
}

/// Applies events in order, stopping at the first removal.
pub fn reduce_all(contact: Contact, events: &[ContactEvent], today: NaiveDate) -> Reduced {
    let original = contact.clone();
    let mut current = contact;
    for event in events {
        match reduce(current, event, today) {
            Reduced::Removed(id) => return Reduced::Removed(id),
            Reduced::Unchanged(contact) | Reduced::Changed(contact) => current = contact,
        }
    }
    settle(original, current)
}

fn settle(before: Contact, after: Contact) -> Reduced {
    if before == after {
        Reduced::Unchanged(after)
    } else {
        Reduced::Changed(after)
    }
}
