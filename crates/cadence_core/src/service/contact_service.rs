//! Contact use-case service.
//!
//! # Responsibility
//! - Load contacts, evaluate their status for today and write back deltas.
//! - Derive calendar markers for the loaded list.
//! - Expose create/edit/dispose/undo/delete on top of the lifecycle reducer.
//!
//! # Invariants
//! - Store outages are logged and leave the in-memory snapshot untouched.
//! - `NotFound` is the only store failure surfaced to callers.
//! - Mutations never reload implicitly; they mark the service dirty and the
//!   caller decides when to call `load`.
//! - Status writes during `load` are issued one per changed contact.

use crate::calendar::marker::{aggregate, MarkerMap};
use crate::calendar::sections::{sections, ContactSection};
use crate::lifecycle::evaluator::{evaluate, DataWarning};
use crate::lifecycle::naming::suggest_contact_name;
use crate::lifecycle::reducer::{reduce_all, ContactEvent, Reduced};
use crate::model::cadence::Cadence;
use crate::model::contact::{Contact, ContactId, NewContact};
use crate::repo::contact_store::{ContactStore, StoreError};
use crate::service::clock::{Clock, SystemClock};
use chrono::NaiveDate;
use log::{debug, error, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Errors surfaced to service callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactServiceError {
    /// The targeted contact does not exist in the store.
    NotFound(ContactId),
    /// An explicit name was blank after trimming.
    InvalidName(String),
}

impl Display for ContactServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::InvalidName(value) => write!(f, "contact name must not be blank: `{value}`"),
        }
    }
}

impl Error for ContactServiceError {}

/// Result of a store-facing call after outages have been absorbed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreOutcome<T> {
    /// The store accepted the call.
    Applied(T),
    /// The store failed (transport or unreadable data). The failure was
    /// logged and nothing changed.
    Unavailable,
}

impl<T> StoreOutcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn applied(&self) -> Option<&T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Unavailable => None,
        }
    }

    pub fn into_applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Unavailable => None,
        }
    }
}

pub type ServiceResult<T> = Result<StoreOutcome<T>, ContactServiceError>;

/// Working copy produced by the last successful `load`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactSnapshot {
    /// Day the contacts were evaluated against; `None` before the first load.
    pub evaluated_on: Option<NaiveDate>,
    /// Evaluated contacts in store order.
    pub contacts: Vec<Contact>,
    pub markers: MarkerMap,
    pub warnings: Vec<DataWarning>,
}

impl ContactSnapshot {
    pub fn find(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    /// Active, overdue and expired groups for list views.
    pub fn sections(&self) -> Vec<ContactSection> {
        sections(&self.contacts)
    }
}

/// Orchestrates the contact store, lifecycle rules and calendar markers.
pub struct ContactService<S: ContactStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
    snapshot: ContactSnapshot,
    dirty: bool,
}

impl<S: ContactStore> ContactService<S> {
    /// Creates a service evaluating against the host's local date.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: ContactStore, C: Clock> ContactService<S, C> {
    /// Creates a service with an explicit clock.
    ///
    /// The service starts dirty: nothing has been loaded yet.
    pub fn with_clock(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            snapshot: ContactSnapshot::default(),
            dirty: true,
        }
    }

    /// Last loaded snapshot. Stale until the next successful `load`.
    pub fn snapshot(&self) -> &ContactSnapshot {
        &self.snapshot
    }

    /// Whether a mutation was applied since the last successful `load`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Fetches all contacts, evaluates them for today and writes back every
    /// status change.
    ///
    /// A failed individual status write is logged; the evaluated status is
    /// still reported and will be written again by the next load.
    pub fn load(&mut self) -> StoreOutcome<ContactSnapshot> {
        let started_at = Instant::now();
        let today = self.clock.today();

        let contacts = match self.store.list() {
            Ok(contacts) => contacts,
            Err(err) => {
                log_store_failure("list", None, &err);
                return StoreOutcome::Unavailable;
            }
        };

        let evaluation = evaluate(today, contacts);
        for warning in &evaluation.warnings {
            warn!(
                "event=contact_data_warning module=service status=warn detail={}",
                warning
            );
        }

        let mut persisted = 0_usize;
        for changed in &evaluation.changed {
            match self.store.update(&changed.id, changed) {
                Ok(_) => {
                    persisted += 1;
                    info!(
                        "event=contact_status_change module=service status=ok id={} to={} trigger=auto",
                        changed.id, changed.status
                    );
                }
                Err(err) => log_store_failure("update", Some(&changed.id), &err),
            }
        }

        let markers = aggregate(&evaluation.contacts);
        self.snapshot = ContactSnapshot {
            evaluated_on: Some(today),
            contacts: evaluation.contacts,
            markers,
            warnings: evaluation.warnings,
        };
        self.dirty = false;

        info!(
            "event=contact_load module=service status=ok today={} contacts={} changed={} persisted={} warnings={} duration_ms={}",
            today,
            self.snapshot.contacts.len(),
            evaluation.changed.len(),
            persisted,
            self.snapshot.warnings.len(),
            started_at.elapsed().as_millis()
        );

        StoreOutcome::Applied(self.snapshot.clone())
    }

    /// Suggests the next `Contact N` name from the names in the store.
    pub fn suggest_name(&self) -> StoreOutcome<String> {
        match self.store.list() {
            Ok(contacts) => StoreOutcome::Applied(suggest_contact_name(
                contacts.iter().map(|contact| contact.name.as_str()),
            )),
            Err(err) => {
                log_store_failure("list", None, &err);
                StoreOutcome::Unavailable
            }
        }
    }

    /// Creates an `active` contact.
    ///
    /// When `name` is `None` a `Contact N` name is suggested from the store.
    pub fn create(
        &mut self,
        name: Option<String>,
        cadence: Cadence,
        start_date: NaiveDate,
    ) -> ServiceResult<Contact> {
        let name = match name {
            Some(value) => normalize_name(value)?,
            None => match self.suggest_name() {
                StoreOutcome::Applied(suggested) => suggested,
                StoreOutcome::Unavailable => return Ok(StoreOutcome::Unavailable),
            },
        };

        let new_contact = NewContact::new(name, cadence, start_date);
        match self.store.create(&new_contact) {
            Ok(created) => {
                self.dirty = true;
                info!(
                    "event=contact_create module=service status=ok id={} cadence={} start_date={} expiry_date={}",
                    created.id, created.cadence, created.start_date, created.expiry_date
                );
                Ok(StoreOutcome::Applied(created))
            }
            Err(err) => {
                log_store_failure("create", None, &err);
                Ok(StoreOutcome::Unavailable)
            }
        }
    }

    /// Replaces cadence and start date, recomputing expiry and status.
    ///
    /// `id` and `name` are preserved. A disposed (`expired`) contact stays
    /// `expired` after an edit; only `undo` reactivates it.
    pub fn edit(
        &mut self,
        id: &ContactId,
        cadence: Cadence,
        start_date: NaiveDate,
    ) -> ServiceResult<Contact> {
        self.apply(
            id,
            "edit",
            &[
                ContactEvent::StartDateChanged(start_date),
                ContactEvent::CadenceChanged(cadence),
            ],
        )
    }

    /// Marks a contact as ended (`expired`).
    pub fn dispose(&mut self, id: &ContactId) -> ServiceResult<Contact> {
        self.apply(id, "dispose", &[ContactEvent::Dispose])
    }

    /// Reactivates a disposed contact.
    pub fn undo(&mut self, id: &ContactId) -> ServiceResult<Contact> {
        self.apply(id, "undo", &[ContactEvent::Undo])
    }

    /// Removes a contact from the store.
    pub fn delete(&mut self, id: &ContactId) -> ServiceResult<()> {
        match self.store.delete(id) {
            Ok(()) => {
                self.dirty = true;
                info!("event=contact_delete module=service status=ok id={id}");
                Ok(StoreOutcome::Applied(()))
            }
            Err(StoreError::NotFound(missing)) => Err(ContactServiceError::NotFound(missing)),
            Err(err) => {
                log_store_failure("delete", Some(id), &err);
                Ok(StoreOutcome::Unavailable)
            }
        }
    }

    fn apply(
        &mut self,
        id: &ContactId,
        op: &'static str,
        events: &[ContactEvent],
    ) -> ServiceResult<Contact> {
        let current = match self.store.get(id) {
            Ok(Some(contact)) => contact,
            Ok(None) => return Err(ContactServiceError::NotFound(id.clone())),
            Err(StoreError::NotFound(missing)) => {
                return Err(ContactServiceError::NotFound(missing))
            }
            Err(err) => {
                log_store_failure("get", Some(id), &err);
                return Ok(StoreOutcome::Unavailable);
            }
        };

        let previous_status = current.status;
        let next = match reduce_all(current, events, self.clock.today()) {
            Reduced::Changed(contact) => contact,
            Reduced::Unchanged(contact) => {
                debug!("event=contact_{op} module=service status=noop id={id}");
                return Ok(StoreOutcome::Applied(contact));
            }
            Reduced::Removed(removed) => return Err(ContactServiceError::NotFound(removed)),
        };

        match self.store.update(id, &next) {
            Ok(saved) => {
                self.dirty = true;
                info!(
                    "event=contact_{op} module=service status=ok id={id} from={previous_status} to={} expiry_date={}",
                    saved.status, saved.expiry_date
                );
                Ok(StoreOutcome::Applied(saved))
            }
            Err(StoreError::NotFound(missing)) => Err(ContactServiceError::NotFound(missing)),
            Err(err) => {
                log_store_failure("update", Some(id), &err);
                Ok(StoreOutcome::Unavailable)
            }
        }
    }
}

fn normalize_name(value: String) -> Result<String, ContactServiceError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ContactServiceError::InvalidName(value));
    }
    Ok(trimmed.to_string())
}

fn log_store_failure(op: &str, id: Option<&ContactId>, err: &StoreError) {
    let error_code = match err {
        StoreError::Unavailable(_) => "store_unavailable",
        StoreError::NotFound(_) => "not_found",
        StoreError::InvalidData(_) => "invalid_data",
    };
    match id {
        Some(id) => error!(
            "event=contact_store_call module=service status=error op={op} id={id} error_code={error_code} error={err}"
        ),
        None => error!(
            "event=contact_store_call module=service status=error op={op} error_code={error_code} error={err}"
        ),
    }
}
