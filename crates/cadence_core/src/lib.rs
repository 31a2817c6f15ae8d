//! Core lifecycle logic for recurring contacts.
//!
//! Computes expiry dates from cadences, drives the
//! `active -> overdue -> expired` state machine, projects contacts onto
//! calendar markers, and orchestrates a pluggable contact store.

pub mod calendar;
pub mod config;
pub mod db;
pub mod lifecycle;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use calendar::marker::{aggregate, Marker, MarkerColor, MarkerMap};
pub use calendar::sections::{sections, ContactSection};
pub use config::CoreConfig;
pub use lifecycle::evaluator::{evaluate, DataWarning, DateField, Evaluation};
pub use lifecycle::expiry::compute_expiry;
pub use lifecycle::naming::suggest_contact_name;
pub use lifecycle::reducer::{reduce, reduce_all, ContactEvent, Reduced};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::cadence::Cadence;
pub use model::contact::{Contact, ContactId, ContactStatus, NewContact};
pub use model::date::{format_iso_date, StoredDate, ISO_DATE_FORMAT};
pub use repo::contact_store::{ContactStore, StoreError, StoreResult};
pub use repo::sqlite_contact_store::SqliteContactStore;
pub use service::clock::{Clock, FixedClock, SystemClock};
pub use service::contact_service::{
    ContactService, ContactServiceError, ContactSnapshot, ServiceResult, StoreOutcome,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
