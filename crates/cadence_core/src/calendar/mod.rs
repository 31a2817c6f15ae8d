//! Calendar and list projections over contacts.
//!
//! # Responsibility
//! - Build per-day calendar markers colored by cadence.
//! - Group contacts into the status sections shown by list views.
//!
//! # Invariants
//! - At most one marker per expiry date.
//! - When contacts share a date, the last one processed sets `color`.
//! - Contacts without a parseable expiry date produce no marker.

pub mod marker;
pub mod sections;
