//! Contact lifecycle rules.
//!
//! # Responsibility
//! - Derive expiry dates from cadence and start date.
//! - Drive the `active -> overdue -> expired` status state machine.
//! - Suggest display names for new contacts.
//!
//! # Invariants
//! - Everything here is pure: no storage access, no clock reads.
//! - `expired` is only ever left through an explicit undo.

pub mod evaluator;
pub mod expiry;
pub mod naming;
pub mod reducer;
