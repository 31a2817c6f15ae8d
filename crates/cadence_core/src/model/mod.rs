//! Domain model for tracked recurring contacts.
//!
//! # Responsibility
//! - Define the canonical contact record shared by lifecycle, calendar and
//!   persistence code.
//! - Keep the wire shape of the remote contact store in one place.
//!
//! # Invariants
//! - A saved contact always carries a store-assigned `ContactId`.
//! - `expiry_date` is derived from `start_date` and `cadence`, never edited.

pub mod cadence;
pub mod contact;
pub mod date;
