//! Expiry date calculation.

use crate::model::cadence::Cadence;
use chrono::{Days, NaiveDate};

/// Days between a contact's start date and its expiry for one cadence.
///
/// Unrecognized cadences expire on their start date.
pub fn offset_days(cadence: &Cadence) -> u64 {
    match cadence {
        Cadence::Daily => 2,
        Cadence::Weekly => 8,
        Cadence::BiWeekly => 15,
        Cadence::Monthly => 31,
        Cadence::Unrecognized(_) => 0,
    }
}

/// Computes the expiry date for `start_date` under `cadence`.
///
/// Saturates at `NaiveDate::MAX` instead of overflowing.
pub fn compute_expiry(start_date: NaiveDate, cadence: &Cadence) -> NaiveDate {
    start_date
        .checked_add_days(Days::new(offset_days(cadence)))
        .unwrap_or(NaiveDate::MAX)
}
