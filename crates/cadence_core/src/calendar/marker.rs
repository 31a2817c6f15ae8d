//! Expiry-date markers.

use crate::model::cadence::Cadence;
use crate::model::contact::Contact;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Display color associated with a cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerColor {
    Cyan,
    Green,
    Navy,
    Purple,
    Black,
}

impl MarkerColor {
    pub fn for_cadence(cadence: &Cadence) -> Self {
        match cadence {
            Cadence::Daily => Self::Cyan,
            Cadence::Weekly => Self::Green,
            Cadence::BiWeekly => Self::Navy,
            Cadence::Monthly => Self::Purple,
            Cadence::Unrecognized(_) => Self::Black,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::Cyan => "#00FFFF",
            Self::Green => "#1ac983",
            Self::Navy => "#0e2c4d",
            Self::Purple => "#7d2e85",
            Self::Black => "#000000",
        }
    }
}

/// Calendar metadata for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub marked: bool,
    /// Color of the last contact processed for this day.
    pub color: MarkerColor,
    /// Distinct colors seen for this day, in processing order.
    pub colors: Vec<MarkerColor>,
}

pub type MarkerMap = BTreeMap<NaiveDate, Marker>;

/// Builds one marker per distinct expiry date.
pub fn aggregate<'a, I>(contacts: I) -> MarkerMap
where
    I: IntoIterator<Item = &'a Contact>,
{
    let mut markers = MarkerMap::new();

    for contact in contacts {
        let Some(expiry) = contact.expiry_date.date() else {
            continue;
        };
        let color = MarkerColor::for_cadence(&contact.cadence);
        let marker = markers.entry(expiry).or_insert_with(|| Marker {
            marked: true,
            color,
            colors: Vec::new(),
        });
        marker.color = color;
        if !marker.colors.contains(&color) {
            marker.colors.push(color);
        }
    }

    markers
}
