//! Renewal cadence labels.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Renewal period governing how far a contact's expiry lies from its start.
///
/// Labels the core does not recognize are kept verbatim so a record read
/// from storage round-trips without loss.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Cadence {
    Daily,
    Weekly,
    BiWeekly,
    Monthly,
    /// Any label outside the known set.
    Unrecognized(String),
}

impl Cadence {
    /// Known cadences in picker order.
    pub const KNOWN: [Cadence; 4] = [
        Cadence::Monthly,
        Cadence::BiWeekly,
        Cadence::Weekly,
        Cadence::Daily,
    ];

    /// Parses a store label. Never fails.
    pub fn from_label(value: &str) -> Self {
        match value.trim() {
            "Daily" => Self::Daily,
            "Weekly" => Self::Weekly,
            "Bi-Weekly" => Self::BiWeekly,
            "Monthly" => Self::Monthly,
            _ => Self::Unrecognized(value.to_string()),
        }
    }

    /// Label used on the wire and in storage.
    pub fn label(&self) -> &str {
        match self {
            Self::Daily => "Daily",
            Self::Weekly => "Weekly",
            Self::BiWeekly => "Bi-Weekly",
            Self::Monthly => "Monthly",
            Self::Unrecognized(label) => label.as_str(),
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }
}

impl Display for Cadence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl From<String> for Cadence {
    fn from(value: String) -> Self {
        Self::from_label(value.as_str())
    }
}

impl From<Cadence> for String {
    fn from(value: Cadence) -> Self {
        value.label().to_string()
    }
}
