//! Status sections for list views.

use crate::model::contact::{Contact, ContactStatus};

/// One titled group of contacts sharing a status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSection {
    pub status: ContactStatus,
    pub title: &'static str,
    pub contacts: Vec<Contact>,
}

const SECTION_ORDER: [(ContactStatus, &str); 3] = [
    (ContactStatus::Active, "Active Contacts"),
    (ContactStatus::Overdue, "Overdue Contacts"),
    (ContactStatus::Expired, "Recently Expired Contacts"),
];

/// Groups contacts into active, overdue and expired sections.
///
/// All three sections are always returned; input order is kept inside each.
pub fn sections(contacts: &[Contact]) -> Vec<ContactSection> {
    SECTION_ORDER
        .iter()
        .map(|&(status, title)| ContactSection {
            status,
            title,
            contacts: contacts
                .iter()
                .filter(|contact| contact.status == status)
                .cloned()
                .collect(),
        })
        .collect()
}
