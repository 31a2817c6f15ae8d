//! Contact store contract.

use crate::model::contact::{Contact, ContactId, NewContact};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure reported by a contact store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Transport or backend failure; the call may not have been applied.
    Unavailable(String),
    /// The targeted contact does not exist.
    NotFound(ContactId),
    /// The store returned a record the core cannot interpret.
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(message) => write!(f, "contact store unavailable: {message}"),
            Self::NotFound(id) => write!(f, "contact not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid stored contact data: {message}"),
        }
    }
}

impl Error for StoreError {}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Unavailable(value.to_string())
    }
}

/// CRUD collaborator holding the durable copy of every contact.
///
/// Shaped after the remote REST store: `GET /contacts`, `POST /contacts`,
/// `PUT /contacts/{id}`, `DELETE /contacts/{id}`.
pub trait ContactStore {
    fn list(&self) -> StoreResult<Vec<Contact>>;
    fn create(&self, contact: &NewContact) -> StoreResult<Contact>;
    fn update(&self, id: &ContactId, contact: &Contact) -> StoreResult<Contact>;
    fn delete(&self, id: &ContactId) -> StoreResult<()>;

    /// Reads one contact. The default scans `list()`.
    fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        Ok(self
            .list()?
            .into_iter()
            .find(|contact| &contact.id == id))
    }
}

impl<S: ContactStore + ?Sized> ContactStore for &S {
    fn list(&self) -> StoreResult<Vec<Contact>> {
        (**self).list()
    }

    fn create(&self, contact: &NewContact) -> StoreResult<Contact> {
        (**self).create(contact)
    }

    fn update(&self, id: &ContactId, contact: &Contact) -> StoreResult<Contact> {
        (**self).update(id, contact)
    }

    fn delete(&self, id: &ContactId) -> StoreResult<()> {
        (**self).delete(id)
    }

    fn get(&self, id: &ContactId) -> StoreResult<Option<Contact>> {
        (**self).get(id)
    }
}
