//! In-memory contact store that records calls and can simulate outages.

use cadence_core::{Contact, ContactId, ContactStore, NewContact, StoreError, StoreResult};
use std::cell::{Cell, RefCell};

#[derive(Default)]
pub struct RecordingStore {
    contacts: RefCell<Vec<Contact>>,
    next_id: Cell<u32>,
    offline: Cell<bool>,
    reject_writes: Cell<bool>,
    pub updates: RefCell<Vec<Contact>>,
    pub creates: Cell<usize>,
    pub deletes: Cell<usize>,
}

impl RecordingStore {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        let store = Self::default();
        *store.contacts.borrow_mut() = contacts;
        store
    }

    /// Makes every subsequent call fail with `Unavailable` (or recover).
    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    /// Keeps reads working but fails every write with `Unavailable`.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    pub fn update_count(&self) -> usize {
        self.updates.borrow().len()
    }

    pub fn stored(&self, id: &ContactId) -> Option<Contact> {
        self.contacts
            .borrow()
            .iter()
            .find(|contact| &contact.id == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.contacts.borrow().len()
    }

    fn check_online(&self) -> StoreResult<()> {
        if self.offline.get() {
            return Err(StoreError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }

    fn check_writable(&self) -> StoreResult<()> {
        self.check_online()?;
        if self.reject_writes.get() {
            return Err(StoreError::Unavailable("write timed out".to_string()));
        }
        Ok(())
    }
}

impl ContactStore for RecordingStore {
    fn list(&self) -> StoreResult<Vec<Contact>> {
        self.check_online()?;
        Ok(self.contacts.borrow().clone())
    }

    fn create(&self, contact: &NewContact) -> StoreResult<Contact> {
        self.check_writable()?;
        let next = self.next_id.get() + 1;
        self.next_id.set(next);
        let created = Contact::from_new(ContactId::new(format!("rec-{next}")), contact.clone());
        self.contacts.borrow_mut().push(created.clone());
        self.creates.set(self.creates.get() + 1);
        Ok(created)
    }

    fn update(&self, id: &ContactId, contact: &Contact) -> StoreResult<Contact> {
        self.check_writable()?;
        let mut contacts = self.contacts.borrow_mut();
        let slot = contacts
            .iter_mut()
            .find(|existing| &existing.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;
        *slot = Contact {
            id: id.clone(),
            ..contact.clone()
        };
        self.updates.borrow_mut().push(slot.clone());
        Ok(slot.clone())
    }

    fn delete(&self, id: &ContactId) -> StoreResult<()> {
        self.check_writable()?;
        let mut contacts = self.contacts.borrow_mut();
        let before = contacts.len();
        contacts.retain(|contact| &contact.id != id);
        if contacts.len() == before {
            return Err(StoreError::NotFound(id.clone()));
        }
        self.deletes.set(self.deletes.get() + 1);
        Ok(())
    }
}
