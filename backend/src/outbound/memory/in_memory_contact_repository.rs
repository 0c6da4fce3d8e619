//! `ContactRepository` held in process memory.
//!
//! Contacts live in a vector in insertion order, which is the order pages are
//! served in, alongside an email index that enforces uniqueness. Every
//! operation takes the lock once, so check-and-write steps inside a single
//! call are atomic.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::Clock;
use pagination::PageWindow;

use crate::domain::ports::{ContactRepository, ContactRepositoryError, ContactSlice};
use crate::domain::{Contact, ContactEmail, ContactId, ContactPatch, NewContact};

#[derive(Debug, Default)]
struct Store {
    contacts: Vec<Contact>,
    by_email: HashMap<ContactEmail, ContactId>,
}

impl Store {
    fn position(&self, id: &ContactId) -> Option<usize> {
        self.contacts.iter().position(|contact| &contact.id == id)
    }
}

/// Mutex-guarded contact store.
#[derive(Clone)]
pub struct InMemoryContactRepository {
    store: Arc<Mutex<Store>>,
    clock: Arc<dyn Clock>,
}

impl InMemoryContactRepository {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            store: Arc::new(Mutex::new(Store::default())),
            clock,
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, ContactRepositoryError> {
        self.store
            .lock()
            .map_err(|_| ContactRepositoryError::query("contact store lock poisoned"))
    }
}

fn window_bounds(window: PageWindow, len: usize) -> (usize, usize) {
    let start = usize::try_from(window.offset()).map_or(len, |offset| offset.min(len));
    let limit = usize::try_from(window.limit()).unwrap_or(usize::MAX);
    (start, start.saturating_add(limit).min(len))
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
    async fn create(&self, contact: NewContact) -> Result<Contact, ContactRepositoryError> {
        let mut store = self.lock()?;
        if store.by_email.contains_key(contact.email()) {
            return Err(ContactRepositoryError::duplicate_email(contact.email().as_str()));
        }

        let created = Contact::from_new(ContactId::random(), contact, self.clock.utc());
        store.by_email.insert(created.email.clone(), created.id);
        store.contacts.push(created.clone());
        Ok(created)
    }

    async fn find_by_email(
        &self,
        email: &ContactEmail,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        let store = self.lock()?;
        let found = store
            .by_email
            .get(email)
            .and_then(|id| store.position(id))
            .map(|index| store.contacts[index].clone());
        Ok(found)
    }

    async fn list_page(&self, window: PageWindow) -> Result<ContactSlice, ContactRepositoryError> {
        let store = self.lock()?;
        let (start, end) = window_bounds(window, store.contacts.len());
        Ok(ContactSlice {
            contacts: store.contacts[start..end].to_vec(),
            total: store.contacts.len() as u64,
        })
    }

    async fn update_by_id(
        &self,
        id: &ContactId,
        patch: &ContactPatch,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut store = self.lock()?;
        let Some(index) = store.position(id) else {
            return Ok(None);
        };

        if let Some(email) = &patch.email {
            match store.by_email.get(email) {
                Some(owner) if owner != id => {
                    return Err(ContactRepositoryError::duplicate_email(email.as_str()));
                }
                _ => {}
            }
        }

        let previous_email = store.contacts[index].email.clone();
        patch.apply_to(&mut store.contacts[index], self.clock.utc());
        let updated = store.contacts[index].clone();
        if updated.email != previous_email {
            store.by_email.remove(&previous_email);
            store.by_email.insert(updated.email.clone(), updated.id);
        }
        Ok(Some(updated))
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut store = self.lock()?;
        let Some(index) = store.position(id) else {
            return Ok(None);
        };
        let removed = store.contacts.remove(index);
        store.by_email.remove(&removed.email);
        Ok(Some(removed))
    }
}

#[cfg(test)]
#[path = "in_memory_contact_repository_tests.rs"]
mod tests;
