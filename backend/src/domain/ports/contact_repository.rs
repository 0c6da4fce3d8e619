//! Port for contact persistence.
//!
//! The [`ContactRepository`] trait is the contract every store adapter
//! fulfils. Adapters own identifier and timestamp assignment, enforce email
//! uniqueness, and return contacts ordered by creation time so pages are
//! stable between requests.

use async_trait::async_trait;
use pagination::PageWindow;

use crate::domain::{Contact, ContactEmail, ContactId, ContactPatch, NewContact};

use super::define_port_error;

define_port_error! {
    /// Errors raised by contact repository adapters.
    pub enum ContactRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "contact repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "contact repository query failed: {message}",
        /// Another contact already uses this email.
        DuplicateEmail { email: String } =>
            "email already exists: {email}",
    }
}

/// One window of contacts plus the total number stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSlice {
    pub contacts: Vec<Contact>,
    pub total: u64,
}

/// Port for contact storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Persist a new contact, assigning its identifier and timestamps.
    ///
    /// Fails with [`ContactRepositoryError::DuplicateEmail`] when the email is
    /// already taken, even if a caller's earlier lookup saw it free.
    async fn create(&self, contact: NewContact) -> Result<Contact, ContactRepositoryError>;

    /// Look a contact up by normalised email.
    async fn find_by_email(
        &self,
        email: &ContactEmail,
    ) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Return the contacts inside `window`, oldest first, with the total
    /// count. A window past the end yields an empty slice.
    async fn list_page(&self, window: PageWindow) -> Result<ContactSlice, ContactRepositoryError>;

    /// Apply `patch` and refresh `updated_at`.
    ///
    /// Returns `None` when no contact has this identifier, whatever the patch
    /// carries. Fails with [`ContactRepositoryError::DuplicateEmail`] when the
    /// patched email belongs to another contact.
    async fn update_by_id(
        &self,
        id: &ContactId,
        patch: &ContactPatch,
    ) -> Result<Option<Contact>, ContactRepositoryError>;

    /// Remove a contact, returning it if it existed.
    async fn delete_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError>;
}
