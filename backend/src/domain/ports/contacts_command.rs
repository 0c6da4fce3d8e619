//! Driving port for contact mutations.

use async_trait::async_trait;

use crate::domain::{Contact, ContactDraft, Error};

/// Domain use-case port for creating, updating and deleting contacts.
///
/// Identifiers arrive as raw path segments; implementations report a value
/// that is not a contact identifier as not found.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsCommand: Send + Sync {
    /// Create a contact after checking required fields and email uniqueness.
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error>;

    /// Apply every supplied field of `changes` to the contact.
    async fn update_contact(&self, id: &str, changes: ContactDraft) -> Result<Contact, Error>;

    /// Delete the contact and return it.
    async fn delete_contact(&self, id: &str) -> Result<Contact, Error>;
}
