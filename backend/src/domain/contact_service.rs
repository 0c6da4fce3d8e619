//! Contact domain service.
//!
//! Implements the contact driving ports on top of a [`ContactRepository`]:
//! presence validation on create, duplicate-email rejection, and mapping of
//! store failures onto domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use pagination::{Page, PageRequest};
use serde_json::json;
use tracing::{debug, info, warn};

use crate::domain::ports::{
    ContactRepository, ContactRepositoryError, ContactsCommand, ContactsQuery,
};
use crate::domain::{
    Contact, ContactDraft, ContactEmail, ContactId, ContactPatch, ContactValidationError, Error,
    NewContact,
};

pub(crate) const CONTACT_NOT_FOUND: &str = "Contact not found";
pub(crate) const EMAIL_EXISTS: &str = "Email already exists";
pub(crate) const MISSING_FIELDS: &str = "Missing required fields";

/// Contact service implementing [`ContactsQuery`] and [`ContactsCommand`].
#[derive(Clone)]
pub struct ContactService<R> {
    repository: Arc<R>,
}

impl<R> ContactService<R> {
    /// Create a service backed by `repository`.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> ContactService<R>
where
    R: ContactRepository,
{
    fn map_repository_error(error: ContactRepositoryError) -> Error {
        match error {
            ContactRepositoryError::Connection { message } => {
                warn!(%message, "contact store unavailable");
                Error::service_unavailable(format!("contact repository unavailable: {message}"))
            }
            ContactRepositoryError::Query { message } => {
                warn!(%message, "contact store query failed");
                Error::internal(format!("contact repository error: {message}"))
            }
            ContactRepositoryError::DuplicateEmail { email } => Self::email_conflict(&email),
        }
    }

    fn email_conflict(email: &str) -> Error {
        debug!(%email, "email already registered");
        Error::conflict(EMAIL_EXISTS).with_details(json!({ "field": "email" }))
    }

    fn not_found() -> Error {
        Error::not_found(CONTACT_NOT_FOUND)
    }

    fn validation_error(error: ContactValidationError) -> Error {
        match error {
            ContactValidationError::MissingFields { fields } => {
                let names: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
                Error::invalid_request(MISSING_FIELDS).with_details(json!({ "fields": names }))
            }
            ContactValidationError::InvalidId { .. } => Self::not_found(),
        }
    }

    /// Identifiers that are not UUIDs cannot name a stored contact.
    fn parse_id(raw: &str) -> Result<ContactId, Error> {
        raw.parse::<ContactId>().map_err(Self::validation_error)
    }

    async fn ensure_email_free(&self, email: &ContactEmail) -> Result<(), Error> {
        let existing = self
            .repository
            .find_by_email(email)
            .await
            .map_err(Self::map_repository_error)?;
        match existing {
            Some(_) => Err(Self::email_conflict(email.as_str())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl<R> ContactsQuery for ContactService<R>
where
    R: ContactRepository,
{
    async fn list_contacts(&self, request: PageRequest) -> Result<Page<Contact>, Error> {
        let slice = self
            .repository
            .list_page(request.window())
            .await
            .map_err(Self::map_repository_error)?;
        debug!(
            page = request.page(),
            limit = request.limit(),
            returned = slice.contacts.len(),
            total = slice.total,
            "listed contacts"
        );
        Ok(Page::new(request, slice.contacts, slice.total))
    }
}

#[async_trait]
impl<R> ContactsCommand for ContactService<R>
where
    R: ContactRepository,
{
    async fn create_contact(&self, draft: ContactDraft) -> Result<Contact, Error> {
        let new_contact = NewContact::try_from(draft).map_err(Self::validation_error)?;
        self.ensure_email_free(new_contact.email()).await?;

        let contact = self
            .repository
            .create(new_contact)
            .await
            .map_err(Self::map_repository_error)?;
        info!(contact_id = %contact.id, "contact created");
        Ok(contact)
    }

    async fn update_contact(&self, id: &str, changes: ContactDraft) -> Result<Contact, Error> {
        let id = Self::parse_id(id)?;
        let patch = ContactPatch::from_raw(changes);
        // The store checks existence before email ownership.
        let contact = self
            .repository
            .update_by_id(&id, &patch)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(Self::not_found)?;
        info!(contact_id = %contact.id, "contact updated");
        Ok(contact)
    }

    async fn delete_contact(&self, id: &str) -> Result<Contact, Error> {
        let id = Self::parse_id(id)?;
        let contact = self
            .repository
            .delete_by_id(&id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(Self::not_found)?;
        info!(contact_id = %contact.id, "contact deleted");
        Ok(contact)
    }
}

#[cfg(test)]
#[path = "contact_service_tests.rs"]
mod tests;
