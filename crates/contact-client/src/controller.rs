//! Drives [`TableState`] against a [`ContactsApi`] and collects notifications.

use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::api::ContactsApi;
use crate::error::ClientError;
use crate::model::{Column, ContactForm, ContactRecord};
use crate::state::{Effect, Mutation, TableAction, TableState, reduce};
use crate::validation::validate;

const ADDED: &str = "Contact added successfully!";
const UPDATED: &str = "Contact updated successfully!";
const DELETED: &str = "Contact deleted successfully!";

/// Severity of a [`Notification`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    /// The action completed.
    Success,
    /// The action was aborted.
    Error,
}

/// User-visible message produced by an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Severity.
    pub level: NotificationLevel,
    /// Text shown to the user.
    pub message: String,
}

/// Contact table bound to a service.
///
/// Every action awaits its request before the next transition. A failure
/// aborts the action, leaves the table as it was and queues one error
/// notification per message.
pub struct ContactTable<A> {
    api: A,
    state: TableState,
    new_contact: ContactForm,
    notifications: VecDeque<Notification>,
}

impl<A: ContactsApi> ContactTable<A> {
    /// Wrap `api` with an empty table on page one.
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: TableState::default(),
            new_contact: ContactForm::default(),
            notifications: VecDeque::new(),
        }
    }

    /// Current table state.
    pub const fn state(&self) -> &TableState {
        &self.state
    }

    /// The new-contact form buffer.
    pub const fn new_contact(&self) -> &ContactForm {
        &self.new_contact
    }

    /// Change one field of the new-contact form.
    pub fn set_new_contact_field(&mut self, column: Column, value: impl Into<String>) {
        self.new_contact.set(column, value);
    }

    /// Take every queued notification, oldest first.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain(..).collect()
    }

    fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push_back(Notification {
            level,
            message: message.into(),
        });
    }

    fn report(&mut self, error: ClientError) -> ClientError {
        warn!(%error, "contact table action failed");
        for message in error.user_messages() {
            self.notify(NotificationLevel::Error, message);
        }
        error
    }

    /// Apply `action` and run any fetches it triggers until the table settles.
    ///
    /// Transitions are staged and committed only once every fetch succeeds.
    ///
    /// # Errors
    /// Returns the fetch failure; the table keeps the state it had before
    /// `action`.
    pub async fn dispatch(&mut self, action: TableAction) -> Result<(), ClientError> {
        let mut staged = reduce(self.state.clone(), action);
        loop {
            let Some(Effect::Fetch(query)) = staged.effect else {
                self.state = staged.state;
                return Ok(());
            };
            debug!(page = query.page, limit = query.limit, "fetching contacts");
            let page = match self.api.list(query).await {
                Ok(page) => page,
                Err(error) => return Err(self.report(error)),
            };
            staged = reduce(staged.state, TableAction::PageLoaded { query, page });
        }
    }

    /// Load the current page.
    ///
    /// # Errors
    /// Returns the fetch failure.
    pub async fn load(&mut self) -> Result<(), ClientError> {
        self.dispatch(TableAction::Refresh).await
    }

    /// Validate and submit the new-contact form.
    ///
    /// The form is cleared on success and kept on failure.
    ///
    /// # Errors
    /// Returns validation, service or transport failures.
    pub async fn create(&mut self) -> Result<ContactRecord, ClientError> {
        if let Err(errors) = validate(&self.new_contact) {
            return Err(self.report(ClientError::Validation(errors)));
        }
        let created = match self.api.create(&self.new_contact).await {
            Ok(record) => record,
            Err(error) => return Err(self.report(error)),
        };
        self.new_contact = ContactForm::default();
        self.notify(NotificationLevel::Success, ADDED);
        self.dispatch(TableAction::MutationSucceeded(Mutation::Created))
            .await?;
        Ok(created)
    }

    /// Validate and submit the edit buffer, if any.
    ///
    /// # Errors
    /// Returns validation, service or transport failures. The buffer is kept.
    pub async fn save_edit(&mut self) -> Result<Option<ContactRecord>, ClientError> {
        let Some(edit) = self.state.edit.clone() else {
            return Ok(None);
        };
        if let Err(errors) = validate(&edit.form) {
            return Err(self.report(ClientError::Validation(errors)));
        }
        let updated = match self.api.update(&edit.id, &edit.form).await {
            Ok(record) => record,
            Err(error) => return Err(self.report(error)),
        };
        self.notify(NotificationLevel::Success, UPDATED);
        self.dispatch(TableAction::MutationSucceeded(Mutation::Updated(edit.id)))
            .await?;
        Ok(Some(updated))
    }

    /// Delete contact `id`.
    ///
    /// # Errors
    /// Returns service or transport failures.
    pub async fn delete(&mut self, id: &str) -> Result<ContactRecord, ClientError> {
        let deleted = match self.api.delete(id).await {
            Ok(record) => record,
            Err(error) => return Err(self.report(error)),
        };
        self.notify(NotificationLevel::Success, DELETED);
        self.dispatch(TableAction::MutationSucceeded(Mutation::Deleted(
            id.to_owned(),
        )))
        .await?;
        Ok(deleted)
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
