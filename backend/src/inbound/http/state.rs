//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{ContactsCommand, ContactsQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub contacts: Arc<dyn ContactsCommand>,
    pub contacts_query: Arc<dyn ContactsQuery>,
}

impl HttpState {
    /// Bundle the contact ports.
    pub fn new(contacts: Arc<dyn ContactsCommand>, contacts_query: Arc<dyn ContactsQuery>) -> Self {
        Self {
            contacts,
            contacts_query,
        }
    }

    /// State backed by one service implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use contacts_backend::domain::ContactService;
    /// use contacts_backend::inbound::http::state::HttpState;
    /// use contacts_backend::outbound::memory::InMemoryContactRepository;
    /// use mockable::DefaultClock;
    ///
    /// let repository = Arc::new(InMemoryContactRepository::new(Arc::new(DefaultClock)));
    /// let state = HttpState::from_service(Arc::new(ContactService::new(repository)));
    /// let _ = state.contacts.clone();
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: ContactsCommand + ContactsQuery + 'static,
    {
        Self {
            contacts: service.clone(),
            contacts_query: service,
        }
    }
}
