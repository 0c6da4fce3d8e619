//! Driving port for reading contacts.
//!
//! Inbound adapters fetch pages of contacts through this port without
//! reaching into persistence.

use async_trait::async_trait;
use pagination::{Page, PageRequest};

use crate::domain::{Contact, Error};

/// Domain use-case port for listing contacts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactsQuery: Send + Sync {
    /// Return one page of contacts in creation order.
    async fn list_contacts(&self, request: PageRequest) -> Result<Page<Contact>, Error>;
}
