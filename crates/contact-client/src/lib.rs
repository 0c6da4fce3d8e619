//! Client for the contacts API.
//!
//! [`state`] holds the table model and its pure [`reduce`] function,
//! [`controller::ContactTable`] runs the model against a [`ContactsApi`], and
//! [`validation`] checks forms before anything is sent.
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use contact_client::{ContactTable, HttpContactsApi};
//! use url::Url;
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let base = Url::parse("http://localhost:8000")?;
//! let api = HttpContactsApi::new(&base, Duration::from_secs(10))?;
//! let mut table = ContactTable::new(api);
//! table.load().await?;
//! for row in &table.state().rows {
//!     tracing::info!(email = %row.email, "contact");
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod controller;
pub mod error;
pub mod model;
pub mod state;
pub mod validation;

pub use api::{ContactsApi, HttpContactsApi};
pub use controller::{ContactTable, Notification, NotificationLevel};
pub use error::ClientError;
pub use model::{Column, ContactForm, ContactPage, ContactRecord, Envelope};
pub use state::{
    Effect, EditBuffer, Mutation, PageQuery, Sort, SortDirection, TableAction, TableState,
    Transition, after_mutation, reduce,
};
pub use validation::{FieldError, validate};
