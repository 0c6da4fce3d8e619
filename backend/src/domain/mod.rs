//! Domain primitives, services and ports.
//!
//! Purpose: define the contact aggregate and the use cases that act on it,
//! independent of HTTP and storage. Adapters depend on this module; it
//! depends on neither.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Contact and its value types.
//! - ContactService: implementation of the contact driving ports.
//! - TraceId: request correlation identifier.

pub mod contact;
pub mod contact_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::contact::{
    Contact, ContactDraft, ContactEmail, ContactId, ContactPatch, ContactValidationError,
    NewContact, RequiredField,
};
pub use self::contact_service::ContactService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use contacts_backend::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Contact not found"))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
