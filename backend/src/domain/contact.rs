//! Contact aggregate and the value types used to create and patch it.
//!
//! Normalisation mirrors what the store schema guarantees: text is trimmed,
//! email is lowercased, and optional fields that are blank after trimming are
//! stored as absent. Format rules (email syntax, phone digits, length bounds)
//! are deliberately not enforced here; the client validates them before
//! submitting.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Stable contact identifier generated by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(Uuid);

impl ContactId {
    /// Generate a new random identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from storage.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for ContactId {
    type Err = ContactValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim())
            .map(Self)
            .map_err(|_| ContactValidationError::InvalidId {
                value: s.to_owned(),
            })
    }
}

/// Email address normalised the way the unique index compares it.
///
/// # Examples
/// ```
/// use contacts_backend::domain::ContactEmail;
///
/// let email = ContactEmail::new("  Ada@Example.COM ");
/// assert_eq!(email.as_str(), "ada@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Trim and lowercase `raw`.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_lowercase())
    }

    /// Borrow the normalised address.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Fields that must be present when a contact is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
}

impl RequiredField {
    /// Field name as it appears in request payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failures raised while building contact values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactValidationError {
    /// One or more required fields were absent or blank.
    #[error("missing required fields: {}", join_fields(.fields))]
    MissingFields { fields: Vec<RequiredField> },
    /// The identifier is not a UUID.
    #[error("contact id must be a valid UUID: {value}")]
    InvalidId { value: String },
}

fn join_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn normalize_text(value: &str) -> String {
    value.trim().to_owned()
}

fn normalize_optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

/// A persisted contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub first_name: String,
    pub last_name: String,
    pub email: ContactEmail,
    pub phone_number: String,
    pub company: Option<String>,
    pub job_title: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contact {
    /// Materialise a new contact with a store-assigned identifier and
    /// creation time.
    pub fn from_new(id: ContactId, new_contact: NewContact, now: DateTime<Utc>) -> Self {
        let NewContact {
            first_name,
            last_name,
            email,
            phone_number,
            company,
            job_title,
        } = new_contact;
        Self {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            company,
            job_title,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Raw create payload; any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
}

/// Contact fields accepted for creation, with every required field present.
///
/// # Examples
/// ```
/// use contacts_backend::domain::{ContactDraft, NewContact};
///
/// let draft = ContactDraft {
///     first_name: Some("Ada".into()),
///     last_name: Some("Lovelace".into()),
///     email: Some("ADA@example.com".into()),
///     phone_number: Some("1234567890".into()),
///     ..ContactDraft::default()
/// };
/// let contact = NewContact::try_from(draft).expect("all required fields present");
/// assert_eq!(contact.email().as_str(), "ada@example.com");
/// assert!(contact.company().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    first_name: String,
    last_name: String,
    email: ContactEmail,
    phone_number: String,
    company: Option<String>,
    job_title: Option<String>,
}

impl NewContact {
    /// Given name.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Normalised email.
    pub fn email(&self) -> &ContactEmail {
        &self.email
    }

    /// Phone number as submitted (trimmed).
    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Optional employer.
    pub fn company(&self) -> Option<&str> {
        self.company.as_deref()
    }

    /// Optional job title.
    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }
}

impl TryFrom<ContactDraft> for NewContact {
    type Error = ContactValidationError;

    fn try_from(draft: ContactDraft) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let mut required = |value: Option<String>, field: RequiredField| {
            match value.as_deref().map(normalize_text) {
                Some(text) if !text.is_empty() => text,
                _ => {
                    missing.push(field);
                    String::new()
                }
            }
        };

        let first_name = required(draft.first_name, RequiredField::FirstName);
        let last_name = required(draft.last_name, RequiredField::LastName);
        let email = required(draft.email, RequiredField::Email);
        let phone_number = required(draft.phone_number, RequiredField::PhoneNumber);

        if !missing.is_empty() {
            return Err(ContactValidationError::MissingFields { fields: missing });
        }

        Ok(Self {
            first_name,
            last_name,
            email: ContactEmail::new(email),
            phone_number,
            company: draft.company.as_deref().and_then(normalize_optional),
            job_title: draft.job_title.as_deref().and_then(normalize_optional),
        })
    }
}

/// Partial update. `None` leaves a field untouched.
///
/// For the optional fields the inner `None` clears the stored value, which is
/// what a blank string in the request body resolves to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<ContactEmail>,
    pub phone_number: Option<String>,
    pub company: Option<Option<String>>,
    pub job_title: Option<Option<String>>,
}

impl ContactPatch {
    /// Build a patch from raw request values, applying store normalisation.
    pub fn from_raw(draft: ContactDraft) -> Self {
        Self {
            first_name: draft.first_name.as_deref().map(normalize_text),
            last_name: draft.last_name.as_deref().map(normalize_text),
            email: draft.email.map(ContactEmail::new),
            phone_number: draft.phone_number.as_deref().map(normalize_text),
            company: draft.company.as_deref().map(normalize_optional),
            job_title: draft.job_title.as_deref().map(normalize_optional),
        }
    }

    /// True when the patch changes nothing but the update timestamp.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Apply the patch in place and stamp `updated_at`. The identifier and
    /// creation time are never touched.
    pub fn apply_to(&self, contact: &mut Contact, now: DateTime<Utc>) {
        if let Some(value) = &self.first_name {
            contact.first_name.clone_from(value);
        }
        if let Some(value) = &self.last_name {
            contact.last_name.clone_from(value);
        }
        if let Some(value) = &self.email {
            contact.email = value.clone();
        }
        if let Some(value) = &self.phone_number {
            contact.phone_number.clone_from(value);
        }
        if let Some(value) = &self.company {
            contact.company.clone_from(value);
        }
        if let Some(value) = &self.job_title {
            contact.job_title.clone_from(value);
        }
        contact.updated_at = now;
    }
}
