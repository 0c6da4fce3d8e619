//! Wire types exchanged with the contacts API.

use serde::{Deserialize, Serialize};

/// Table column, also used to address form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    /// Given name.
    FirstName,
    /// Family name.
    LastName,
    /// Email address.
    Email,
    /// Phone number.
    PhoneNumber,
    /// Employer.
    Company,
    /// Role at the employer.
    JobTitle,
}

impl Column {
    /// Wire name of the column.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::PhoneNumber => "phoneNumber",
            Self::Company => "company",
            Self::JobTitle => "jobTitle",
        }
    }
}

/// Contact as returned by the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    /// Service-assigned identifier.
    pub id: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Normalised email address.
    pub email: String,
    /// Phone number.
    pub phone_number: String,
    /// Employer, if recorded.
    #[serde(default)]
    pub company: Option<String>,
    /// Role, if recorded.
    #[serde(default)]
    pub job_title: Option<String>,
    /// RFC 3339 creation timestamp.
    pub created_at: String,
    /// RFC 3339 last-update timestamp.
    pub updated_at: String,
}

impl ContactRecord {
    /// Raw string value of `column`; absent optionals read as `""`.
    #[must_use]
    pub fn value(&self, column: Column) -> &str {
        match column {
            Column::FirstName => &self.first_name,
            Column::LastName => &self.last_name,
            Column::Email => &self.email,
            Column::PhoneNumber => &self.phone_number,
            Column::Company => self.company.as_deref().unwrap_or_default(),
            Column::JobTitle => self.job_title.as_deref().unwrap_or_default(),
        }
    }
}

/// Editable field set used for both the new-contact form and the edit buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Email address.
    pub email: String,
    /// Phone number.
    pub phone_number: String,
    /// Employer; blank means none.
    pub company: String,
    /// Role; blank means none.
    pub job_title: String,
}

impl ContactForm {
    /// Read the value held for `column`.
    #[must_use]
    pub fn get(&self, column: Column) -> &str {
        match column {
            Column::FirstName => &self.first_name,
            Column::LastName => &self.last_name,
            Column::Email => &self.email,
            Column::PhoneNumber => &self.phone_number,
            Column::Company => &self.company,
            Column::JobTitle => &self.job_title,
        }
    }

    /// Replace the value held for `column`.
    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        let slot = match column {
            Column::FirstName => &mut self.first_name,
            Column::LastName => &mut self.last_name,
            Column::Email => &mut self.email,
            Column::PhoneNumber => &mut self.phone_number,
            Column::Company => &mut self.company,
            Column::JobTitle => &mut self.job_title,
        };
        *slot = value.into();
    }
}

impl From<&ContactRecord> for ContactForm {
    fn from(record: &ContactRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            email: record.email.clone(),
            phone_number: record.phone_number.clone(),
            company: record.company.clone().unwrap_or_default(),
            job_title: record.job_title.clone().unwrap_or_default(),
        }
    }
}

/// One page of contacts plus totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPage {
    /// Contacts in store order.
    pub contacts: Vec<ContactRecord>,
    /// Page number the service answered for.
    pub current_page: u64,
    /// Number of pages at the requested size.
    pub total_pages: u64,
    /// Number of stored contacts.
    pub total_contacts: u64,
}

/// Response envelope wrapping every API answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    /// HTTP status echoed in the body.
    pub status_code: u16,
    /// Human-readable outcome.
    pub message: String,
    /// Payload; `None` on failure.
    pub data: Option<T>,
    /// Whether the call succeeded.
    pub success: bool,
}
