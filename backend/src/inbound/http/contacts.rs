//! Contact HTTP handlers.
//!
//! ```text
//! GET    /api/v1/contacts?page&limit
//! POST   /api/v1/contacts
//! PUT    /api/v1/contacts/{id}
//! DELETE /api/v1/contacts/{id}
//! ```
//!
//! Handlers only reshape data: presence checks, uniqueness and not-found
//! decisions belong to the contact service behind [`HttpState`].

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use pagination::Page;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Contact, ContactDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::Envelope;
use crate::inbound::http::schemas::{
    ContactEnvelopeSchema, ContactListEnvelopeSchema, ErrorEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_page_request;

pub(crate) const CREATED_MESSAGE: &str = "Contact registered successfully";
pub(crate) const LISTED_MESSAGE: &str = "Contacts fetched successfully";
pub(crate) const UPDATED_MESSAGE: &str = "Contact updated successfully";
pub(crate) const DELETED_MESSAGE: &str = "Contact deleted successfully";

/// Contact fields accepted by create and update.
///
/// On create the four name/email/phone fields are required; on update every
/// supplied field is applied and the rest are left alone.
#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPayload {
    #[schema(example = "Ada")]
    pub first_name: Option<String>,
    #[schema(example = "Lovelace")]
    pub last_name: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "1234567890")]
    pub phone_number: Option<String>,
    pub company: Option<String>,
    pub job_title: Option<String>,
}

impl From<ContactPayload> for ContactDraft {
    fn from(payload: ContactPayload) -> Self {
        Self {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: payload.email,
            phone_number: payload.phone_number,
            company: payload.company,
            job_title: payload.job_title,
        }
    }
}

/// Contact as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[schema(example = "2025-01-01T12:00:00+00:00")]
    pub created_at: String,
    pub updated_at: String,
}

impl From<Contact> for ContactResponse {
    fn from(value: Contact) -> Self {
        Self {
            id: value.id.to_string(),
            first_name: value.first_name,
            last_name: value.last_name,
            email: value.email.as_str().to_owned(),
            phone_number: value.phone_number,
            company: value.company,
            job_title: value.job_title,
            created_at: value.created_at.to_rfc3339(),
            updated_at: value.updated_at.to_rfc3339(),
        }
    }
}

/// One page of contacts plus totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactListResponse {
    pub contacts: Vec<ContactResponse>,
    pub current_page: u64,
    pub total_pages: u64,
    pub total_contacts: u64,
}

impl From<Page<Contact>> for ContactListResponse {
    fn from(page: Page<Contact>) -> Self {
        let current_page = page.current_page();
        let total_pages = page.total_pages();
        let total_contacts = page.total_items();
        Self {
            contacts: page.map(ContactResponse::from).into_items(),
            current_page,
            total_pages,
            total_contacts,
        }
    }
}

/// Raw list query. Values are parsed by hand so that bad input is reported
/// per field instead of as an opaque deserialisation failure.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListContactsQuery {
    /// 1-based page number (default 1).
    #[param(example = "1")]
    pub page: Option<String>,
    /// Page size (default 5).
    #[param(example = "5")]
    pub limit: Option<String>,
}

/// List contacts one page at a time, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/contacts",
    params(ListContactsQuery),
    responses(
        (status = 200, description = "Page of contacts", body = ContactListEnvelopeSchema),
        (status = 400, description = "Invalid page or limit", body = ErrorEnvelopeSchema),
        (status = 503, description = "Contact store unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["contacts"],
    operation_id = "listContacts"
)]
#[get("/contacts")]
pub async fn list_contacts(
    state: web::Data<HttpState>,
    query: web::Query<ListContactsQuery>,
) -> ApiResult<HttpResponse> {
    let query = query.into_inner();
    let request = parse_page_request(query.page.as_deref(), query.limit.as_deref())?;
    let page = state.contacts_query.list_contacts(request).await?;
    Ok(Envelope::ok(StatusCode::OK, LISTED_MESSAGE, ContactListResponse::from(page)).into_response())
}

/// Register a new contact.
#[utoipa::path(
    post,
    path = "/api/v1/contacts",
    request_body = ContactPayload,
    responses(
        (status = 201, description = "Contact created", body = ContactEnvelopeSchema),
        (status = 400, description = "Missing required fields", body = ErrorEnvelopeSchema),
        (status = 409, description = "Email already exists", body = ErrorEnvelopeSchema),
        (status = 503, description = "Contact store unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["contacts"],
    operation_id = "createContact"
)]
#[post("/contacts")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    payload: web::Json<ContactPayload>,
) -> ApiResult<HttpResponse> {
    let contact = state
        .contacts
        .create_contact(payload.into_inner().into())
        .await?;
    Ok(Envelope::ok(
        StatusCode::CREATED,
        CREATED_MESSAGE,
        ContactResponse::from(contact),
    )
    .into_response())
}

/// Apply a partial update to a contact.
#[utoipa::path(
    put,
    path = "/api/v1/contacts/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    request_body = ContactPayload,
    responses(
        (status = 200, description = "Contact updated", body = ContactEnvelopeSchema),
        (status = 404, description = "Contact not found", body = ErrorEnvelopeSchema),
        (status = 409, description = "Email already exists", body = ErrorEnvelopeSchema)
    ),
    tags = ["contacts"],
    operation_id = "updateContact"
)]
#[put("/contacts/{id}")]
pub async fn update_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<ContactPayload>,
) -> ApiResult<HttpResponse> {
    let contact = state
        .contacts
        .update_contact(path.as_str(), payload.into_inner().into())
        .await?;
    Ok(Envelope::ok(StatusCode::OK, UPDATED_MESSAGE, ContactResponse::from(contact)).into_response())
}

/// Delete a contact and return the removed record.
#[utoipa::path(
    delete,
    path = "/api/v1/contacts/{id}",
    params(("id" = String, Path, description = "Contact identifier")),
    responses(
        (status = 200, description = "Contact deleted", body = ContactEnvelopeSchema),
        (status = 404, description = "Contact not found", body = ErrorEnvelopeSchema)
    ),
    tags = ["contacts"],
    operation_id = "deleteContact"
)]
#[delete("/contacts/{id}")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let contact = state.contacts.delete_contact(path.as_str()).await?;
    Ok(Envelope::ok(StatusCode::OK, DELETED_MESSAGE, ContactResponse::from(contact)).into_response())
}

/// Register the contact handlers on a scope or app.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_contacts)
        .service(create_contact)
        .service(update_contact)
        .service(delete_contact);
}

#[cfg(test)]
#[path = "contacts_tests.rs"]
mod tests;
