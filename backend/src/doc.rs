//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the contact endpoints, the health probes and the
//! envelope schemas. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` exports it for external tooling.

use crate::inbound::http::contacts::{ContactListResponse, ContactPayload, ContactResponse};
use crate::inbound::http::schemas::{
    ContactEnvelopeSchema, ContactListEnvelopeSchema, ErrorBodySchema, ErrorCodeSchema,
    ErrorEnvelopeSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contacts API",
        description = "Create, list, update and delete contacts. Every response under /api/v1 uses the statusCode/message/data/success envelope."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::contacts::list_contacts,
        crate::inbound::http::contacts::create_contact,
        crate::inbound::http::contacts::update_contact,
        crate::inbound::http::contacts::delete_contact,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ContactPayload,
        ContactResponse,
        ContactListResponse,
        ContactEnvelopeSchema,
        ContactListEnvelopeSchema,
        ErrorEnvelopeSchema,
        ErrorBodySchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "contacts", description = "Contact management"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
