//! OpenAPI schema definitions for envelope and domain types.
//!
//! Domain and envelope types stay free of `ToSchema`. The wrappers here
//! mirror their wire shape for documentation only.

use utoipa::ToSchema;

use super::contacts::{ContactListResponse, ContactResponse};

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The request conflicts with existing state.
    #[schema(rename = "conflict")]
    Conflict,
    /// The contact store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Machine-readable error section of a failed response.
#[derive(ToSchema)]
#[schema(as = ErrorBody, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorBodySchema {
    code: ErrorCodeSchema,
    details: Option<serde_json::Value>,
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
}

/// Envelope returned for every failed API call.
#[derive(ToSchema)]
#[schema(as = ErrorEnvelope, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorEnvelopeSchema {
    #[schema(example = 404)]
    status_code: u16,
    #[schema(example = "Contact not found")]
    message: String,
    /// Always `null`.
    data: Option<serde_json::Value>,
    #[schema(example = false)]
    success: bool,
    error: ErrorBodySchema,
}

/// Envelope carrying a single contact.
#[derive(ToSchema)]
#[schema(as = ContactEnvelope, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactEnvelopeSchema {
    #[schema(example = 200)]
    status_code: u16,
    #[schema(example = "Contact updated successfully")]
    message: String,
    data: ContactResponse,
    #[schema(example = true)]
    success: bool,
}

/// Envelope carrying one page of contacts.
#[derive(ToSchema)]
#[schema(as = ContactListEnvelope, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactListEnvelopeSchema {
    #[schema(example = 200)]
    status_code: u16,
    #[schema(example = "Contacts fetched successfully")]
    message: String,
    data: ContactListResponse,
    #[schema(example = true)]
    success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_lists_every_code() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "not_found",
            "conflict",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
    }

    #[test]
    fn envelope_schemas_use_camel_case() {
        let schema_json = schema_to_json::<ErrorEnvelopeSchema>();
        assert!(schema_json.contains("statusCode"));
        assert!(schema_json.contains("success"));
        assert!(schema_to_json::<ErrorBodySchema>().contains("traceId"));
        assert!(schema_to_json::<ContactListEnvelopeSchema>().contains("statusCode"));
    }

    #[test]
    fn schema_names_match_wire_types() {
        assert_eq!(ErrorEnvelopeSchema::name(), "ErrorEnvelope");
        assert_eq!(ContactEnvelopeSchema::name(), "ContactEnvelope");
    }
}
