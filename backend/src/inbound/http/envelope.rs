//! Uniform response envelope.
//!
//! Every API response, success or failure, has the shape
//! `{statusCode, message, data, success}`. Failures add an `error` object
//! with the stable code and optional details and trace id.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::{Error, ErrorCode};

/// Successful response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Envelope<T> {
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
    pub success: bool,
}

impl<T: Serialize> Envelope<T> {
    /// Wrap `data` for a successful response.
    pub fn ok(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status_code: status.as_u16(),
            message: message.into(),
            data: Some(data),
            success: true,
        }
    }

    /// Render as an HTTP response with the envelope's status.
    pub fn into_response(self) -> HttpResponse {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        HttpResponse::build(status).json(self)
    }
}

/// Machine-readable part of a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
}

/// Failed response wrapper. `data` is always `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub status_code: u16,
    pub message: String,
    pub data: Option<Value>,
    pub success: bool,
    pub error: ErrorBody,
}

impl ErrorEnvelope {
    /// Build the envelope for `error` answered with `status`.
    pub fn from_error(status: StatusCode, error: &Error) -> Self {
        Self {
            status_code: status.as_u16(),
            message: error.message().to_owned(),
            data: None,
            success: false,
            error: ErrorBody {
                code: error.code(),
                details: error.details().cloned(),
                trace_id: error.trace_id().map(str::to_owned),
            },
        }
    }
}
