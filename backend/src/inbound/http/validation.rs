//! Shared validation helpers for inbound HTTP adapters.

use pagination::{PageRequest, PageRequestError};
use serde_json::json;

use crate::domain::Error;

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidInteger,
    BelowMinimum,
    WindowOverflow,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidInteger => "invalid_integer",
            ErrorCode::BelowMinimum => "below_minimum",
            ErrorCode::WindowOverflow => "window_overflow",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) const PAGE: FieldName = FieldName::new("page");
pub(crate) const LIMIT: FieldName = FieldName::new("limit");

/// Builder for validation errors with field context.
struct ValidationError {
    field: String,
    message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    fn with_value(self, code: ErrorCode, value: impl Into<String>) -> Error {
        Error::invalid_request(self.message).with_details(json!({
            "field": self.field,
            "value": value.into(),
            "code": code.as_str(),
        }))
    }
}

fn invalid_integer_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    ValidationError::new(field, format!("{field} must be a positive integer"))
        .with_value(ErrorCode::InvalidInteger, value)
}

/// Parse an optional query value as an integer; blank counts as absent.
pub(crate) fn parse_positive_integer(
    value: Option<&str>,
    field: FieldName,
) -> Result<Option<i64>, Error> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw
            .parse::<i64>()
            .map(Some)
            .map_err(|_| invalid_integer_error(field, raw)),
    }
}

fn page_request_error(error: PageRequestError) -> Error {
    let (field, value, code) = match error {
        PageRequestError::PageBelowOne { page } => {
            (PAGE, page.to_string(), ErrorCode::BelowMinimum)
        }
        PageRequestError::LimitBelowOne { limit } => {
            (LIMIT, limit.to_string(), ErrorCode::BelowMinimum)
        }
        PageRequestError::WindowOverflow { page, .. } => {
            (PAGE, page.to_string(), ErrorCode::WindowOverflow)
        }
    };
    let message = match code {
        ErrorCode::WindowOverflow => "page is too large for the requested limit".to_owned(),
        _ => format!("{} must be a positive integer", field.as_str()),
    };
    ValidationError::new(field.as_str(), message).with_value(code, value)
}

/// Build a page request from raw `page` and `limit` query values.
pub(crate) fn parse_page_request(
    page: Option<&str>,
    limit: Option<&str>,
) -> Result<PageRequest, Error> {
    let page = parse_positive_integer(page, PAGE)?;
    let limit = parse_positive_integer(limit, LIMIT)?;
    PageRequest::with_defaults(page, limit).map_err(page_request_error)
}
