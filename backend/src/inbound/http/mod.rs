//! HTTP inbound adapter exposing the contact REST API.

pub mod contacts;
pub mod envelope;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::{Scope, web};

pub use error::ApiResult;

/// Base path of the versioned API.
pub const API_BASE_PATH: &str = "/api/v1";

/// Default request body limit in bytes.
pub const DEFAULT_JSON_LIMIT: usize = 16 * 1024;

/// Build the `/api/v1` scope with envelope-producing extractor errors.
///
/// Handlers expect `web::Data<HttpState>` to be registered on the app.
pub fn api_scope(json_limit: usize) -> Scope {
    web::scope(API_BASE_PATH)
        .app_data(
            web::JsonConfig::default()
                .limit(json_limit)
                .error_handler(error::json_error_handler),
        )
        .app_data(web::QueryConfig::default().error_handler(error::query_error_handler))
        .app_data(web::PathConfig::default().error_handler(error::path_error_handler))
        .configure(contacts::configure)
}
