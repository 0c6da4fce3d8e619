//! Contact management backend.
//!
//! The domain owns contact validation and uniqueness rules; inbound adapters
//! expose them over HTTP and outbound adapters persist contacts in memory or
//! PostgreSQL.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
