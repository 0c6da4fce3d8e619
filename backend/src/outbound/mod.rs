//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-local contact store used when no database URL is
//!   configured, and in tests.
//! - **persistence**: PostgreSQL-backed repositories using Diesel.
//!
//! Adapters translate between domain types and storage representations and
//! hold no business rules beyond the store's own uniqueness guarantee.

pub mod memory;
pub mod persistence;
