//! PostgreSQL persistence adapters.
//!
//! Repositories here implement domain ports with Diesel over an async bb8
//! pool. Schema lives in `backend/migrations` and is applied by
//! [`run_pending_migrations`] when the server starts with a database URL.

mod diesel_contact_repository;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_contact_repository::DieselContactRepository;
pub use migrations::{MIGRATIONS, MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
