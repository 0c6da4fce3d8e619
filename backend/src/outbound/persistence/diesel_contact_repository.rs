//! PostgreSQL-backed `ContactRepository` implementation using Diesel ORM.
//!
//! Email uniqueness is enforced by the `contacts_email_key` index; a unique
//! violation on insert or update is reported as a duplicate email so the
//! service can answer 409 even when its pre-check lost a race.

use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use mockable::Clock;
use pagination::PageWindow;
use tracing::debug;

use crate::domain::ports::{ContactRepository, ContactRepositoryError, ContactSlice};
use crate::domain::{Contact, ContactEmail, ContactId, ContactPatch, NewContact};

use super::models::{ContactChangeset, ContactRow, NewContactRow};
use super::pool::{DbPool, PoolError};
use super::schema::contacts;

/// Diesel-backed implementation of the `ContactRepository` port.
#[derive(Clone)]
pub struct DieselContactRepository {
    pool: DbPool,
    clock: Arc<dyn Clock>,
}

impl DieselContactRepository {
    /// Create a repository over `pool`, stamping rows with `clock`.
    pub fn new(pool: DbPool, clock: Arc<dyn Clock>) -> Self {
        Self { pool, clock }
    }
}

fn map_pool_error(error: PoolError) -> ContactRepositoryError {
    ContactRepositoryError::connection(error.message())
}

/// Map Diesel errors onto repository errors. `email` names the address being
/// written, if any, for duplicate reporting.
fn map_diesel_error(error: diesel::result::Error, email: Option<&str>) -> ContactRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
            ContactRepositoryError::duplicate_email(email.unwrap_or_default())
        }
        DieselError::DatabaseError(
            DatabaseErrorKind::ClosedConnection | DatabaseErrorKind::UnableToSendCommand,
            _,
        ) => ContactRepositoryError::connection("database connection error"),
        DieselError::NotFound => ContactRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => ContactRepositoryError::query("database query error"),
        _ => ContactRepositoryError::query("database error"),
    }
}

fn row_to_contact(row: ContactRow) -> Contact {
    Contact {
        id: ContactId::from_uuid(row.id),
        first_name: row.first_name,
        last_name: row.last_name,
        email: ContactEmail::new(row.email),
        phone_number: row.phone_number,
        company: row.company,
        job_title: row.job_title,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

fn total_from_count(count: i64) -> Result<u64, ContactRepositoryError> {
    u64::try_from(count)
        .map_err(|_| ContactRepositoryError::query(format!("negative row count {count}")))
}

#[async_trait]
impl ContactRepository for DieselContactRepository {
    async fn create(&self, contact: NewContact) -> Result<Contact, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let now = self.clock.utc();
        let row = NewContactRow {
            id: *ContactId::random().as_uuid(),
            first_name: contact.first_name(),
            last_name: contact.last_name(),
            email: contact.email().as_str(),
            phone_number: contact.phone_number(),
            company: contact.company(),
            job_title: contact.job_title(),
            created_at: now,
            updated_at: now,
        };

        diesel::insert_into(contacts::table)
            .values(&row)
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .map(row_to_contact)
            .map_err(|err| map_diesel_error(err, Some(contact.email().as_str())))
    }

    async fn find_by_email(
        &self,
        email: &ContactEmail,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ContactRow> = contacts::table
            .filter(contacts::email.eq(email.as_str()))
            .select(ContactRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;
        Ok(row.map(row_to_contact))
    }

    async fn list_page(&self, window: PageWindow) -> Result<ContactSlice, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let count: i64 = contacts::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        let rows: Vec<ContactRow> = contacts::table
            .order((contacts::created_at.asc(), contacts::id.asc()))
            .offset(window.offset_i64())
            .limit(window.limit_i64())
            .select(ContactRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, None))?;

        Ok(ContactSlice {
            contacts: rows.into_iter().map(row_to_contact).collect(),
            total: total_from_count(count)?,
        })
    }

    async fn update_by_id(
        &self,
        id: &ContactId,
        patch: &ContactPatch,
    ) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let changeset = ContactChangeset {
            first_name: patch.first_name.as_deref(),
            last_name: patch.last_name.as_deref(),
            email: patch.email.as_ref().map(ContactEmail::as_str),
            phone_number: patch.phone_number.as_deref(),
            company: patch.company.as_ref().map(Option::as_deref),
            job_title: patch.job_title.as_ref().map(Option::as_deref),
            updated_at: self.clock.utc(),
        };

        let row: Option<ContactRow> = diesel::update(contacts::table.find(id.as_uuid()))
            .set(&changeset)
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, changeset.email))?;
        Ok(row.map(row_to_contact))
    }

    async fn delete_by_id(&self, id: &ContactId) -> Result<Option<Contact>, ContactRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<ContactRow> = diesel::delete(contacts::table.find(id.as_uuid()))
            .returning(ContactRow::as_returning())
            .get_result(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, None))?;
        Ok(row.map(row_to_contact))
    }
}
