//! Builders wiring the contact store into HTTP state.

use std::sync::Arc;

use mockable::DefaultClock;
use tracing::{info, warn};

use contacts_backend::domain::ContactService;
use contacts_backend::inbound::http::state::HttpState;
use contacts_backend::outbound::memory::InMemoryContactRepository;
use contacts_backend::outbound::persistence::{DbPool, DieselContactRepository};

/// Build the HTTP state over PostgreSQL when a pool is configured, otherwise
/// over the in-memory store.
pub(super) fn build_http_state(db_pool: Option<&DbPool>) -> HttpState {
    let clock = Arc::new(DefaultClock);
    match db_pool {
        Some(pool) => {
            info!("contact store: postgres");
            let repository = Arc::new(DieselContactRepository::new(pool.clone(), clock));
            HttpState::from_service(Arc::new(ContactService::new(repository)))
        }
        None => {
            warn!("contact store: in-memory; data is lost on restart");
            let repository = Arc::new(InMemoryContactRepository::new(clock));
            HttpState::from_service(Arc::new(ContactService::new(repository)))
        }
    }
}
