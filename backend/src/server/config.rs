//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use contacts_backend::inbound::http::DEFAULT_JSON_LIMIT;
use contacts_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) json_limit: usize,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Bind to `bind_addr` with the default JSON limit and no database.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            json_limit: DEFAULT_JSON_LIMIT,
            db_pool: None,
        }
    }

    /// Attach a database connection pool.
    ///
    /// Without one the server keeps contacts in memory for the life of the
    /// process.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Cap the size of JSON request bodies.
    #[must_use]
    pub fn with_json_limit(mut self, json_limit: usize) -> Self {
        self.json_limit = json_limit;
        self
    }
}
