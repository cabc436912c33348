//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, UserStore};
use crate::services::{CredentialManager, CredentialService, TokenIssuer};

/// Application state shared by every request.
///
/// Built once at startup; the connection pool and the signing key live here
/// and are never read from the environment again.
#[derive(Clone)]
pub struct AppState {
    /// Credential service (the only path to user records)
    pub credentials: Arc<dyn CredentialService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire the SeaORM-backed credential service from a connection and config.
    pub fn from_config(database: Arc<Database>, config: &Config) -> Self {
        let users = Arc::new(UserStore::new(database.get_connection()));
        let credentials = Arc::new(CredentialManager::new(
            users,
            TokenIssuer::from_config(config),
        ));

        Self {
            credentials,
            database,
        }
    }
}
