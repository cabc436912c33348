//! Shared fixtures for integration tests.
//!
//! Tests run against an in-memory SQLite database with the real migrations
//! applied, so the unique index on `users.email` is exercised for real.

use std::sync::Arc;

use sea_orm::ConnectOptions;

use credential_service::infra::Database;

/// Fresh, migrated in-memory database. A single pooled connection keeps
/// every query on the same SQLite memory instance.
pub async fn memory_database() -> Arc<Database> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    Arc::new(
        Database::connect(options)
            .await
            .expect("in-memory database should migrate"),
    )
}
