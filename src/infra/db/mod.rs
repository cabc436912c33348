//! Database connection and schema management.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

pub mod migrations;

pub use migrations::Migrator;

/// One migration and whether the connected schema has it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Database wrapper for connection management.
///
/// Holds the process-wide connection pool; clones share the same pool.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Connect and bring the schema up to date.
    pub async fn connect<C: Into<ConnectOptions>>(options: C) -> Result<Self, DbErr> {
        let database = Self::connect_without_migrations(options).await?;

        let applied = database.apply_pending().await?;
        tracing::info!(applied = applied.len(), "Database connected, schema up to date");

        Ok(database)
    }

    /// Connect without touching the schema (for the migrate command).
    pub async fn connect_without_migrations<C: Into<ConnectOptions>>(
        options: C,
    ) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    /// Get a clone of the database connection.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply every pending migration, returning the names applied.
    pub async fn apply_pending(&self) -> Result<Vec<String>, DbErr> {
        let pending: Vec<String> = Migrator::get_pending_migrations(&self.connection)
            .await?
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        if !pending.is_empty() {
            Migrator::up(&self.connection, None).await?;
        }

        Ok(pending)
    }

    /// Revert the most recently applied migration, if any.
    pub async fn revert_latest(&self) -> Result<Option<String>, DbErr> {
        let latest = Migrator::get_applied_migrations(&self.connection)
            .await?
            .last()
            .map(|m| m.name().to_string());

        if latest.is_some() {
            Migrator::down(&self.connection, Some(1)).await?;
        }

        Ok(latest)
    }

    /// Every known migration in order, with its applied flag.
    pub async fn migration_states(&self) -> Result<Vec<MigrationState>, DbErr> {
        let states = Migrator::get_migration_with_status(&self.connection)
            .await?
            .iter()
            .map(|m| MigrationState {
                name: m.name().to_string(),
                applied: matches!(m.status(), MigrationStatus::Applied),
            })
            .collect();

        Ok(states)
    }

    /// Drop every table, credential rows included, and rebuild the schema.
    pub async fn reset(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Check database connectivity by executing a simple query.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection
            .execute(Statement::from_string(
                self.connection.get_database_backend(),
                "SELECT 1".to_string(),
            ))
            .await?;
        Ok(())
    }
}
