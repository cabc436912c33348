//! Migrate command - schema management for the credential store.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    if matches!(args.action, MigrateAction::Fresh) {
        ensure_reset_allowed(&config)?;
    }

    let db = Database::connect_without_migrations(config.database_url.as_str()).await?;

    match args.action {
        MigrateAction::Up => {
            let applied = db.apply_pending().await?;
            if applied.is_empty() {
                tracing::info!("Schema already up to date");
            }
            for name in applied {
                tracing::info!(migration = %name, "Applied");
            }
        }
        MigrateAction::Down => match db.revert_latest().await? {
            Some(name) => tracing::info!(migration = %name, "Reverted"),
            None => tracing::info!("No applied migrations to revert"),
        },
        MigrateAction::Status => {
            for state in db.migration_states().await? {
                let status = if state.applied { "applied" } else { "pending" };
                tracing::info!(migration = %state.name, status, "Migration");
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping every user record and rebuilding the schema");
            db.reset().await?;
            tracing::info!("Schema rebuilt");
        }
    }

    Ok(())
}

/// `fresh` wipes all credentials, so it never runs against production.
fn ensure_reset_allowed(config: &Config) -> AppResult<()> {
    if config.production {
        return Err(AppError::validation(
            "Refusing to reset the database with APP_ENV=production",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(pairs: &'static [(&'static str, &'static str)]) -> Config {
        Config::from_lookup(|key| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.to_string())
        })
        .unwrap()
    }

    #[test]
    fn test_reset_refused_in_production() {
        let production = config(&[
            ("APP_ENV", "production"),
            ("JWT_SECRET", "a-real-production-secret-of-length-40!!"),
        ]);

        let err = ensure_reset_allowed(&production).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn test_reset_allowed_in_development() {
        assert!(ensure_reset_allowed(&config(&[])).is_ok());
    }

    #[tokio::test]
    async fn test_fresh_in_production_never_connects() {
        let production = Config::from_lookup(|key| match key {
            "APP_ENV" => Some("production".to_string()),
            "JWT_SECRET" => Some("a-real-production-secret-of-length-40!!".to_string()),
            "DATABASE_URL" => Some("postgres://unreachable.invalid:1/credentials".to_string()),
            _ => None,
        })
        .unwrap();

        let result = execute(
            MigrateArgs {
                action: MigrateAction::Fresh,
            },
            production,
        )
        .await;

        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
