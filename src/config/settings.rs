//! Application settings loaded from environment variables.

use std::env;

use thiserror::Error;

use super::constants::{
    DEFAULT_DATABASE_URL, DEFAULT_JWT_SECRET, ENV_PRODUCTION, MIN_JWT_SECRET_LENGTH,
};

/// Startup configuration failures. Any of these aborts the process.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set to a non-default value in production")]
    DefaultSecretInProduction,

    #[error("JWT_SECRET must be at least {} characters long", MIN_JWT_SECRET_LENGTH)]
    SecretTooShort,
}

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    jwt_secret: String,
    pub production: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .field("production", &self.production)
            .finish()
    }
}

impl Config {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// # Errors
    /// Fails when the signing secret is too short or when the default secret
    /// is used in production.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let production = lookup("APP_ENV")
            .map(|v| v.eq_ignore_ascii_case(ENV_PRODUCTION))
            .unwrap_or(false);

        let jwt_secret = match lookup("JWT_SECRET") {
            Some(secret) => secret,
            None => {
                if !production {
                    tracing::warn!("JWT_SECRET not set, using insecure default for development");
                }
                DEFAULT_JWT_SECRET.to_string()
            }
        };

        if production && jwt_secret == DEFAULT_JWT_SECRET {
            return Err(ConfigError::DefaultSecretInProduction);
        }

        if jwt_secret.len() < MIN_JWT_SECRET_LENGTH {
            return Err(ConfigError::SecretTooShort);
        }

        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            jwt_secret,
            production,
        })
    }

    /// Get JWT secret bytes for token signing/verification.
    pub fn jwt_secret_bytes(&self) -> &[u8] {
        self.jwt_secret.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_in_development() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.jwt_secret_bytes(), DEFAULT_JWT_SECRET.as_bytes());
        assert!(!config.production);
    }

    #[test]
    fn test_production_rejects_default_secret() {
        let result = Config::from_lookup(lookup_from(&[("APP_ENV", "production")]));
        assert_eq!(result.unwrap_err(), ConfigError::DefaultSecretInProduction);

        let explicit_default = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "Production"),
            ("JWT_SECRET", DEFAULT_JWT_SECRET),
        ]));
        assert_eq!(explicit_default.unwrap_err(), ConfigError::DefaultSecretInProduction);
    }

    #[test]
    fn test_production_accepts_custom_secret() {
        let config = Config::from_lookup(lookup_from(&[
            ("APP_ENV", "production"),
            ("JWT_SECRET", "a-real-production-secret-of-length-40!!"),
        ]))
        .unwrap();

        assert!(config.production);
    }

    #[test]
    fn test_short_secret_rejected() {
        let result = Config::from_lookup(lookup_from(&[("JWT_SECRET", "your_jwt_secret")]));
        assert_eq!(result.unwrap_err(), ConfigError::SecretTooShort);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://user:hunter2@db/credentials"),
        ]))
        .unwrap();
        let debug = format!("{:?}", config);

        assert!(!debug.contains("hunter2"));
        assert!(!debug.contains(DEFAULT_JWT_SECRET));
        assert!(debug.contains("[REDACTED]"));
    }
}
