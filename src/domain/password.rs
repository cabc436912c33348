//! Password value object - Domain layer password handling.
//!
//! Argon2id with a fixed work factor. Hashing and verification are CPU-bound
//! on purpose, so the async entry points run them on the blocking pool.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use once_cell::sync::Lazy;

use crate::config::{ARGON2_ITERATIONS, ARGON2_MEMORY_KIB, ARGON2_PARALLELISM};
use crate::errors::{AppError, AppResult};

/// Hash verified against when a login names an unknown email, so that both
/// failure paths pay the same hashing cost.
static DUMMY_HASH: Lazy<String> = Lazy::new(|| {
    Password::hash_sync("credential-service-timing-equaliser")
        .map(Password::into_string)
        .unwrap_or_default()
});

/// Password value object that handles hashing and verification.
///
/// Holds only the PHC-formatted hash, never the plain text.
#[derive(Clone)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Hash the plain text on the blocking thread pool.
    pub async fn hash(plain_text: String) -> AppResult<Self> {
        tokio::task::spawn_blocking(move || Self::hash_sync(&plain_text))
            .await
            .map_err(|e| AppError::internal(format!("Password hash task failed: {}", e)))?
    }

    /// Hash the plain text on the current thread.
    ///
    /// # Errors
    /// Returns an internal error if the hasher rejects its parameters.
    pub fn hash_sync(plain_text: &str) -> AppResult<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()?
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hash failed: {}", e)))?;
        Ok(Self {
            hash: hash.to_string(),
        })
    }

    /// Create a Password from an existing hash (from database).
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// A throwaway hash used to keep unknown-user logins as slow as real ones.
    pub fn dummy() -> Self {
        Self::from_hash(DUMMY_HASH.clone())
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password on the blocking thread pool.
    pub async fn verify(self, plain_text: String) -> bool {
        tokio::task::spawn_blocking(move || self.verify_sync(&plain_text))
            .await
            .unwrap_or(false)
    }

    /// Verify a plain text password against this hash (constant-time compare).
    pub fn verify_sync(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        // Parameters are read from the PHC string, so older hashes still verify.
        Argon2::default()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }

    /// Argon2id instance with the fixed work factor.
    fn argon2() -> AppResult<Argon2<'static>> {
        let params = Params::new(
            ARGON2_MEMORY_KIB,
            ARGON2_ITERATIONS,
            ARGON2_PARALLELISM,
            None,
        )
        .map_err(|e| AppError::internal(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Argon2::new(Algorithm::Argon2id, Version::V0x13, params))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hash_and_verify() {
        let plain = "SecurePassword123!";
        let password = Password::hash_sync(plain).unwrap();

        assert!(password.verify_sync(plain));
        assert!(!password.verify_sync("WrongPassword123"));
    }

    #[test]
    fn test_hash_never_equals_plain_text() {
        let plain = "p1";
        let password = Password::hash_sync(plain).unwrap();

        assert_ne!(password.as_str(), plain);
        assert!(password.as_str().starts_with("$argon2id$"));
    }

    #[test]
    fn test_password_from_hash() {
        let plain = "TestPassword123";
        let hash = Password::hash_sync(plain).unwrap().into_string();

        let restored = Password::from_hash(hash);
        assert!(restored.verify_sync(plain));
    }

    #[test]
    fn test_same_password_different_salts() {
        let plain = "SamePassword123";
        let pass1 = Password::hash_sync(plain).unwrap();
        let pass2 = Password::hash_sync(plain).unwrap();

        assert_ne!(pass1.as_str(), pass2.as_str());
        assert!(pass1.verify_sync(plain));
        assert!(pass2.verify_sync(plain));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        let password = Password::from_hash("not-a-phc-string".to_string());
        assert!(!password.verify_sync("anything"));
    }

    #[test]
    fn test_dummy_hash_rejects_everything() {
        let dummy = Password::dummy();
        assert!(!dummy.as_str().is_empty());
        assert!(!dummy.verify_sync(""));
        assert!(!dummy.verify_sync("password"));
    }

    #[test]
    fn test_debug_is_redacted() {
        let password = Password::hash_sync("secret").unwrap();
        let debug = format!("{:?}", password);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("argon2"));
    }

    #[tokio::test]
    async fn test_async_hash_and_verify() {
        let password = Password::hash("async-secret".to_string()).await.unwrap();

        assert!(password.clone().verify("async-secret".to_string()).await);
        assert!(!password.verify("other".to_string()).await);
    }
}
