//! Credential service - the user record lifecycle and session issuance.
//!
//! Every HTTP route delegates here; there is exactly one code path per
//! operation. Password material only ever crosses this module as plain text
//! on the way into the hasher.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::token::{AccessToken, Claims, TokenIssuer};
use crate::config::{MSG_ALL_FIELDS_REQUIRED, MSG_NAME_EMAIL_REQUIRED, MSG_PASSWORD_MISMATCH};
use crate::domain::{Password, Registration, User, UserUpdate};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::UserRepository;

/// Credential service trait for dependency injection.
#[async_trait]
pub trait CredentialService: Send + Sync {
    /// Create a user. Checks, in order: all fields present, email free,
    /// passwords match.
    async fn register(&self, registration: Registration) -> AppResult<User>;

    /// Check credentials and issue a one-hour bearer token.
    async fn authenticate(&self, email: String, password: String) -> AppResult<AccessToken>;

    /// Replace name and email, and the password when one is supplied.
    async fn update_user(&self, id: Uuid, changes: UserUpdate) -> AppResult<User>;

    /// Remove a user permanently.
    async fn delete_user(&self, id: Uuid) -> AppResult<()>;

    /// Verify a previously issued token and extract its claims.
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Concrete implementation of CredentialService.
pub struct CredentialManager {
    users: Arc<dyn UserRepository>,
    tokens: TokenIssuer,
}

impl CredentialManager {
    pub fn new(users: Arc<dyn UserRepository>, tokens: TokenIssuer) -> Self {
        Self { users, tokens }
    }
}

#[async_trait]
impl CredentialService for CredentialManager {
    async fn register(&self, registration: Registration) -> AppResult<User> {
        registration
            .validate()
            .map_err(|_| AppError::validation(MSG_ALL_FIELDS_REQUIRED))?;

        let Registration {
            name: Some(name),
            email: Some(email),
            password: Some(password),
            confirm_password: Some(confirm_password),
        } = registration
        else {
            return Err(AppError::validation(MSG_ALL_FIELDS_REQUIRED));
        };

        // Fast path for the common case; the unique index settles races.
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::Conflict);
        }

        if password != confirm_password {
            return Err(AppError::validation(MSG_PASSWORD_MISMATCH));
        }

        let password_hash = Password::hash(password).await?.into_string();
        let user = self.users.create(name, email, password_hash).await?;

        tracing::info!(user_id = %user.id, "User registered");
        Ok(user)
    }

    async fn authenticate(&self, email: String, password: String) -> AppResult<AccessToken> {
        let user = self.users.find_by_email(&email).await?;

        // Unknown emails still pay for a verification so timing does not
        // reveal which addresses are registered.
        let stored = match &user {
            Some(user) => Password::from_hash(user.password_hash.clone()),
            None => Password::dummy(),
        };
        let password_valid = stored.verify(password).await;

        let user = match user {
            Some(user) if password_valid => user,
            _ => return Err(AppError::InvalidCredentials),
        };

        let token = self.tokens.issue(&user)?;
        tracing::info!(user_id = %user.id, "User signed in");
        Ok(token)
    }

    async fn update_user(&self, id: Uuid, changes: UserUpdate) -> AppResult<User> {
        changes
            .validate()
            .map_err(|_| AppError::validation(MSG_NAME_EMAIL_REQUIRED))?;

        // Unknown ids fail before paying for a hash.
        self.users.find_by_id(id).await?.ok_or_not_found()?;

        let password_hash = match changes.new_password() {
            Some(plain) => Some(Password::hash(plain.to_string()).await?.into_string()),
            None => None,
        };

        let UserUpdate {
            name: Some(name),
            email: Some(email),
            ..
        } = changes
        else {
            return Err(AppError::validation(MSG_NAME_EMAIL_REQUIRED));
        };

        let user = self.users.update(id, name, email, password_hash).await?;

        tracing::info!(user_id = %user.id, "User updated");
        Ok(user)
    }

    async fn delete_user(&self, id: Uuid) -> AppResult<()> {
        self.users.delete(id).await?;

        tracing::info!(user_id = %id, "User deleted");
        Ok(())
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        self.tokens.verify(token)
    }
}
