//! Bearer token issuance and verification (HS256 JWT).

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{Config, TOKEN_TTL_SECONDS};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// JWT claims payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User identifier
    pub id: Uuid,
    pub email: String,
    pub iat: i64,
    pub exp: i64,
}

/// A freshly signed token
#[derive(Debug, Clone)]
pub struct AccessToken {
    pub token: String,
    /// Seconds until expiry
    pub expires_in: i64,
}

/// Signs and checks tokens with the process-wide secret.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenIssuer {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.jwt_secret_bytes())
    }

    /// Issue a token for `user`, valid for one hour.
    pub fn issue(&self, user: &User) -> AppResult<AccessToken> {
        let now = Utc::now();
        let expires_at = now + Duration::seconds(TOKEN_TTL_SECONDS);

        let claims = Claims {
            id: user.id,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding)?;

        Ok(AccessToken {
            token,
            expires_in: TOKEN_TTL_SECONDS,
        })
    }

    /// Check signature and expiry, returning the embedded claims.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|e| {
                tracing::debug!("Token rejected: {}", e);
                AppError::InvalidCredentials
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &[u8] = b"test-secret-key-for-testing-only-32chars";

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "hashed".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_issue_then_verify() {
        let issuer = TokenIssuer::new(SECRET);
        let user = test_user();

        let access = issuer.issue(&user).unwrap();
        let claims = issuer.verify(&access.token).unwrap();

        assert_eq!(claims.id, user.id);
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.exp - claims.iat, TOKEN_TTL_SECONDS);
        assert_eq!(access.expires_in, 3600);
    }

    #[test]
    fn test_token_from_other_secret_rejected() {
        let access = TokenIssuer::new(SECRET).issue(&test_user()).unwrap();
        let other = TokenIssuer::new(b"another-secret-key-that-is-long-enough");

        assert!(matches!(
            other.verify(&access.token),
            Err(AppError::InvalidCredentials)
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        let past = Utc::now().timestamp() - 2 * TOKEN_TTL_SECONDS;
        let claims = Claims {
            id: Uuid::new_v4(),
            email: "old@example.com".to_string(),
            iat: past,
            exp: past + TOKEN_TTL_SECONDS,
        };
        let token = encode(&Header::default(), &claims, &EncodingKey::from_secret(SECRET)).unwrap();

        assert!(issuer.verify(&token).is_err());
    }

    #[test]
    fn test_garbage_token_rejected() {
        let issuer = TokenIssuer::new(SECRET);
        assert!(issuer.verify("not.a.jwt").is_err());
    }
}
