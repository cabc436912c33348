//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Sign-up payload. Every field is mandatory and non-empty.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    /// User display name
    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    #[schema(example = "John Doe")]
    pub name: Option<String>,
    /// User email address
    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    #[schema(example = "user@example.com")]
    pub email: Option<String>,
    /// Chosen password
    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    #[schema(example = "SecurePass123!")]
    pub password: Option<String>,
    /// Must repeat `password` exactly
    #[validate(
        required(message = "All fields are required"),
        length(min = 1, message = "All fields are required")
    )]
    #[schema(example = "SecurePass123!")]
    pub confirm_password: Option<String>,
}

impl Registration {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
            confirm_password: Some(confirm_password.into()),
        }
    }
}

/// Sign-in payload.
///
/// Absent fields deserialize to empty strings and simply fail to match.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct Credentials {
    /// User email address
    #[serde(default)]
    #[schema(example = "user@example.com")]
    pub email: String,
    /// User password
    #[serde(default)]
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

/// Profile update payload. `name` and `email` are required on every call;
/// `password` is re-hashed only when present and non-empty.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UserUpdate {
    /// New display name
    #[validate(
        required(message = "Name and email are required"),
        length(min = 1, message = "Name and email are required")
    )]
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    /// New email address
    #[validate(
        required(message = "Name and email are required"),
        length(min = 1, message = "Name and email are required")
    )]
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    /// Optional new password
    #[schema(example = "N3wSecret!")]
    pub password: Option<String>,
}

impl UserUpdate {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password,
        }
    }

    /// The replacement password, if one was actually supplied.
    pub fn new_password(&self) -> Option<&str> {
        self.password.as_deref().filter(|p| !p.is_empty())
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = "550e8400-e29b-41d4-a716-446655440000")]
    pub id: Uuid,
    /// User display name
    #[schema(example = "John Doe")]
    pub name: String,
    /// User email address
    #[schema(example = "user@example.com")]
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_reads_camel_case() {
        let json = r#"{"name":"A","email":"a@x.com","password":"p","confirmPassword":"p"}"#;
        let registration: Registration = serde_json::from_str(json).unwrap();

        assert_eq!(registration.confirm_password.as_deref(), Some("p"));
        assert!(registration.validate().is_ok());
    }

    #[test]
    fn test_registration_missing_field_fails_validation() {
        let json = r#"{"name":"A","email":"a@x.com","password":"p"}"#;
        let registration: Registration = serde_json::from_str(json).unwrap();

        assert!(registration.validate().is_err());
        assert!(Registration::new("A", "", "p", "p").validate().is_err());
    }

    #[test]
    fn test_update_requires_name_and_email() {
        assert!(UserUpdate::new("A", "a@x.com", None).validate().is_ok());
        assert!(UserUpdate::new("", "a@x.com", None).validate().is_err());

        let missing_email: UserUpdate = serde_json::from_str(r#"{"name":"A"}"#).unwrap();
        assert!(missing_email.validate().is_err());
    }

    #[test]
    fn test_empty_password_counts_as_omitted() {
        let update = UserUpdate::new("A", "a@x.com", Some(String::new()));
        assert_eq!(update.new_password(), None);

        let update = UserUpdate::new("A", "a@x.com", Some("new".to_string()));
        assert_eq!(update.new_password(), Some("new"));
    }

    #[test]
    fn test_user_serialization_skips_hash() {
        let user = User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("password"));

        let response = serde_json::to_string(&UserResponse::from(user)).unwrap();
        assert!(!response.contains("password"));
    }
}
