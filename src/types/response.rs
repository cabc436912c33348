//! Response bodies shared by the handlers. Every body carries a `message`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::UserResponse;

/// Message-only response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User created successfully")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful sign-in
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SignInResponse {
    #[schema(example = "Sign in successful")]
    pub message: String,
    /// Bearer token (JWT) carrying the user's id and email
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// Token lifetime in seconds
    #[schema(example = 3600)]
    pub expires_in: i64,
}

/// Successful profile update; the user carries no credential material
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserUpdatedResponse {
    #[schema(example = "User updated successfully")]
    pub message: String,
    pub user: UserResponse,
}
