//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{auth_handler, user_handler};
use crate::domain::{Credentials, Registration, UserResponse, UserUpdate};
use crate::types::{MessageResponse, SignInResponse, UserUpdatedResponse};

/// OpenAPI documentation for the credential service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Credential Service",
        version = "0.1.0",
        description = "User registration, sign-in, profile update and deletion",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:5001", description = "Local development server")
    ),
    paths(
        auth_handler::signup,
        auth_handler::signin,
        user_handler::update_user,
        user_handler::delete_user,
    ),
    components(
        schemas(
            Registration,
            Credentials,
            UserUpdate,
            UserResponse,
            MessageResponse,
            SignInResponse,
            UserUpdatedResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "User registration and sign-in"),
        (name = "Users", description = "Profile update and deletion")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        assert!(paths.iter().any(|p| p.as_str() == "/api/signup"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/signin"));
        assert!(paths.iter().any(|p| p.as_str() == "/api/user/{id}"));
    }
}
