//! Sign-up and sign-in handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{MSG_SIGNIN_OK, MSG_SIGNUP_OK};
use crate::domain::{Credentials, Registration};
use crate::errors::AppResult;
use crate::types::{MessageResponse, SignInResponse};

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/signup",
    tag = "Authentication",
    request_body = Registration,
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Missing field, password mismatch or user already exists", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn signup(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Registration>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    state.credentials.register(payload).await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::new(MSG_SIGNUP_OK))))
}

/// Sign in and get a bearer token
#[utoipa::path(
    post,
    path = "/api/signin",
    tag = "Authentication",
    request_body = Credentials,
    responses(
        (status = 200, description = "Sign in successful", body = SignInResponse),
        (status = 400, description = "Invalid credentials", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn signin(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<Credentials>,
) -> AppResult<Json<SignInResponse>> {
    let access = state
        .credentials
        .authenticate(payload.email, payload.password)
        .await?;

    Ok(Json(SignInResponse {
        message: MSG_SIGNIN_OK.to_string(),
        token: access.token,
        expires_in: access.expires_in,
    }))
}
