//! User profile handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::put,
    Router,
};
use uuid::Uuid;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::{MSG_DELETE_OK, MSG_UPDATE_OK};
use crate::domain::{UserResponse, UserUpdate};
use crate::errors::{AppError, AppResult};
use crate::types::{MessageResponse, UserUpdatedResponse};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/user/:id", put(update_user).delete(delete_user))
}

/// An id that is not a UUID cannot name any stored user.
fn parse_user_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::NotFound)
}

/// Update a user's name, email and optionally password
#[utoipa::path(
    put,
    path = "/api/user/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    request_body = UserUpdate,
    responses(
        (status = 200, description = "User updated", body = UserUpdatedResponse),
        (status = 400, description = "Name or email missing, or email taken", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UserUpdate>,
) -> AppResult<Json<UserUpdatedResponse>> {
    let id = parse_user_id(&id)?;
    let user = state.credentials.update_user(id, payload).await?;

    Ok(Json(UserUpdatedResponse {
        message: MSG_UPDATE_OK.to_string(),
        user: UserResponse::from(user),
    }))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = "Users",
    params(
        ("id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Server error", body = MessageResponse)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    let id = parse_user_id(&id)?;
    state.credentials.delete_user(id).await?;

    Ok(Json(MessageResponse::new(MSG_DELETE_OK)))
}
