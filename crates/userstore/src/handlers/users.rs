//! User CRUD handlers.
//!
//! Each handler issues exactly one repository call and maps the outcome to a
//! status code. Body rejections of any kind become 400.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use userstore_core::user::{User, UserChanges};

use crate::{handlers::ApiError, state::AppState};

fn decode<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))
}

/// List all users (GET /users).
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = state
        .users
        .list_users()
        .await
        .map_err(|e| ApiError::store(e, "Failed to retrieve users"))?;

    tracing::debug!(count = users.len(), "Listed users");

    Ok(Json(users))
}

/// Get a single user by ID (GET /users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    state
        .users
        .get_user(&id)
        .await
        .map_err(|e| ApiError::store(e, "Failed to retrieve user"))?
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// Create a user (POST /users), overwriting any user with the same id.
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<User>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let user = decode(payload)?;

    state
        .users
        .put_user(&user)
        .await
        .map_err(|e| ApiError::store(e, "Failed to create user"))?;

    tracing::info!(user_id = %user.id, "Created user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Update a user's name and age (PUT /users/{id}).
///
/// The path id wins over any id in the body. Missing users are created.
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UserChanges>, JsonRejection>,
) -> Result<Json<User>, ApiError> {
    let changes = decode(payload)?;

    state
        .users
        .update_user(&id, &changes)
        .await
        .map_err(|e| ApiError::store(e, "Failed to update user"))?;

    tracing::info!(user_id = %id, "Updated user");

    Ok(Json(changes.into_user(id)))
}

/// Delete a user by ID (DELETE /users/{id}). Succeeds for unknown ids.
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    state
        .users
        .delete_user(&id)
        .await
        .map_err(|e| ApiError::store(e, "Failed to delete user"))?;

    tracing::info!(user_id = %id, "Deleted user");

    Ok(StatusCode::NO_CONTENT)
}
