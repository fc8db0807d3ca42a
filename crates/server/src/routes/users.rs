use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use service::users::{User, UserInput};
use tracing::info;

use crate::errors::{decode_input, parse_id, ApiError};
use crate::state::AppState;

/// List all users
pub async fn list_users(State(state): State<AppState>) -> Json<Vec<User>> {
    Json(state.users.list().await)
}

/// Create a user; the id is assigned by the store
pub async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let input: UserInput = decode_input(&body)?;
    let user = state.users.create(input).await;
    info!(id = user.id, "user created");
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn get_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    Ok(Json(state.users.get(id).await?))
}

/// Replace a user wholesale; any id in the body is ignored
pub async fn update_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Result<Json<User>, ApiError> {
    let id = parse_id(&raw_id)?;
    let input: UserInput = decode_input(&body)?;
    let user = state.users.update(id, input).await?;
    info!(id, "user updated");
    Ok(Json(user))
}

pub async fn delete_user(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = parse_id(&raw_id)?;
    state.users.delete(id).await?;
    info!(id, "user deleted");
    Ok(StatusCode::NO_CONTENT)
}
