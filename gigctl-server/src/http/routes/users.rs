//! User endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::db::repos::UserRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{EntityId, JsonBody};
use crate::http::server::AppState;
use crate::models::{User, UserFields};

/// GET /users - list all users
async fn list_users(State(state): State<Arc<AppState>>) -> Result<Json<Vec<User>>, ApiError> {
    let users = UserRepo::new(&state.pool).list().await?;
    Ok(Json(users))
}

/// POST /users - create a user
///
/// Responds 201 with an empty body; the new id is not echoed back.
async fn create_user(
    State(state): State<Arc<AppState>>,
    JsonBody(fields): JsonBody<UserFields>,
) -> Result<StatusCode, ApiError> {
    UserRepo::new(&state.pool).create(&fields).await?;
    Ok(StatusCode::CREATED)
}

/// GET /users/{id} - get a single user
async fn get_user(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<User>, ApiError> {
    let user = UserRepo::new(&state.pool).get(id).await?;
    Ok(Json(user))
}

/// PUT /users/{id} - replace every field of a user
async fn replace_user(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
    JsonBody(fields): JsonBody<UserFields>,
) -> Result<StatusCode, ApiError> {
    UserRepo::new(&state.pool).replace(id, &fields).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /users/{id} - delete a user
async fn delete_user(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let repo = UserRepo::new(&state.pool);
    repo.get(id).await?;
    repo.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// User routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(replace_user).delete(delete_user),
        )
}
