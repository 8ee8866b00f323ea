use axum::{extract::State, Json};

use models::user::UserDto;
use service::user_service;

use super::auth::ServerState;

#[utoipa::path(get, path = "/user", tag = "user", responses((status = 200, description = "All users in registration order", body = [crate::openapi::UserDtoDoc])))]
pub async fn list(State(state): State<ServerState>) -> Json<Vec<UserDto>> {
    let users = user_service::list_users(state.users.as_ref(), state.mapper.as_ref()).await;
    Json(users)
}
