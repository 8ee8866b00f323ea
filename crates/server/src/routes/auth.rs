use std::sync::Arc;

use axum::{extract::State, Json};

use models::user::{UserDto, UserRecord};
use service::auth::{AuthConfig, AuthService, LoginInput, RegisterInput};
use service::mapper::{Mapper, UserMapper};
use service::storage::UserStore;

#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService<dyn UserStore>>,
    pub users: Arc<dyn UserStore>,
    pub mapper: Arc<dyn Mapper<UserRecord, UserDto>>,
}

impl ServerState {
    pub fn new(users: Arc<dyn UserStore>, cfg: AuthConfig) -> Self {
        let auth = Arc::new(AuthService::new(Arc::clone(&users), cfg));
        Self { auth, users, mapper: Arc::new(UserMapper) }
    }
}

/// Answers with a fixed string; kept for clients probing the auth controller.
#[utoipa::path(get, path = "/auth", tag = "auth", responses((status = 200, description = "Always \"Auth\"", body = String)))]
pub async fn probe() -> &'static str {
    "Auth"
}

// Every rejection reason collapses to `false`; the reason is only logged.
#[utoipa::path(post, path = "/auth/register", tag = "auth", request_body = crate::openapi::RegisterRequest, responses((status = 200, description = "true when registered, false otherwise", body = bool)))]
pub async fn register(State(state): State<ServerState>, Json(input): Json<RegisterInput>) -> Json<bool> {
    Json(state.auth.register(input).await)
}

#[utoipa::path(post, path = "/auth/login", tag = "auth", request_body = crate::openapi::LoginRequest, responses((status = 200, description = "\"Login success\" or \"Login failed\"", body = String)))]
pub async fn login(State(state): State<ServerState>, Json(input): Json<LoginInput>) -> &'static str {
    state.auth.login(input).await.as_str()
}
