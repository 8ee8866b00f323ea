use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Serialize, ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub password: String,
    pub email: String,
    pub phone_number: String,
    pub age: i32,
    pub address: String,
    pub role: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginRequest { pub email: String, pub password: String }

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDtoDoc {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub age: i32,
    pub address: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::auth::probe,
        crate::routes::auth::register,
        crate::routes::auth::login,
        crate::routes::users::list,
    ),
    components(schemas(HealthResponse, RegisterRequest, LoginRequest, UserDtoDoc)),
    tags((name = "health"), (name = "auth"), (name = "user"))
)]
pub struct ApiDoc;
