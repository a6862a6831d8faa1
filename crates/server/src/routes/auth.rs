use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use common::types::Message;
use service::auth::domain::{AuthUser, LoginInput, RegisterInput};
use service::auth::token::Claims;

use crate::errors::JsonApiError;
use crate::extract::ApiJson;
use crate::state::ServerState;

/// Public view of a user as returned by login and `/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UsuarioResponse {
    pub id: i32,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub correo: String,
    pub rol: i32,
}

impl From<AuthUser> for UsuarioResponse {
    fn from(u: AuthUser) -> Self {
        Self {
            id: u.id,
            nombre: u.first_name,
            apellido_paterno: u.paternal_surname,
            apellido_materno: u.maternal_surname,
            correo: u.email,
            rol: u.role_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub message: String,
    pub usuario: UsuarioResponse,
    pub token: String,
}

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = crate::openapi::RegisterRequest,
    responses(
        (status = 200, description = "Registered, enrollment pending", body = crate::openapi::MessageResponse),
        (status = 400, description = "Invalid or duplicate email", body = crate::openapi::ErrorResponse),
        (status = 500, description = "Server error", body = crate::openapi::ErrorResponse)
    )
)]
#[instrument(skip(state, input))]
pub async fn register(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<RegisterInput>,
) -> Result<Json<Message>, JsonApiError> {
    state
        .auth
        .register(input)
        .await
        .map_err(|e| JsonApiError::from_auth(e, &state.errors))?;
    Ok(Json(Message::new("Registro exitoso")))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = crate::openapi::LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Wrong password", body = crate::openapi::ErrorResponse),
        (status = 403, description = "Enrollment not approved", body = crate::openapi::ErrorResponse),
        (status = 404, description = "Unknown user", body = crate::openapi::ErrorResponse)
    )
)]
#[instrument(skip(state, input))]
pub async fn login(
    State(state): State<ServerState>,
    ApiJson(input): ApiJson<LoginInput>,
) -> Result<Json<LoginResponse>, JsonApiError> {
    let session = state
        .auth
        .login(input)
        .await
        .map_err(|e| JsonApiError::from_auth(e, &state.errors))?;
    Ok(Json(LoginResponse {
        message: "Login exitoso".into(),
        usuario: session.user.into(),
        token: session.token,
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Current user", body = UsuarioResponse),
        (status = 401, description = "Missing or invalid token", body = crate::openapi::ErrorResponse),
        (status = 404, description = "User no longer exists", body = crate::openapi::ErrorResponse)
    )
)]
pub async fn me(
    State(state): State<ServerState>,
    Extension(claims): Extension<Claims>,
) -> Result<Json<UsuarioResponse>, JsonApiError> {
    let user = state
        .auth
        .current_user(&claims)
        .await
        .map_err(|e| JsonApiError::from_auth(e, &state.errors))?;
    Ok(Json(user.into()))
}
