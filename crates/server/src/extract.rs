//! Extractors whose rejections are rendered as [`JsonApiError`] bodies
//! instead of axum's plain-text defaults.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// JSON body; malformed, incomplete or wrongly typed bodies become `400 Datos inválidos`.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T> FromRequest<ServerState> for ApiJson<T>
where
    T: DeserializeOwned,
{
    type Rejection = JsonApiError;

    async fn from_request(req: Request, state: &ServerState) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(JsonApiError::invalid_input(rejection.body_text(), &state.errors)),
        }
    }
}

/// Path parameters with the same error shape as [`ApiJson`].
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<T> FromRequestParts<ServerState> for ApiPath<T>
where
    T: DeserializeOwned + Send,
{
    type Rejection = JsonApiError;

    async fn from_request_parts(parts: &mut Parts, state: &ServerState) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(JsonApiError::invalid_input(rejection.body_text(), &state.errors)),
        }
    }
}
