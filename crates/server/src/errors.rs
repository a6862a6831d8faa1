use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use service::auth::errors::AuthError;
use service::errors::ServiceError;
use tracing::{debug, error};

use crate::state::ErrorPolicy;

pub const MSG_INVALID_EMAIL: &str = "Correo electrónico inválido";
pub const MSG_DUPLICATE_EMAIL: &str = "El correo ya está registrado";
pub const MSG_USER_NOT_FOUND: &str = "Usuario no encontrado";
pub const MSG_PENDING_APPROVAL: &str = "Tu inscripción aún no ha sido aprobada";
pub const MSG_WRONG_PASSWORD: &str = "Contraseña incorrecta";
pub const MSG_INVALID_TOKEN: &str = "Token inválido o expirado";
pub const MSG_MISSING_TOKEN: &str = "Token requerido";
pub const MSG_INVALID_DATA: &str = "Datos inválidos";
pub const MSG_SERVER_ERROR: &str = "Error en el servidor";

#[derive(Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Error response rendered as `{"message": ..., "error"?: ...}`.
#[derive(Debug)]
pub struct JsonApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

impl JsonApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), detail: None }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Server-side failure: always logged, detail only shown when the policy allows.
    pub fn internal(message: &str, cause: &dyn std::fmt::Display, policy: &ErrorPolicy) -> Self {
        error!(error = %cause, "{message}");
        let err = Self::new(StatusCode::INTERNAL_SERVER_ERROR, message);
        if policy.expose_details { err.with_detail(cause.to_string()) } else { err }
    }

    /// Request the handler could not even decode (body or path).
    pub fn invalid_input(cause: impl Into<String>, policy: &ErrorPolicy) -> Self {
        let cause = cause.into();
        debug!(error = %cause, "request rejected");
        let err = Self::new(StatusCode::BAD_REQUEST, MSG_INVALID_DATA);
        if policy.expose_details { err.with_detail(cause) } else { err }
    }

    pub fn from_auth(err: AuthError, policy: &ErrorPolicy) -> Self {
        if err.is_client_error() {
            debug!(code = err.code(), error = %err, "auth request refused");
        }
        match err {
            AuthError::InvalidEmail => Self::new(StatusCode::BAD_REQUEST, MSG_INVALID_EMAIL),
            AuthError::DuplicateEmail => Self::new(policy.duplicate_email_status, MSG_DUPLICATE_EMAIL),
            AuthError::UserNotFound => Self::new(StatusCode::NOT_FOUND, MSG_USER_NOT_FOUND),
            AuthError::PendingApproval => Self::new(StatusCode::FORBIDDEN, MSG_PENDING_APPROVAL),
            AuthError::WrongPassword => Self::new(StatusCode::UNAUTHORIZED, MSG_WRONG_PASSWORD),
            AuthError::InvalidToken(_) => Self::new(StatusCode::UNAUTHORIZED, MSG_INVALID_TOKEN),
            AuthError::Validation(msg) => {
                let err = Self::new(StatusCode::BAD_REQUEST, MSG_INVALID_DATA);
                if policy.expose_details { err.with_detail(msg) } else { err }
            }
            other => Self::internal(MSG_SERVER_ERROR, &other, policy),
        }
    }

    pub fn from_service(err: ServiceError, message: &str, policy: &ErrorPolicy) -> Self {
        Self::internal(message, &err, policy)
    }
}

impl IntoResponse for JsonApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { message: self.message, error: self.detail };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dev() -> ErrorPolicy { ErrorPolicy { expose_details: true, ..Default::default() } }

    #[test]
    fn auth_errors_map_to_statuses() {
        let p = ErrorPolicy::default();
        let cases = [
            (AuthError::InvalidEmail, StatusCode::BAD_REQUEST),
            (AuthError::DuplicateEmail, StatusCode::BAD_REQUEST),
            (AuthError::UserNotFound, StatusCode::NOT_FOUND),
            (AuthError::PendingApproval, StatusCode::FORBIDDEN),
            (AuthError::WrongPassword, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidToken("exp".into()), StatusCode::UNAUTHORIZED),
            (AuthError::Repository("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AuthError::HashError("bad".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(JsonApiError::from_auth(err, &p).status, status);
        }
    }

    #[test]
    fn duplicate_status_follows_policy() {
        let p = ErrorPolicy { duplicate_email_status: StatusCode::CONFLICT, ..Default::default() };
        let e = JsonApiError::from_auth(AuthError::DuplicateEmail, &p);
        assert_eq!(e.status, StatusCode::CONFLICT);
        assert_eq!(e.message, MSG_DUPLICATE_EMAIL);
    }

    #[test]
    fn detail_only_in_development() {
        let prod = JsonApiError::from_auth(AuthError::Repository("db down".into()), &ErrorPolicy::default());
        assert!(prod.detail.is_none());
        let dev = JsonApiError::from_auth(AuthError::Repository("db down".into()), &dev());
        assert_eq!(dev.message, MSG_SERVER_ERROR);
        assert!(dev.detail.unwrap().contains("db down"));
    }

    #[test]
    fn invalid_input_is_a_bad_request_with_dev_detail() {
        let prod = JsonApiError::invalid_input("missing field `nombre`", &ErrorPolicy::default());
        assert_eq!(prod.status, StatusCode::BAD_REQUEST);
        assert_eq!(prod.message, MSG_INVALID_DATA);
        assert!(prod.detail.is_none());
        let dev = JsonApiError::invalid_input("missing field `nombre`", &dev());
        assert_eq!(dev.detail.as_deref(), Some("missing field `nombre`"));
    }

    #[test]
    fn body_omits_error_when_absent() {
        let body = ErrorBody { message: "x".into(), error: None };
        assert_eq!(serde_json::to_value(body).unwrap(), serde_json::json!({"message": "x"}));
    }
}
