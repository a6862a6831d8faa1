use models::errors::ModelError;
use thiserror::Error;

/// Business errors for auth workflows
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("invalid email format")]
    InvalidEmail,
    #[error("email already registered")]
    DuplicateEmail,
    #[error("user not found")]
    UserNotFound,
    #[error("enrollment pending approval")]
    PendingApproval,
    #[error("wrong password")]
    WrongPassword,
    #[error("invalid token: {0}")]
    InvalidToken(String),
    #[error("hashing error: {0}")]
    HashError(String),
    #[error("token error: {0}")]
    TokenError(String),
    #[error("repository error: {0}")]
    Repository(String),
}

impl AuthError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            AuthError::Validation(_) => 1001,
            AuthError::InvalidEmail => 1002,
            AuthError::DuplicateEmail => 1003,
            AuthError::UserNotFound => 1004,
            AuthError::PendingApproval => 1005,
            AuthError::WrongPassword => 1006,
            AuthError::InvalidToken(_) => 1007,
            AuthError::HashError(_) => 1101,
            AuthError::TokenError(_) => 1102,
            AuthError::Repository(_) => 1200,
        }
    }

    /// Failures caused by the caller rather than by the server.
    pub fn is_client_error(&self) -> bool { self.code() < 1100 }
}

impl From<ModelError> for AuthError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Duplicate(_) => AuthError::DuplicateEmail,
            ModelError::Validation(msg) => AuthError::Validation(msg),
            ModelError::Db(msg) => AuthError::Repository(msg),
        }
    }
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(e: sea_orm::DbErr) -> Self { AuthError::Repository(e.to_string()) }
}
