use std::sync::Arc;

use axum::http::StatusCode;
use configs::AppConfig;
use sea_orm::DatabaseConnection;
use service::auth::repo::seaorm::SeaOrmAuthRepository;
use service::auth::service::{AuthConfig, AuthService};
use service::catalog::repository::SeaOrmCatalogRepository;
use service::catalog::CatalogService;

/// How much of a failure is shown to clients.
#[derive(Debug, Clone, Copy)]
pub struct ErrorPolicy {
    /// Attach the internal error text as `error` (development only).
    pub expose_details: bool,
    pub duplicate_email_status: StatusCode,
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        Self { expose_details: false, duplicate_email_status: StatusCode::BAD_REQUEST }
    }
}

/// Shared, immutable request state.
#[derive(Clone)]
pub struct ServerState {
    pub auth: Arc<AuthService<SeaOrmAuthRepository>>,
    pub catalog: Arc<CatalogService<SeaOrmCatalogRepository>>,
    pub errors: ErrorPolicy,
}

impl ServerState {
    pub fn from_config(db: DatabaseConnection, cfg: &AppConfig) -> anyhow::Result<Self> {
        let auth_cfg = AuthConfig {
            jwt_secret: cfg.auth.jwt_secret.clone(),
            token_ttl_hours: cfg.auth.token_ttl_hours,
            password_algorithm: cfg.auth.password_algorithm.clone(),
            bcrypt_cost: cfg.auth.bcrypt_cost,
        };
        let auth = AuthService::new(Arc::new(SeaOrmAuthRepository::new(db.clone())), auth_cfg)
            .map_err(|e| anyhow::anyhow!("auth service: {e}"))?;
        let catalog = CatalogService::new(Arc::new(SeaOrmCatalogRepository::new(db.clone())));
        let duplicate_email_status = StatusCode::from_u16(cfg.auth.duplicate_email_status)
            .map_err(|_| anyhow::anyhow!("invalid duplicate_email_status {}", cfg.auth.duplicate_email_status))?;

        Ok(Self {
            auth: Arc::new(auth),
            catalog: Arc::new(catalog),
            errors: ErrorPolicy {
                expose_details: cfg.app.environment.is_development(),
                duplicate_email_status,
            },
        })
    }
}
