use std::sync::Arc;

use chrono::{Duration, Utc};
use models::user::{self, NewUser};
use tracing::{debug, info, instrument, warn};

use super::domain::{AuthSession, AuthUser, LoginInput, RegisterInput};
use super::errors::AuthError;
use super::password::{PasswordAlgorithm, PasswordHasher};
use super::repository::AuthRepository;
use super::token::{Claims, TokenIssuer};

/// Auth service configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub token_ttl_hours: i64,
    pub password_algorithm: String,
    pub bcrypt_cost: u32,
}

/// Auth business service independent of web framework
pub struct AuthService<R: AuthRepository> {
    repo: Arc<R>,
    hasher: PasswordHasher,
    tokens: TokenIssuer,
}

impl<R: AuthRepository> AuthService<R> {
    pub fn new(repo: Arc<R>, cfg: AuthConfig) -> Result<Self, AuthError> {
        let algorithm = PasswordAlgorithm::from_config(&cfg.password_algorithm, cfg.bcrypt_cost)?;
        let tokens = TokenIssuer::new(&cfg.jwt_secret, Duration::hours(cfg.token_ttl_hours))?;
        info!(
            event = "auth_ready",
            password_algorithm = algorithm.name(),
            token_ttl_hours = cfg.token_ttl_hours,
            "auth service configured"
        );
        Ok(Self { repo, hasher: PasswordHasher::new(algorithm), tokens })
    }

    /// Register a new user with a hashed password and a pending enrollment.
    ///
    /// # Examples
    /// ```
    /// use service::auth::{service::{AuthService, AuthConfig}, repository::mock::MockAuthRepository};
    /// use service::auth::domain::RegisterInput;
    /// use std::sync::Arc;
    /// let repo = Arc::new(MockAuthRepository::default());
    /// let cfg = AuthConfig { jwt_secret: "secret".into(), token_ttl_hours: 8, password_algorithm: "bcrypt".into(), bcrypt_cost: 4 };
    /// let svc = AuthService::new(repo, cfg).unwrap();
    /// let input = RegisterInput {
    ///     first_name: "Ana".into(), paternal_surname: "Pérez".into(), maternal_surname: "López".into(),
    ///     email: " Ana@Example.com".into(), password: "x".into(),
    ///     major_id: None, division_id: None, term: 1, role_id: 3,
    /// };
    /// let user = tokio_test::block_on(svc.register(input)).unwrap();
    /// assert_eq!(user.email, "ana@example.com");
    /// ```
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn register(&self, input: RegisterInput) -> Result<AuthUser, AuthError> {
        let email = user::normalize_email(&input.email);
        if user::validate_email(&email).is_err() {
            debug!(%email, "rejected malformed email");
            return Err(AuthError::InvalidEmail);
        }
        if input.first_name.trim().is_empty() {
            return Err(AuthError::Validation("nombre is required".into()));
        }
        if input.password.is_empty() {
            return Err(AuthError::Validation("password is required".into()));
        }

        let hash = self.hasher.hash_blocking(input.password).await?;
        let new_user = NewUser {
            nombre: input.first_name,
            apellido_paterno: input.paternal_surname,
            apellido_materno: input.maternal_surname,
            correo: email,
            contrasena: hash,
            id_carrera: input.major_id,
            id_division: input.division_id,
            cuatrimestre: input.term,
            id_rol: input.role_id,
        };
        let user = self.repo.register_with_enrollment(new_user, Utc::now().date_naive()).await?;
        info!(event = "user_registered", user_id = user.id, email = %user.email, role_id = user.role_id, "user_registered");
        Ok(user)
    }

    /// Authenticate an approved user and issue a bearer token.
    ///
    /// Order matters: unknown email, then enrollment status, then password.
    /// An unapproved account is refused without looking at the password.
    #[instrument(skip(self, input), fields(email = %input.email))]
    pub async fn login(&self, input: LoginInput) -> Result<AuthSession, AuthError> {
        let email = user::normalize_email(&input.email);
        let Some(record) = self.repo.find_login_record(&email).await? else {
            warn!(event = "login_rejected", reason = "user_not_found", "login rejected");
            return Err(AuthError::UserNotFound);
        };

        let approved = record.enrollment_status.as_ref().is_some_and(|s| s.is_approved());
        if !approved {
            warn!(
                event = "login_rejected",
                reason = "pending_approval",
                user_id = record.user.id,
                status = record.enrollment_status.as_ref().map(|s| s.as_str()).unwrap_or("missing"),
                "login rejected"
            );
            return Err(AuthError::PendingApproval);
        }

        if !PasswordHasher::verify_blocking(input.password, record.password_hash).await? {
            warn!(event = "login_rejected", reason = "wrong_password", user_id = record.user.id, "login rejected");
            return Err(AuthError::WrongPassword);
        }

        let (token, claims) = self.tokens.issue(&record.user)?;
        info!(event = "login_succeeded", user_id = record.user.id, role_id = record.user.role_id, "login_succeeded");
        Ok(AuthSession { user: record.user, token, expires_at: claims.exp })
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens.verify(token)
    }

    /// Re-read the user a verified token refers to.
    pub async fn current_user(&self, claims: &Claims) -> Result<AuthUser, AuthError> {
        let id = claims.user_id()?;
        self.repo.find_user(id).await?.ok_or(AuthError::UserNotFound)
    }
}
