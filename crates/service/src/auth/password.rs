//! Salted password hashing.
//!
//! New hashes use the configured algorithm; verification looks at the stored
//! hash itself, so bcrypt (`$2a$`/`$2b$`/`$2y$`) and argon2 (`$argon2…`) rows
//! both keep working after the configuration changes.

use argon2::{
    password_hash::{PasswordHasher as _, PasswordVerifier as _, SaltString},
    Argon2, PasswordHash,
};
use rand::rngs::OsRng;

use super::errors::AuthError;

const BCRYPT_MIN_COST: u32 = 4;
const BCRYPT_MAX_COST: u32 = 31;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordAlgorithm {
    Bcrypt { cost: u32 },
    Argon2,
}

impl PasswordAlgorithm {
    pub fn from_config(name: &str, bcrypt_cost: u32) -> Result<Self, AuthError> {
        match name.trim().to_lowercase().as_str() {
            "bcrypt" => {
                if !(BCRYPT_MIN_COST..=BCRYPT_MAX_COST).contains(&bcrypt_cost) {
                    return Err(AuthError::Validation(format!("bcrypt cost {bcrypt_cost} out of range")));
                }
                Ok(Self::Bcrypt { cost: bcrypt_cost })
            }
            "argon2" => Ok(Self::Argon2),
            other => Err(AuthError::Validation(format!("unsupported password algorithm: {other}"))),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bcrypt { .. } => "bcrypt",
            Self::Argon2 => "argon2",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    algorithm: PasswordAlgorithm,
}

impl PasswordHasher {
    pub fn new(algorithm: PasswordAlgorithm) -> Self { Self { algorithm } }

    pub fn hash(&self, password: &str) -> Result<String, AuthError> {
        match self.algorithm {
            PasswordAlgorithm::Bcrypt { cost } => {
                bcrypt::hash(password, cost).map_err(|e| AuthError::HashError(e.to_string()))
            }
            PasswordAlgorithm::Argon2 => {
                let salt = SaltString::generate(&mut OsRng);
                Argon2::default()
                    .hash_password(password.as_bytes(), &salt)
                    .map(|h| h.to_string())
                    .map_err(|e| AuthError::HashError(e.to_string()))
            }
        }
    }

    /// `Ok(false)` on mismatch; `Err` only when the stored hash is unusable.
    pub fn verify(password: &str, stored: &str) -> Result<bool, AuthError> {
        if stored.starts_with("$argon2") {
            let parsed = PasswordHash::new(stored).map_err(|e| AuthError::HashError(e.to_string()))?;
            return Ok(Argon2::default().verify_password(password.as_bytes(), &parsed).is_ok());
        }
        if stored.starts_with("$2") {
            return bcrypt::verify(password, stored).map_err(|e| AuthError::HashError(e.to_string()));
        }
        Err(AuthError::HashError("unrecognized password hash format".into()))
    }

    /// [`hash`](Self::hash) on the blocking pool.
    pub async fn hash_blocking(self, password: String) -> Result<String, AuthError> {
        tokio::task::spawn_blocking(move || self.hash(&password))
            .await
            .map_err(|e| AuthError::HashError(e.to_string()))?
    }

    /// [`verify`](Self::verify) on the blocking pool.
    pub async fn verify_blocking(password: String, stored: String) -> Result<bool, AuthError> {
        tokio::task::spawn_blocking(move || Self::verify(&password, &stored))
            .await
            .map_err(|e| AuthError::HashError(e.to_string()))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bcrypt_fast() -> PasswordHasher {
        PasswordHasher::new(PasswordAlgorithm::Bcrypt { cost: 4 })
    }

    #[test]
    fn bcrypt_hash_is_salted_and_verifies() {
        let h = bcrypt_fast();
        let a = h.hash("x").unwrap();
        let b = h.hash("x").unwrap();
        assert!(a.starts_with("$2b$04$"));
        assert_ne!(a, b);
        assert!(PasswordHasher::verify("x", &a).unwrap());
        assert!(!PasswordHasher::verify("y", &a).unwrap());
    }

    #[test]
    fn argon2_hash_verifies() {
        let h = PasswordHasher::new(PasswordAlgorithm::Argon2);
        let stored = h.hash("S3cret!").unwrap();
        assert!(stored.starts_with("$argon2"));
        assert!(PasswordHasher::verify("S3cret!", &stored).unwrap());
        assert!(!PasswordHasher::verify("s3cret!", &stored).unwrap());
    }

    #[test]
    fn verifies_hashes_from_either_algorithm() {
        let old = bcrypt_fast().hash("same").unwrap();
        let new = PasswordHasher::new(PasswordAlgorithm::Argon2).hash("same").unwrap();
        assert!(PasswordHasher::verify("same", &old).unwrap());
        assert!(PasswordHasher::verify("same", &new).unwrap());
    }

    #[test]
    fn unknown_hash_format_is_an_error_not_a_mismatch() {
        assert!(matches!(PasswordHasher::verify("x", "plaintext"), Err(AuthError::HashError(_))));
    }

    #[test]
    fn algorithm_from_config() {
        assert_eq!(PasswordAlgorithm::from_config("bcrypt", 10).unwrap(), PasswordAlgorithm::Bcrypt { cost: 10 });
        assert_eq!(PasswordAlgorithm::from_config("Argon2", 10).unwrap().name(), "argon2");
        assert!(PasswordAlgorithm::from_config("bcrypt", 2).is_err());
        assert!(PasswordAlgorithm::from_config("sha1", 10).is_err());
    }

    #[tokio::test]
    async fn blocking_variants_agree() {
        let stored = bcrypt_fast().hash_blocking("pw".into()).await.unwrap();
        assert!(PasswordHasher::verify_blocking("pw".into(), stored).await.unwrap());
    }
}
