use std::fmt;

use models::enrollment::EnrollmentStatus;
use serde::{Deserialize, Serialize};

/// Registration input, field names as sent by the enrollment frontend.
#[derive(Clone, Serialize, Deserialize)]
pub struct RegisterInput {
    #[serde(rename = "nombre")]
    pub first_name: String,
    #[serde(rename = "apellido_paterno")]
    pub paternal_surname: String,
    /// Not everyone has a second surname; absent means empty.
    #[serde(rename = "apellido_materno", default)]
    pub maternal_surname: String,
    #[serde(rename = "correo")]
    pub email: String,
    pub password: String,
    #[serde(rename = "id_carrera", default)]
    pub major_id: Option<i32>,
    #[serde(rename = "id_division", default)]
    pub division_id: Option<i32>,
    #[serde(rename = "cuatrimestre")]
    pub term: i32,
    #[serde(rename = "id_rol")]
    pub role_id: i32,
}

impl fmt::Debug for RegisterInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisterInput")
            .field("first_name", &self.first_name)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("major_id", &self.major_id)
            .field("division_id", &self.division_id)
            .field("term", &self.term)
            .field("role_id", &self.role_id)
            .finish_non_exhaustive()
    }
}

/// Login input
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginInput {
    #[serde(rename = "correo")]
    pub email: String,
    pub password: String,
}

impl fmt::Debug for LoginInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginInput")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Domain user (business view, no credentials)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: i32,
    pub first_name: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub email: String,
    pub major_id: Option<i32>,
    pub division_id: Option<i32>,
    pub term: i32,
    pub role_id: i32,
}

impl From<models::user::Model> for AuthUser {
    fn from(u: models::user::Model) -> Self {
        Self {
            id: u.id_usuario,
            first_name: u.nombre,
            paternal_surname: u.apellido_paterno,
            maternal_surname: u.apellido_materno,
            email: u.correo,
            major_id: u.id_carrera,
            division_id: u.id_division,
            term: u.cuatrimestre,
            role_id: u.id_rol,
        }
    }
}

/// What login needs to decide: the user, its stored hash and the status of
/// its enrollment (`None` when no enrollment row exists).
#[derive(Clone)]
pub struct LoginRecord {
    pub user: AuthUser,
    pub password_hash: String,
    pub enrollment_status: Option<EnrollmentStatus>,
}

impl fmt::Debug for LoginRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRecord")
            .field("user", &self.user)
            .field("enrollment_status", &self.enrollment_status)
            .finish_non_exhaustive()
    }
}

/// Login result (session)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSession {
    pub user: AuthUser,
    pub token: String,
    /// Unix timestamp (seconds) at which `token` expires.
    pub expires_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_input_uses_wire_names() {
        let raw = serde_json::json!({
            "nombre": "Ana",
            "apellido_paterno": "Pérez",
            "apellido_materno": "López",
            "correo": "A@Test.com",
            "password": "x",
            "id_carrera": 4,
            "cuatrimestre": 1,
            "id_rol": 3
        });
        let input: RegisterInput = serde_json::from_value(raw).unwrap();
        assert_eq!(input.email, "A@Test.com");
        assert_eq!(input.major_id, Some(4));
        assert_eq!(input.division_id, None);
        assert_eq!(input.role_id, 3);
    }

    #[test]
    fn only_maternal_surname_is_optional() {
        let base = serde_json::json!({
            "nombre": "Ana", "apellido_paterno": "Pérez", "correo": "a@test.com",
            "password": "x", "cuatrimestre": 1, "id_rol": 3
        });
        let input: RegisterInput = serde_json::from_value(base.clone()).unwrap();
        assert_eq!(input.maternal_surname, "");

        let mut without_paternal = base;
        without_paternal.as_object_mut().unwrap().remove("apellido_paterno");
        assert!(serde_json::from_value::<RegisterInput>(without_paternal).is_err());
    }

    #[test]
    fn debug_never_prints_passwords() {
        let login = LoginInput { email: "a@test.com".into(), password: "hunter2".into() };
        assert!(!format!("{login:?}").contains("hunter2"));

        let reg: RegisterInput = serde_json::from_value(serde_json::json!({
            "nombre": "Ana", "apellido_paterno": "P", "correo": "a@test.com",
            "password": "hunter2", "cuatrimestre": 1, "id_rol": 3
        }))
        .unwrap();
        assert!(!format!("{reg:?}").contains("hunter2"));
    }
}
