use once_cell::sync::Lazy;
use regex::Regex;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, Set, SqlErr};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{division, enrollment, major};

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "usuarios")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_usuario: i32,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    #[sea_orm(unique)]
    pub correo: String,
    #[sea_orm(column_name = "contraseña")]
    #[serde(skip_serializing)]
    pub contrasena: String,
    pub id_carrera: Option<i32>,
    pub id_division: Option<i32>,
    pub cuatrimestre: i32,
    pub id_rol: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Major,
    Division,
    Enrollments,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Major => Entity::belongs_to(major::Entity)
                .from(Column::IdCarrera)
                .to(major::Column::IdCarrera)
                .into(),
            Relation::Division => Entity::belongs_to(division::Entity)
                .from(Column::IdDivision)
                .to(division::Column::IdDivision)
                .into(),
            Relation::Enrollments => Entity::has_many(enrollment::Entity).into(),
        }
    }
}

impl Related<enrollment::Entity> for Entity {
    fn to() -> RelationDef { Relation::Enrollments.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Column values for a new `usuarios` row. `correo` must already be
/// normalized and `contrasena` already hashed.
#[derive(Clone)]
pub struct NewUser {
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub correo: String,
    pub contrasena: String,
    pub id_carrera: Option<i32>,
    pub id_division: Option<i32>,
    pub cuatrimestre: i32,
    pub id_rol: i32,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("correo", &self.correo)
            .field("id_carrera", &self.id_carrera)
            .field("id_division", &self.id_division)
            .field("cuatrimestre", &self.cuatrimestre)
            .field("id_rol", &self.id_rol)
            .finish_non_exhaustive()
    }
}

/// Trim and lower-case an email; the stored form of every `correo`.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Syntactic `local@domain.tld` check on an already normalized email.
pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    if EMAIL_RE.is_match(email) {
        Ok(())
    } else {
        Err(errors::ModelError::Validation("invalid email".into()))
    }
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() {
        return Err(errors::ModelError::Validation("name required".into()));
    }
    Ok(())
}

pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, errors::ModelError> {
    Entity::find()
        .filter(Column::Correo.eq(email))
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// User row left-joined with its enrollment (if any).
pub async fn find_with_enrollment<C: ConnectionTrait>(
    db: &C,
    email: &str,
) -> Result<Option<(Model, Option<enrollment::Model>)>, errors::ModelError> {
    Entity::find()
        .filter(Column::Correo.eq(email))
        .find_also_related(enrollment::Entity)
        .one(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Insert a user. A unique-key violation on `correo` surfaces as
/// [`errors::ModelError::Duplicate`].
pub async fn create<C: ConnectionTrait>(db: &C, new: NewUser) -> Result<Model, errors::ModelError> {
    validate_email(&new.correo)?;
    validate_name(&new.nombre)?;
    if new.contrasena.trim().is_empty() {
        return Err(errors::ModelError::Validation("password hash required".into()));
    }
    let am = ActiveModel {
        nombre: Set(new.nombre.trim().to_string()),
        apellido_paterno: Set(new.apellido_paterno.trim().to_string()),
        apellido_materno: Set(new.apellido_materno.trim().to_string()),
        correo: Set(new.correo),
        contrasena: Set(new.contrasena),
        id_carrera: Set(new.id_carrera),
        id_division: Set(new.id_division),
        cuatrimestre: Set(new.cuatrimestre),
        id_rol: Set(new.id_rol),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => errors::ModelError::Duplicate(msg),
        _ => errors::ModelError::Db(e.to_string()),
    })
}
