use sea_orm::{entity::prelude::*, sea_query::Expr, ConnectionTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, user};

pub const PRIORITY_NORMAL: &str = "normal";

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "inscripciones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_inscripcion: i32,
    pub id_usuario: i32,
    pub fecha_inscripcion: Date,
    pub estatus: String,
    pub prioridad: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    User,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::IdUsuario)
                .to(user::Column::IdUsuario)
                .into(),
        }
    }
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef { Relation::User.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Admission state of an enrollment. Values written by other tools that this
/// service does not know are kept verbatim and never count as approved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnrollmentStatus {
    Pending,
    Approved,
    Rejected,
    Other(String),
}

impl EnrollmentStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Other(s) => s,
        }
    }

    pub fn is_approved(&self) -> bool { matches!(self, Self::Approved) }
}

impl From<&str> for EnrollmentStatus {
    fn from(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "pending" => Self::Pending,
            "approved" => Self::Approved,
            "rejected" => Self::Rejected,
            _ => Self::Other(raw.to_string()),
        }
    }
}

impl std::fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Model {
    pub fn status(&self) -> EnrollmentStatus { EnrollmentStatus::from(self.estatus.as_str()) }
}

/// Insert the `pending`/`normal` enrollment written alongside a new user.
pub async fn create_pending<C: ConnectionTrait>(db: &C, id_usuario: i32, fecha: Date) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id_usuario: Set(id_usuario),
        fecha_inscripcion: Set(fecha),
        estatus: Set(EnrollmentStatus::Pending.as_str().to_string()),
        prioridad: Set(PRIORITY_NORMAL.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite the status of every enrollment of a user; returns rows touched.
pub async fn set_status<C: ConnectionTrait>(db: &C, id_usuario: i32, status: &EnrollmentStatus) -> Result<u64, errors::ModelError> {
    let res = Entity::update_many()
        .col_expr(Column::Estatus, Expr::value(status.as_str()))
        .filter(Column::IdUsuario.eq(id_usuario))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trips_known_values() {
        assert_eq!(EnrollmentStatus::from("approved"), EnrollmentStatus::Approved);
        assert_eq!(EnrollmentStatus::from(" Pending "), EnrollmentStatus::Pending);
        assert!(EnrollmentStatus::from("APPROVED").is_approved());
    }

    #[test]
    fn unknown_status_is_preserved_and_not_approved() {
        let s = EnrollmentStatus::from("en_revision");
        assert_eq!(s.as_str(), "en_revision");
        assert!(!s.is_approved());
    }
}
