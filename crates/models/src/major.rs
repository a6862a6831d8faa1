use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{division, errors};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "carreras")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_carrera: i32,
    pub nombre_carrera: String,
    pub id_division: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Division,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Division => Entity::belongs_to(division::Entity)
                .from(Column::IdDivision)
                .to(division::Column::IdDivision)
                .into(),
        }
    }
}

impl Related<division::Entity> for Entity {
    fn to() -> RelationDef { Relation::Division.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create(db: &DatabaseConnection, id_division: i32, nombre: &str) -> Result<Model, errors::ModelError> {
    if nombre.trim().is_empty() { return Err(errors::ModelError::Validation("nombre_carrera required".into())); }
    let am = ActiveModel {
        nombre_carrera: Set(nombre.trim().to_string()),
        id_division: Set(id_division),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
