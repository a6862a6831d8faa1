use sea_orm::{entity::prelude::*, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, major};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "divisiones")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id_division: i32,
    pub siglas: String,
    pub nombre_division: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Majors,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::Majors => Entity::has_many(major::Entity).into() }
    }
}

impl Related<major::Entity> for Entity {
    fn to() -> RelationDef { Relation::Majors.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a division. Catalog rows are normally seeded out of band; this is
/// used by fixtures and tooling.
pub async fn create(db: &DatabaseConnection, siglas: &str, nombre: &str) -> Result<Model, errors::ModelError> {
    if siglas.trim().is_empty() { return Err(errors::ModelError::Validation("siglas required".into())); }
    if nombre.trim().is_empty() { return Err(errors::ModelError::Validation("nombre_division required".into())); }
    let am = ActiveModel {
        siglas: Set(siglas.trim().to_string()),
        nombre_division: Set(nombre.trim().to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
