use serde::{Deserialize, Serialize};

/// Academic division as listed to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Division {
    #[serde(rename = "id_division")]
    pub id: i32,
    pub siglas: String,
    #[serde(rename = "nombre_division")]
    pub name: String,
}

impl From<models::division::Model> for Division {
    fn from(m: models::division::Model) -> Self {
        Self { id: m.id_division, siglas: m.siglas, name: m.nombre_division }
    }
}

/// Major offered by a division. The owning division id is implied by the query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Major {
    #[serde(rename = "id_carrera")]
    pub id: i32,
    #[serde(rename = "nombre_carrera")]
    pub name: String,
}

impl From<models::major::Model> for Major {
    fn from(m: models::major::Model) -> Self {
        Self { id: m.id_carrera, name: m.nombre_carrera }
    }
}
