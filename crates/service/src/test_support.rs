#![cfg(test)]
use sea_orm::DatabaseConnection;

use models::user::NewUser;

/// Fresh in-memory database with the schema applied; one per test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    models::db::connect_sqlite_memory().await
}

pub fn new_user(correo: &str) -> NewUser {
    NewUser {
        nombre: "Ana".into(),
        apellido_paterno: "Pérez".into(),
        apellido_materno: "López".into(),
        correo: correo.into(),
        contrasena: "$2b$04$K1ZzVh7N0x7mZq8m1c3rUe0b6d1f0t7QmJ2b8l5pQx0o3m9y1c2a6".into(),
        id_carrera: None,
        id_division: None,
        cuatrimestre: 1,
        id_rol: 3,
    }
}
