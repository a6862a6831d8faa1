//! Migrator registering table migrations in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_divisiones;
mod m20240101_000002_create_carreras;
mod m20240101_000003_create_usuarios;
mod m20240101_000004_create_inscripciones;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_divisiones::Migration),
            Box::new(m20240101_000002_create_carreras::Migration),
            Box::new(m20240101_000003_create_usuarios::Migration),
            Box::new(m20240101_000004_create_inscripciones::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}
