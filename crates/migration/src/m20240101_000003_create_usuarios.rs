//! Create `usuarios`.
//!
//! `correo` is unique and always stored trimmed and lower-cased; major and
//! division references are optional.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Usuarios::Table)
                    .if_not_exists()
                    .col(pk_auto(Usuarios::IdUsuario))
                    .col(string_len(Usuarios::Nombre, 100).not_null())
                    .col(string_len(Usuarios::ApellidoPaterno, 100).not_null())
                    .col(string_len(Usuarios::ApellidoMaterno, 100).not_null())
                    .col(string_len(Usuarios::Correo, 255).unique_key().not_null())
                    .col(string_len(Usuarios::Contrasena, 255).not_null())
                    .col(integer_null(Usuarios::IdCarrera))
                    .col(integer_null(Usuarios::IdDivision))
                    .col(integer(Usuarios::Cuatrimestre).not_null())
                    .col(integer(Usuarios::IdRol).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuarios_carrera")
                            .from(Usuarios::Table, Usuarios::IdCarrera)
                            .to(Carreras::Table, Carreras::IdCarrera)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_usuarios_division")
                            .from(Usuarios::Table, Usuarios::IdDivision)
                            .to(Divisiones::Table, Divisiones::IdDivision)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Usuarios::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Usuarios {
    Table,
    IdUsuario,
    Nombre,
    ApellidoPaterno,
    ApellidoMaterno,
    Correo,
    #[sea_orm(iden = "contraseña")]
    Contrasena,
    IdCarrera,
    IdDivision,
    Cuatrimestre,
    IdRol,
}

#[derive(DeriveIden)]
enum Carreras { Table, IdCarrera }

#[derive(DeriveIden)]
enum Divisiones { Table, IdDivision }
