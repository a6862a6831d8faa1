//! Create `inscripciones`, one row per user written at registration time.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inscripciones::Table)
                    .if_not_exists()
                    .col(pk_auto(Inscripciones::IdInscripcion))
                    .col(integer(Inscripciones::IdUsuario).not_null())
                    .col(date(Inscripciones::FechaInscripcion).not_null())
                    .col(string_len(Inscripciones::Estatus, 32).not_null())
                    .col(string_len(Inscripciones::Prioridad, 32).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inscripciones_usuario")
                            .from(Inscripciones::Table, Inscripciones::IdUsuario)
                            .to(Usuarios::Table, Usuarios::IdUsuario)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inscripciones::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Inscripciones {
    Table,
    IdInscripcion,
    IdUsuario,
    FechaInscripcion,
    Estatus,
    Prioridad,
}

#[derive(DeriveIden)]
enum Usuarios { Table, IdUsuario }
