//! Create `carreras`; every major belongs to exactly one division.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Carreras::Table)
                    .if_not_exists()
                    .col(pk_auto(Carreras::IdCarrera))
                    .col(string_len(Carreras::NombreCarrera, 160).not_null())
                    .col(integer(Carreras::IdDivision).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_carreras_division")
                            .from(Carreras::Table, Carreras::IdDivision)
                            .to(Divisiones::Table, Divisiones::IdDivision)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Carreras::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Carreras { Table, IdCarrera, NombreCarrera, IdDivision }

#[derive(DeriveIden)]
enum Divisiones { Table, IdDivision }
