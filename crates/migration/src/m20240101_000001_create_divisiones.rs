//! Create `divisiones`, the top-level academic units.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Divisiones::Table)
                    .if_not_exists()
                    .col(pk_auto(Divisiones::IdDivision))
                    .col(string_len(Divisiones::Siglas, 16).not_null())
                    .col(string_len(Divisiones::NombreDivision, 128).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Divisiones::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Divisiones { Table, IdDivision, Siglas, NombreDivision }
