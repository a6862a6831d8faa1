use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Carreras: lookup by division
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_carreras_division")
                    .table(Carreras::Table)
                    .col(Carreras::IdDivision)
                    .to_owned(),
            )
            .await?;

        // Inscripciones: join from usuarios on login
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_inscripciones_usuario")
                    .table(Inscripciones::Table)
                    .col(Inscripciones::IdUsuario)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_inscripciones_usuario").table(Inscripciones::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_carreras_division").table(Carreras::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum Carreras { Table, IdDivision }

#[derive(DeriveIden)]
enum Inscripciones { Table, IdUsuario }
