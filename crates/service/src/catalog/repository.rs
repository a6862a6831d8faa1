use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use models::{division, major};

use super::domain::{Division, Major};
use crate::errors::ServiceError;

#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn list_divisions(&self) -> Result<Vec<Division>, ServiceError>;
    async fn list_majors(&self, division_id: i32) -> Result<Vec<Major>, ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmCatalogRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCatalogRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl CatalogRepository for SeaOrmCatalogRepository {
    async fn list_divisions(&self) -> Result<Vec<Division>, ServiceError> {
        let rows = division::Entity::find()
            .order_by_asc(division::Column::IdDivision)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Division::from).collect())
    }

    async fn list_majors(&self, division_id: i32) -> Result<Vec<Major>, ServiceError> {
        let rows = major::Entity::find()
            .filter(major::Column::IdDivision.eq(division_id))
            .order_by_asc(major::Column::IdCarrera)
            .all(&self.db)
            .await?;
        Ok(rows.into_iter().map(Major::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn lists_are_ordered_by_id_and_scoped_to_division() -> anyhow::Result<()> {
        let db = get_db().await?;
        let dti = division::create(&db, "DTI", "Tecnologías de la Información").await?;
        let dem = division::create(&db, "DEM", "Económico Administrativa").await?;
        let sw = major::create(&db, dti.id_division, "Desarrollo de Software").await?;
        major::create(&db, dem.id_division, "Contaduría").await?;
        let redes = major::create(&db, dti.id_division, "Redes").await?;

        let repo = SeaOrmCatalogRepository::new(db);
        let divisions = repo.list_divisions().await?;
        assert_eq!(divisions.iter().map(|d| d.siglas.as_str()).collect::<Vec<_>>(), ["DTI", "DEM"]);

        let majors = repo.list_majors(dti.id_division).await?;
        assert_eq!(majors, vec![Major::from(sw), Major::from(redes)]);
        Ok(())
    }

    #[tokio::test]
    async fn division_without_majors_is_empty() -> anyhow::Result<()> {
        let db = get_db().await?;
        let empty = division::create(&db, "DX", "Sin carreras").await?;
        let repo = SeaOrmCatalogRepository::new(db);
        assert!(repo.list_majors(empty.id_division).await?.is_empty());
        assert!(repo.list_majors(404).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn empty_catalog_lists_nothing() -> anyhow::Result<()> {
        let repo = SeaOrmCatalogRepository::new(get_db().await?);
        assert!(repo.list_divisions().await?.is_empty());
        Ok(())
    }
}
