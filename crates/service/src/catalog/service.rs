use std::sync::Arc;

use tracing::{debug, instrument};

use super::domain::{Division, Major};
use super::repository::CatalogRepository;
use crate::errors::ServiceError;

/// Catalog lookups used by the registration form.
pub struct CatalogService<R: CatalogRepository> {
    repo: Arc<R>,
}

impl<R: CatalogRepository> CatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn divisions(&self) -> Result<Vec<Division>, ServiceError> {
        let list = self.repo.list_divisions().await?;
        debug!(count = list.len(), "divisions listed");
        Ok(list)
    }

    /// Majors of one division; unknown ids simply have none.
    #[instrument(skip(self))]
    pub async fn majors(&self, division_id: i32) -> Result<Vec<Major>, ServiceError> {
        let list = self.repo.list_majors(division_id).await?;
        debug!(count = list.len(), "majors listed");
        Ok(list)
    }
}
