use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::ProducerId;

use super::model::{Producer, Product};

/// Read-only access to the producer and product catalogs.
///
/// Every list comes back in catalog order; search results rely on it.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    async fn get_producers(&self) -> Result<Vec<Producer>, RepositoryError>;
    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_producer_by_id(&self, id: ProducerId) -> Result<Producer, RepositoryError>;
    async fn get_products_by_producer(
        &self,
        producer_id: ProducerId,
    ) -> Result<Vec<Product>, RepositoryError>;
}
