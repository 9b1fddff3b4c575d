use async_trait::async_trait;

use business::domain::catalog::model::{Producer, Product};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::ProducerId;

use crate::fixture::{BUNDLED_CATALOG, CatalogFixtureError, parse_catalog};

/// Immutable catalog held in memory. Every read hands out clones.
#[derive(Debug, Clone)]
pub struct CatalogRepositoryInMemory {
    producers: Vec<Producer>,
    products: Vec<Product>,
}

impl CatalogRepositoryInMemory {
    pub fn new(producers: Vec<Producer>, products: Vec<Product>) -> Self {
        Self {
            producers,
            products,
        }
    }

    /// Catalog bundled with the app.
    pub fn bundled() -> Result<Self, CatalogFixtureError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogFixtureError> {
        let (producers, products) = parse_catalog(json)?;
        Ok(Self::new(producers, products))
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositoryInMemory {
    async fn get_producers(&self) -> Result<Vec<Producer>, RepositoryError> {
        Ok(self.producers.clone())
    }

    async fn get_products(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_producer_by_id(&self, id: ProducerId) -> Result<Producer, RepositoryError> {
        self.producers
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }

    async fn get_products_by_producer(
        &self,
        producer_id: ProducerId,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .products
            .iter()
            .filter(|p| p.producer_id == producer_id)
            .cloned()
            .collect())
    }
}
