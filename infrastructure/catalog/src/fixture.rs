use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use business::domain::catalog::model::{Producer, Product};

use crate::producer::entity::ProducerEntity;
use crate::product::entity::ProductEntity;

/// Mock catalog shipped with the app.
pub const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CatalogFixtureError {
    #[error("catalog.malformed")]
    Malformed,
    #[error("catalog.invalid_price")]
    InvalidPrice(u32),
    #[error("catalog.duplicated_id")]
    DuplicatedId(u32),
    #[error("catalog.unknown_producer")]
    UnknownProducer(u32),
}

#[derive(Debug, Deserialize)]
struct CatalogFixture {
    producers: Vec<ProducerEntity>,
    products: Vec<ProductEntity>,
}

/// Parses a catalog document into domain lists, keeping document order.
///
/// Ids must be unique per list and every product must point at a listed
/// producer.
pub fn parse_catalog(json: &str) -> Result<(Vec<Producer>, Vec<Product>), CatalogFixtureError> {
    let fixture: CatalogFixture =
        serde_json::from_str(json).map_err(|_| CatalogFixtureError::Malformed)?;

    let mut producer_ids = HashSet::new();
    let mut producers = Vec::with_capacity(fixture.producers.len());
    for entity in fixture.producers {
        if !producer_ids.insert(entity.id) {
            return Err(CatalogFixtureError::DuplicatedId(entity.id));
        }
        producers.push(entity.into_domain());
    }

    let mut product_ids = HashSet::new();
    let mut products = Vec::with_capacity(fixture.products.len());
    for entity in fixture.products {
        if !product_ids.insert(entity.id) {
            return Err(CatalogFixtureError::DuplicatedId(entity.id));
        }
        if !producer_ids.contains(&entity.producer_id) {
            return Err(CatalogFixtureError::UnknownProducer(entity.producer_id));
        }
        products.push(entity.into_domain()?);
    }

    Ok((producers, products))
}
