use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Deserialize;

use business::domain::catalog::model::Product;
use business::domain::shared::value_objects::{ProducerId, ProductId};

use crate::fixture::CatalogFixtureError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductEntity {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub unit: String,
    pub image: String,
    pub category: String,
    pub producer_id: u32,
    pub producer_name: String,
    pub description: String,
    /// Decimal kept as a string so no float rounding sneaks into prices.
    pub price_number: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Result<Product, CatalogFixtureError> {
        let unit_price = Decimal::from_str(&self.price_number)
            .map_err(|_| CatalogFixtureError::InvalidPrice(self.id))?;
        if unit_price.is_sign_negative() {
            return Err(CatalogFixtureError::InvalidPrice(self.id));
        }

        Ok(Product {
            id: ProductId::new(self.id),
            name: self.name,
            price: self.price,
            unit: self.unit,
            image: self.image,
            category: self.category,
            producer_id: ProducerId::new(self.producer_id),
            producer_name: self.producer_name,
            description: self.description,
            unit_price,
        })
    }
}
