use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::cart::model::NewCartLine;
use crate::domain::shared::value_objects::{ProducerId, ProductId};

/// A local producer listed in the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Producer {
    pub id: ProducerId,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub distance: String,
    pub delivery_time: String,
    pub image: String,
    pub category: String,
}

/// A product sold by a producer.
///
/// `price` is the display string ("£3.50") while `unit_price` carries the
/// amount used for cart arithmetic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: String,
    pub unit: String,
    pub image: String,
    pub category: String,
    pub producer_id: ProducerId,
    pub producer_name: String,
    pub description: String,
    pub unit_price: Decimal,
}

impl Product {
    /// Builds the candidate the producer screen hands to the cart when the
    /// shopper taps "add".
    pub fn to_cart_line(&self) -> NewCartLine {
        NewCartLine {
            id: self.id,
            name: self.name.clone(),
            price: self.price.clone(),
            unit_price: self.unit_price,
            unit: self.unit.clone(),
            image: self.image.clone(),
            producer_id: self.producer_id,
            producer_name: self.producer_name.clone(),
        }
    }
}
