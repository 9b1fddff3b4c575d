use serde::Deserialize;

use business::domain::catalog::model::Producer;
use business::domain::shared::value_objects::ProducerId;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProducerEntity {
    pub id: u32,
    pub name: String,
    pub specialty: String,
    pub rating: f32,
    pub distance: String,
    pub delivery_time: String,
    pub image: String,
    pub category: String,
}

impl ProducerEntity {
    pub fn into_domain(self) -> Producer {
        Producer {
            id: ProducerId::new(self.id),
            name: self.name,
            specialty: self.specialty,
            rating: self.rating,
            distance: self.distance,
            delivery_time: self.delivery_time,
            image: self.image,
            category: self.category,
        }
    }
}
