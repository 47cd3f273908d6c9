use serde::Deserialize;

use business::domain::product::model::Product;
use business::domain::product::value_objects::{ProductId, Rating};

/// Product as served by the catalog API. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: i64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub image: String,
    pub rating: Option<RatingEntity>,
}

#[derive(Debug, Deserialize)]
pub struct RatingEntity {
    pub rate: f64,
    pub count: u32,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            ProductId::new(self.id),
            self.title,
            self.price,
            self.description,
            self.category,
            self.image,
            self.rating.map(|r| Rating {
                rate: r.rate,
                count: r.count,
            }),
        )
    }
}
