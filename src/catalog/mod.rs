use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type CatalogId = TypedId<Catalog>;
pub type ProductId = TypedId<Product>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(rename = "_id")]
    pub id: CatalogId,
    pub name: String,
    pub products: Vec<Product>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub modified_at: DateTime<Utc>,
}

impl Catalog {
    pub fn find_product(&self, product_id: &ProductId) -> Option<&Product> {
        self.products
            .iter()
            .find(|product| product.product_id == *product_id)
    }
}

impl TypedIdMarker for Catalog {
    fn tag() -> &'static str {
        "CATALOG"
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Product {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: f64,
}

impl TypedIdMarker for Product {
    fn tag() -> &'static str {
        "PRODUCT"
    }
}

/// A product as submitted on catalog creation, before it is assigned an id.
#[derive(Clone, Debug)]
pub struct ProductDraft {
    pub product_name: String,
    pub price: f64,
}
