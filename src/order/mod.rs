use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;
use crate::catalog::{Catalog, ProductId};
use crate::error::Error;
use crate::profile::ProfileId;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub mod sanitize;
pub use endpoints::*;

pub type OrderId = TypedId<Order>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    pub campaign_id: CampaignId,
    pub profile_id: Option<ProfileId>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub order_date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub line_items: Vec<OrderLineItem>,
    pub total_amount: f64,
    pub notes: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub modified_at: DateTime<Utc>,
}

impl TypedIdMarker for Order {
    fn tag() -> &'static str {
        "ORDER"
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OrderLineItem {
    pub product_id: ProductId,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub price_per_unit: f64,
    pub subtotal: f64,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING-KEBAB-CASE")]
pub enum PaymentMethod {
    Cash,
    Check,
    Card,
    Online,
}

/// A line item as submitted by the customer, before pricing.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RequestedLineItem {
    pub product_id: ProductId,
    pub quantity: i32,
}

/// Order-creation input, independent of where the catalog context comes from.
#[derive(Clone, Debug)]
pub struct OrderDraft {
    pub profile_id: Option<ProfileId>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub order_date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub line_items: Vec<RequestedLineItem>,
    pub notes: Option<String>,
}

/// The catalog state an order is assembled against. A campaign or catalog
/// that cannot be resolved is not an error; the order is still recorded,
/// just without enrichment.
#[derive(Clone, Debug)]
pub enum CatalogContext {
    Resolved(Catalog),
    Unresolved,
}

impl CatalogContext {
    /// Prices the requested line items. Quantities are validated in both
    /// variants; product existence and prices only apply when a catalog was
    /// resolved. Totals accumulate in input order.
    pub fn price_line_items(
        &self,
        requested: &[RequestedLineItem],
    ) -> Result<(Vec<OrderLineItem>, f64), Error> {
        for item in requested {
            if item.quantity < 1 {
                return Err(Error::InvalidLineItemQuantity {
                    product_id: item.product_id.clone(),
                    quantity: item.quantity,
                });
            }
        }

        match self {
            CatalogContext::Resolved(catalog) => {
                let mut line_items = Vec::with_capacity(requested.len());
                let mut total_amount = 0.0;
                for item in requested {
                    let product = catalog.find_product(&item.product_id).ok_or_else(|| {
                        Error::ProductDoesNotExistInCatalog {
                            catalog_id: catalog.id.clone(),
                            product_id: item.product_id.clone(),
                        }
                    })?;

                    let subtotal = product.price * f64::from(item.quantity);
                    total_amount += subtotal;
                    line_items.push(OrderLineItem {
                        product_id: item.product_id.clone(),
                        product_name: Some(product.product_name.clone()),
                        quantity: item.quantity,
                        price_per_unit: product.price,
                        subtotal,
                    });
                }

                Ok((line_items, total_amount))
            }
            CatalogContext::Unresolved => {
                let line_items = requested
                    .iter()
                    .map(|item| OrderLineItem {
                        product_id: item.product_id.clone(),
                        product_name: None,
                        quantity: item.quantity,
                        price_per_unit: 0.0,
                        subtotal: 0.0,
                    })
                    .collect();

                Ok((line_items, 0.0))
            }
        }
    }
}
