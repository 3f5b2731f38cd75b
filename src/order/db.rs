use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{self, Bson, Document};

use crate::campaign::CampaignId;
use crate::database::MongoOrderStore;
use crate::error::Error;

use super::{sanitize, Order, OrderId};

#[async_trait]
pub trait OrderStore: Send + Sync {
    async fn insert_order(&self, order: &Order) -> Result<(), Error>;

    async fn fetch_orders_by_campaign(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<Order>, Error>;

    async fn fetch_order_by_campaign_and_id(
        &self,
        campaign_id: &CampaignId,
        order_id: &OrderId,
    ) -> Result<Option<Order>, Error>;
}

#[async_trait]
impl OrderStore for MongoOrderStore {
    #[tracing::instrument(skip(self))]
    async fn insert_order(&self, order: &Order) -> Result<(), Error> {
        let mut document = bson::to_document(order)?;
        if let Some(Bson::Array(line_items)) = document.get_mut("line_items") {
            for line_item in line_items {
                if let Bson::Document(line_item) = line_item {
                    sanitize::sanitize_line_item(line_item);
                }
            }
        }

        self.clone_with_type::<Document>()
            .insert_one(document, None)
            .await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_orders_by_campaign(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Vec<Order>, Error> {
        let orders: Vec<Order> = self
            .find(bson::doc! { "campaign_id": campaign_id }, None)
            .await?
            .try_collect()
            .await?;

        Ok(orders)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_order_by_campaign_and_id(
        &self,
        campaign_id: &CampaignId,
        order_id: &OrderId,
    ) -> Result<Option<Order>, Error> {
        let order = self
            .find_one(
                bson::doc! { "_id": order_id, "campaign_id": campaign_id },
                None,
            )
            .await?;

        Ok(order)
    }
}
