use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::MongoSharedCampaignStore;
use crate::error::Error;

use super::{SharedCampaign, SharedCampaignId};

#[async_trait]
pub trait SharedCampaignStore: Send + Sync {
    async fn insert_shared_campaign(&self, shared_campaign: &SharedCampaign)
        -> Result<(), Error>;

    async fn fetch_shared_campaigns(&self) -> Result<Vec<SharedCampaign>, Error>;

    async fn fetch_shared_campaign_by_id(
        &self,
        shared_campaign_id: &SharedCampaignId,
    ) -> Result<Option<SharedCampaign>, Error>;

    async fn assert_shared_campaign_exists(
        &self,
        shared_campaign_id: &SharedCampaignId,
    ) -> Result<SharedCampaign, Error> {
        self.fetch_shared_campaign_by_id(shared_campaign_id)
            .await?
            .ok_or_else(|| Error::SharedCampaignDoesNotExist {
                shared_campaign_id: shared_campaign_id.clone(),
            })
    }
}

#[async_trait]
impl SharedCampaignStore for MongoSharedCampaignStore {
    #[tracing::instrument(skip(self))]
    async fn insert_shared_campaign(
        &self,
        shared_campaign: &SharedCampaign,
    ) -> Result<(), Error> {
        self.insert_one(shared_campaign, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_shared_campaigns(&self) -> Result<Vec<SharedCampaign>, Error> {
        let shared_campaigns: Vec<SharedCampaign> =
            self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(shared_campaigns)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_shared_campaign_by_id(
        &self,
        shared_campaign_id: &SharedCampaignId,
    ) -> Result<Option<SharedCampaign>, Error> {
        let shared_campaign = self
            .find_one(bson::doc! { "_id": shared_campaign_id }, None)
            .await?;

        Ok(shared_campaign)
    }
}
