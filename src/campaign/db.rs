use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::MongoCampaignStore;
use crate::error::Error;
use crate::profile::ProfileId;

use super::{Campaign, CampaignId};

#[async_trait]
pub trait CampaignStore: Send + Sync {
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error>;

    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error>;

    async fn fetch_campaign_by_id(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Option<Campaign>, Error>;

    async fn fetch_campaigns_by_profile(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Vec<Campaign>, Error>;

    async fn assert_campaign_exists(&self, campaign_id: &CampaignId) -> Result<Campaign, Error> {
        self.fetch_campaign_by_id(campaign_id)
            .await?
            .ok_or_else(|| Error::CampaignDoesNotExist {
                campaign_id: campaign_id.clone(),
            })
    }
}

#[async_trait]
impl CampaignStore for MongoCampaignStore {
    #[tracing::instrument(skip(self))]
    async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
        self.insert_one(campaign, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
        let campaigns: Vec<Campaign> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(campaigns)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaign_by_id(
        &self,
        campaign_id: &CampaignId,
    ) -> Result<Option<Campaign>, Error> {
        let campaign = self
            .find_one(bson::doc! { "_id": campaign_id }, None)
            .await?;

        Ok(campaign)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_campaigns_by_profile(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Vec<Campaign>, Error> {
        let campaigns: Vec<Campaign> = self
            .find(bson::doc! { "profile_id": profile_id }, None)
            .await?
            .try_collect()
            .await?;

        Ok(campaigns)
    }
}
