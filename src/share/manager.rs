use chrono::Utc;

use crate::campaign::CampaignId;
use crate::database::Database;
use crate::error::Error;

use super::{SharedCampaign, SharedCampaignId};

#[tracing::instrument(skip(db))]
pub async fn share_campaign(
    db: &dyn Database,
    campaign_id: &CampaignId,
) -> Result<SharedCampaign, Error> {
    let campaign = db.campaigns().assert_campaign_exists(campaign_id).await?;

    let shared_campaign = SharedCampaign {
        id: SharedCampaignId::new(),
        campaign_id: campaign.id,
        catalog_id: campaign.catalog_id,
        name: campaign.name,
        season: campaign.season,
        goal_amount: campaign.goal_amount,
        created_by: campaign.profile_id,
        created_at: Utc::now(),
    };

    db.shared_campaigns()
        .insert_shared_campaign(&shared_campaign)
        .await?;

    Ok(shared_campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_shared_campaigns(db: &dyn Database) -> Result<Vec<SharedCampaign>, Error> {
    let shared_campaigns = db.shared_campaigns().fetch_shared_campaigns().await?;

    Ok(shared_campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_shared_campaign_by_id(
    db: &dyn Database,
    shared_campaign_id: &SharedCampaignId,
) -> Result<SharedCampaign, Error> {
    let shared_campaign = db
        .shared_campaigns()
        .assert_shared_campaign_exists(shared_campaign_id)
        .await?;

    Ok(shared_campaign)
}
