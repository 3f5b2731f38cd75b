use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;
use crate::catalog::CatalogId;
use crate::database::Database;
use crate::error::Error;
use crate::profile::ProfileId;

use super::{manager, SharedCampaign, SharedCampaignId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SharedCampaignBody {
    pub id: SharedCampaignId,
    pub campaign_id: CampaignId,
    pub catalog_id: CatalogId,
    pub name: String,
    pub season: Option<String>,
    pub goal_amount: Option<f64>,
    pub created_by: ProfileId,
    pub created_at: DateTime<Utc>,
}

impl SharedCampaignBody {
    pub fn render(shared_campaign: SharedCampaign) -> SharedCampaignBody {
        SharedCampaignBody {
            id: shared_campaign.id,
            campaign_id: shared_campaign.campaign_id,
            catalog_id: shared_campaign.catalog_id,
            name: shared_campaign.name,
            season: shared_campaign.season,
            goal_amount: shared_campaign.goal_amount,
            created_by: shared_campaign.created_by,
            created_at: shared_campaign.created_at,
        }
    }
}

#[post("/campaigns/{campaign_id}/share")]
#[tracing::instrument(skip(db))]
async fn share_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<SharedCampaignBody>, Error> {
    let campaign_id = params.into_inner();

    let shared_campaign = manager::share_campaign(&***db, &campaign_id).await?;

    Ok(Json(SharedCampaignBody::render(shared_campaign)))
}

#[get("/shares")]
#[tracing::instrument(skip(db))]
async fn get_shared_campaigns(
    db: Data<Box<dyn Database>>,
) -> Result<Json<Vec<SharedCampaignBody>>, Error> {
    let shared_campaigns = manager::get_shared_campaigns(&***db).await?;

    Ok(Json(
        shared_campaigns
            .into_iter()
            .map(SharedCampaignBody::render)
            .collect(),
    ))
}

#[get("/shares/{shared_campaign_id}")]
#[tracing::instrument(skip(db))]
async fn get_shared_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<SharedCampaignId>,
) -> Result<Json<SharedCampaignBody>, Error> {
    let shared_campaign_id = params.into_inner();

    let shared_campaign =
        manager::get_shared_campaign_by_id(&***db, &shared_campaign_id).await?;

    Ok(Json(SharedCampaignBody::render(shared_campaign)))
}
