use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use futures::{stream, StreamExt, TryStreamExt};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogId;
use crate::database::Database;
use crate::error::Error;
use crate::profile::ProfileId;
use crate::share::SharedCampaignId;

use super::{manager, Campaign, CampaignDraft, CampaignId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCampaignBody {
    pub profile_id: ProfileId,
    pub catalog_id: Option<CatalogId>,
    pub shared_campaign_id: Option<SharedCampaignId>,
    pub name: Option<String>,
    pub season: Option<String>,
    pub goal_amount: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignBody {
    pub id: CampaignId,
    pub profile_id: ProfileId,
    pub catalog_id: CatalogId,
    pub name: String,
    pub season: Option<String>,
    pub goal_amount: Option<f64>,
    pub order_count: usize,
    pub total_raised: f64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl CampaignBody {
    pub async fn render(db: &dyn Database, campaign: Campaign) -> Result<CampaignBody, Error> {
        let orders = db.orders().fetch_orders_by_campaign(&campaign.id).await?;
        let total_raised = orders.iter().map(|order| order.total_amount).sum();

        Ok(CampaignBody {
            id: campaign.id,
            profile_id: campaign.profile_id,
            catalog_id: campaign.catalog_id,
            name: campaign.name,
            season: campaign.season,
            goal_amount: campaign.goal_amount,
            order_count: orders.len(),
            total_raised,
            created_at: campaign.created_at,
            modified_at: campaign.modified_at,
        })
    }
}

#[post("/campaigns")]
#[tracing::instrument(skip(db))]
async fn create_campaign(
    db: Data<Box<dyn Database>>,
    body: Json<CreateCampaignBody>,
) -> Result<Json<CampaignBody>, Error> {
    let body = body.into_inner();

    let draft = CampaignDraft {
        profile_id: body.profile_id,
        catalog_id: body.catalog_id,
        shared_campaign_id: body.shared_campaign_id,
        name: body.name,
        season: body.season,
        goal_amount: body.goal_amount,
    };

    let campaign = manager::create_campaign(&***db, draft).await?;

    Ok(Json(CampaignBody::render(&***db, campaign).await?))
}

#[get("/campaigns")]
#[tracing::instrument(skip(db))]
async fn get_campaigns(db: Data<Box<dyn Database>>) -> Result<Json<Vec<CampaignBody>>, Error> {
    let campaigns = manager::get_campaigns(&***db).await?;

    let body = stream::iter(campaigns)
        .then(|campaign| CampaignBody::render(&***db, campaign))
        .try_collect()
        .await?;

    Ok(Json(body))
}

#[get("/campaigns/{campaign_id}")]
#[tracing::instrument(skip(db))]
async fn get_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<CampaignBody>, Error> {
    let campaign_id = params.into_inner();

    let campaign = manager::get_campaign_by_id(&***db, &campaign_id).await?;

    Ok(Json(CampaignBody::render(&***db, campaign).await?))
}

#[get("/profiles/{profile_id}/campaigns")]
#[tracing::instrument(skip(db))]
async fn get_campaigns_by_profile(
    db: Data<Box<dyn Database>>,
    params: Path<ProfileId>,
) -> Result<Json<Vec<CampaignBody>>, Error> {
    let profile_id = params.into_inner();

    let campaigns = manager::get_campaigns_by_profile(&***db, &profile_id).await?;

    let body = stream::iter(campaigns)
        .then(|campaign| CampaignBody::render(&***db, campaign))
        .try_collect()
        .await?;

    Ok(Json(body))
}
