use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::CatalogId;
use crate::profile::ProfileId;
use crate::share::SharedCampaignId;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type CampaignId = TypedId<Campaign>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Campaign {
    #[serde(rename = "_id")]
    pub id: CampaignId,
    pub profile_id: ProfileId,
    pub catalog_id: CatalogId,
    pub name: String,
    pub season: Option<String>,
    pub goal_amount: Option<f64>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub modified_at: DateTime<Utc>,
}

impl TypedIdMarker for Campaign {
    fn tag() -> &'static str {
        "CAMPAIGN"
    }
}

/// Campaign-creation input. Fields left empty may be filled in from a shared
/// campaign before the draft is validated.
#[derive(Clone, Debug)]
pub struct CampaignDraft {
    pub profile_id: ProfileId,
    pub catalog_id: Option<CatalogId>,
    pub shared_campaign_id: Option<SharedCampaignId>,
    pub name: Option<String>,
    pub season: Option<String>,
    pub goal_amount: Option<f64>,
}
