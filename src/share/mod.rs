use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;
use crate::catalog::CatalogId;
use crate::profile::ProfileId;
use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type SharedCampaignId = TypedId<SharedCampaign>;

/// An immutable template snapshot of a campaign, resolvable by link so other
/// profiles can pre-fill their own campaign from it.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SharedCampaign {
    #[serde(rename = "_id")]
    pub id: SharedCampaignId,
    pub campaign_id: CampaignId,
    pub catalog_id: CatalogId,
    pub name: String,
    pub season: Option<String>,
    pub goal_amount: Option<f64>,
    pub created_by: ProfileId,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
}

impl TypedIdMarker for SharedCampaign {
    fn tag() -> &'static str {
        "SHARED"
    }
}
