use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::typedid::{TypedId, TypedIdMarker};

pub mod db;
pub mod endpoints;
pub mod manager;
pub use endpoints::*;

pub type ProfileId = TypedId<Profile>;

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Profile {
    #[serde(rename = "_id")]
    pub id: ProfileId,
    pub name: String,
    pub email: Option<String>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub modified_at: DateTime<Utc>,
}

impl TypedIdMarker for Profile {
    fn tag() -> &'static str {
        "PROFILE"
    }
}
