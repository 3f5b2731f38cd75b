use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, Profile, ProfileId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProfileBody {
    pub name: String,
    pub email: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileBody {
    pub id: ProfileId,
    pub name: String,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl ProfileBody {
    pub fn render(profile: Profile) -> ProfileBody {
        ProfileBody {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            created_at: profile.created_at,
            modified_at: profile.modified_at,
        }
    }
}

#[post("/profiles")]
#[tracing::instrument(skip(db))]
async fn create_profile(
    db: Data<Box<dyn Database>>,
    body: Json<CreateProfileBody>,
) -> Result<Json<ProfileBody>, Error> {
    let body = body.into_inner();

    let profile = manager::create_profile(&***db, body.name, body.email).await?;

    Ok(Json(ProfileBody::render(profile)))
}

#[get("/profiles")]
#[tracing::instrument(skip(db))]
async fn get_profiles(db: Data<Box<dyn Database>>) -> Result<Json<Vec<ProfileBody>>, Error> {
    let profiles = manager::get_profiles(&***db).await?;

    Ok(Json(profiles.into_iter().map(ProfileBody::render).collect()))
}

#[get("/profiles/{profile_id}")]
#[tracing::instrument(skip(db))]
async fn get_profile_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<ProfileId>,
) -> Result<Json<ProfileBody>, Error> {
    let profile_id = params.into_inner();

    let profile = manager::get_profile_by_id(&***db, &profile_id).await?;

    Ok(Json(ProfileBody::render(profile)))
}
