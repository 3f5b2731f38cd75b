use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::MongoProfileStore;
use crate::error::Error;

use super::{Profile, ProfileId};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn insert_profile(&self, profile: &Profile) -> Result<(), Error>;

    async fn fetch_profiles(&self) -> Result<Vec<Profile>, Error>;

    async fn fetch_profile_by_id(&self, profile_id: &ProfileId)
        -> Result<Option<Profile>, Error>;

    async fn assert_profile_exists(&self, profile_id: &ProfileId) -> Result<Profile, Error> {
        self.fetch_profile_by_id(profile_id)
            .await?
            .ok_or_else(|| Error::ProfileDoesNotExist {
                profile_id: profile_id.clone(),
            })
    }
}

#[async_trait]
impl ProfileStore for MongoProfileStore {
    #[tracing::instrument(skip(self))]
    async fn insert_profile(&self, profile: &Profile) -> Result<(), Error> {
        self.insert_one(profile, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_profiles(&self) -> Result<Vec<Profile>, Error> {
        let profiles: Vec<Profile> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(profiles)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_profile_by_id(
        &self,
        profile_id: &ProfileId,
    ) -> Result<Option<Profile>, Error> {
        let profile = self.find_one(bson::doc! { "_id": profile_id }, None).await?;

        Ok(profile)
    }
}
