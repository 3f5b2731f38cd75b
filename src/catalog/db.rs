use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson;

use crate::database::MongoCatalogStore;
use crate::error::Error;

use super::{Catalog, CatalogId};

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn insert_catalog(&self, catalog: &Catalog) -> Result<(), Error>;

    async fn fetch_catalogs(&self) -> Result<Vec<Catalog>, Error>;

    async fn fetch_catalog_by_id(&self, catalog_id: &CatalogId)
        -> Result<Option<Catalog>, Error>;

    async fn assert_catalog_exists(&self, catalog_id: &CatalogId) -> Result<Catalog, Error> {
        self.fetch_catalog_by_id(catalog_id)
            .await?
            .ok_or_else(|| Error::CatalogDoesNotExist {
                catalog_id: catalog_id.clone(),
            })
    }
}

#[async_trait]
impl CatalogStore for MongoCatalogStore {
    #[tracing::instrument(skip(self))]
    async fn insert_catalog(&self, catalog: &Catalog) -> Result<(), Error> {
        self.insert_one(catalog, None).await?;

        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_catalogs(&self) -> Result<Vec<Catalog>, Error> {
        let catalogs: Vec<Catalog> = self.find(bson::doc! {}, None).await?.try_collect().await?;

        Ok(catalogs)
    }

    #[tracing::instrument(skip(self))]
    async fn fetch_catalog_by_id(
        &self,
        catalog_id: &CatalogId,
    ) -> Result<Option<Catalog>, Error> {
        let catalog = self.find_one(bson::doc! { "_id": catalog_id }, None).await?;

        Ok(catalog)
    }
}
