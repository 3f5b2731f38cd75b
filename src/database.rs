use async_trait::async_trait;
use mongodb::bson::Document;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};

use crate::campaign::db::CampaignStore;
use crate::campaign::Campaign;
use crate::catalog::db::CatalogStore;
use crate::catalog::Catalog;
use crate::error::Error;
use crate::order::db::OrderStore;
use crate::order::Order;
use crate::profile::db::ProfileStore;
use crate::profile::Profile;
use crate::share::db::SharedCampaignStore;
use crate::share::SharedCampaign;

pub type MongoProfileStore = Collection<Profile>;
pub type MongoCatalogStore = Collection<Catalog>;
pub type MongoCampaignStore = Collection<Campaign>;
pub type MongoSharedCampaignStore = Collection<SharedCampaign>;
pub type MongoOrderStore = Collection<Order>;

#[async_trait]
pub trait Database: Send + Sync {
    fn profiles(&self) -> &dyn ProfileStore;
    fn catalogs(&self) -> &dyn CatalogStore;
    fn campaigns(&self) -> &dyn CampaignStore;
    fn shared_campaigns(&self) -> &dyn SharedCampaignStore;
    fn orders(&self) -> &dyn OrderStore;

    async fn drop(&self) -> Result<(), Error>;
}

#[derive(Debug, Clone)]
pub struct MongoDatabase {
    profiles: Collection<Profile>,
    catalogs: Collection<Catalog>,
    campaigns: Collection<Campaign>,
    shared_campaigns: Collection<SharedCampaign>,
    orders: Collection<Order>,
    db: mongodb::Database,
}

impl MongoDatabase {
    pub async fn initialize(db: mongodb::Database) -> Result<MongoDatabase, Error> {
        let database = MongoDatabase {
            profiles: db.collection("profiles"),
            catalogs: db.collection("catalogs"),
            campaigns: db.collection("campaigns"),
            shared_campaigns: db.collection("shared_campaigns"),
            orders: db.collection("orders"),
            db,
        };

        create_secondary_index(&database.campaigns, "profile_id").await?;
        create_secondary_index(&database.shared_campaigns, "campaign_id").await?;
        create_secondary_index(&database.orders, "campaign_id").await?;

        Ok(database)
    }
}

async fn create_secondary_index<T>(collection: &Collection<T>, key: &str) -> Result<(), Error> {
    let mut keys = Document::new();
    keys.insert(key, 1);

    let options = IndexOptions::builder()
        .name(format!("{}-index", key))
        .build();
    let index = IndexModel::builder().keys(keys).options(options).build();

    collection.create_index(index, None).await?;

    Ok(())
}

#[async_trait]
impl Database for MongoDatabase {
    fn profiles(&self) -> &dyn ProfileStore {
        &self.profiles
    }

    fn catalogs(&self) -> &dyn CatalogStore {
        &self.catalogs
    }

    fn campaigns(&self) -> &dyn CampaignStore {
        &self.campaigns
    }

    fn shared_campaigns(&self) -> &dyn SharedCampaignStore {
        &self.shared_campaigns
    }

    fn orders(&self) -> &dyn OrderStore {
        &self.orders
    }

    async fn drop(&self) -> Result<(), Error> {
        self.db.drop(None).await?;
        Ok(())
    }
}

#[cfg(test)]
pub mod test {
    use async_trait::async_trait;

    use crate::campaign::db::CampaignStore;
    use crate::campaign::{Campaign, CampaignId};
    use crate::catalog::db::CatalogStore;
    use crate::catalog::{Catalog, CatalogId};
    use crate::error::Error;
    use crate::order::db::OrderStore;
    use crate::order::{Order, OrderId};
    use crate::profile::db::ProfileStore;
    use crate::profile::{Profile, ProfileId};
    use crate::share::db::SharedCampaignStore;
    use crate::share::{SharedCampaign, SharedCampaignId};

    use super::Database;

    pub struct MockDatabase {
        pub profiles: MockProfileStore,
        pub catalogs: MockCatalogStore,
        pub campaigns: MockCampaignStore,
        pub shared_campaigns: MockSharedCampaignStore,
        pub orders: MockOrderStore,
    }

    impl MockDatabase {
        pub fn new() -> MockDatabase {
            MockDatabase {
                profiles: MockProfileStore::new(),
                catalogs: MockCatalogStore::new(),
                campaigns: MockCampaignStore::new(),
                shared_campaigns: MockSharedCampaignStore::new(),
                orders: MockOrderStore::new(),
            }
        }
    }

    #[async_trait]
    impl Database for MockDatabase {
        fn profiles(&self) -> &dyn ProfileStore {
            &self.profiles
        }

        fn catalogs(&self) -> &dyn CatalogStore {
            &self.catalogs
        }

        fn campaigns(&self) -> &dyn CampaignStore {
            &self.campaigns
        }

        fn shared_campaigns(&self) -> &dyn SharedCampaignStore {
            &self.shared_campaigns
        }

        fn orders(&self) -> &dyn OrderStore {
            &self.orders
        }

        async fn drop(&self) -> Result<(), Error> {
            Ok(())
        }
    }

    pub struct MockProfileStore {
        pub on_insert_profile: Box<dyn Fn(&Profile) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_profiles: Box<dyn Fn() -> Result<Vec<Profile>, Error> + Send + Sync>,
        pub on_fetch_profile_by_id:
            Box<dyn Fn(&ProfileId) -> Result<Option<Profile>, Error> + Send + Sync>,
    }

    impl MockProfileStore {
        fn new() -> MockProfileStore {
            MockProfileStore {
                on_insert_profile: Box::new(|_| panic!("unexpected call to insert_profile")),
                on_fetch_profiles: Box::new(|| panic!("unexpected call to fetch_profiles")),
                on_fetch_profile_by_id: Box::new(|_| {
                    panic!("unexpected call to fetch_profile_by_id")
                }),
            }
        }
    }

    #[async_trait]
    impl ProfileStore for MockProfileStore {
        async fn insert_profile(&self, profile: &Profile) -> Result<(), Error> {
            (self.on_insert_profile)(profile)
        }

        async fn fetch_profiles(&self) -> Result<Vec<Profile>, Error> {
            (self.on_fetch_profiles)()
        }

        async fn fetch_profile_by_id(
            &self,
            profile_id: &ProfileId,
        ) -> Result<Option<Profile>, Error> {
            (self.on_fetch_profile_by_id)(profile_id)
        }
    }

    pub struct MockCatalogStore {
        pub on_insert_catalog: Box<dyn Fn(&Catalog) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_catalogs: Box<dyn Fn() -> Result<Vec<Catalog>, Error> + Send + Sync>,
        pub on_fetch_catalog_by_id:
            Box<dyn Fn(&CatalogId) -> Result<Option<Catalog>, Error> + Send + Sync>,
    }

    impl MockCatalogStore {
        fn new() -> MockCatalogStore {
            MockCatalogStore {
                on_insert_catalog: Box::new(|_| panic!("unexpected call to insert_catalog")),
                on_fetch_catalogs: Box::new(|| panic!("unexpected call to fetch_catalogs")),
                on_fetch_catalog_by_id: Box::new(|_| {
                    panic!("unexpected call to fetch_catalog_by_id")
                }),
            }
        }
    }

    #[async_trait]
    impl CatalogStore for MockCatalogStore {
        async fn insert_catalog(&self, catalog: &Catalog) -> Result<(), Error> {
            (self.on_insert_catalog)(catalog)
        }

        async fn fetch_catalogs(&self) -> Result<Vec<Catalog>, Error> {
            (self.on_fetch_catalogs)()
        }

        async fn fetch_catalog_by_id(
            &self,
            catalog_id: &CatalogId,
        ) -> Result<Option<Catalog>, Error> {
            (self.on_fetch_catalog_by_id)(catalog_id)
        }
    }

    pub struct MockCampaignStore {
        pub on_insert_campaign: Box<dyn Fn(&Campaign) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_campaigns: Box<dyn Fn() -> Result<Vec<Campaign>, Error> + Send + Sync>,
        pub on_fetch_campaign_by_id:
            Box<dyn Fn(&CampaignId) -> Result<Option<Campaign>, Error> + Send + Sync>,
        pub on_fetch_campaigns_by_profile:
            Box<dyn Fn(&ProfileId) -> Result<Vec<Campaign>, Error> + Send + Sync>,
    }

    impl MockCampaignStore {
        fn new() -> MockCampaignStore {
            MockCampaignStore {
                on_insert_campaign: Box::new(|_| panic!("unexpected call to insert_campaign")),
                on_fetch_campaigns: Box::new(|| panic!("unexpected call to fetch_campaigns")),
                on_fetch_campaign_by_id: Box::new(|_| {
                    panic!("unexpected call to fetch_campaign_by_id")
                }),
                on_fetch_campaigns_by_profile: Box::new(|_| {
                    panic!("unexpected call to fetch_campaigns_by_profile")
                }),
            }
        }
    }

    #[async_trait]
    impl CampaignStore for MockCampaignStore {
        async fn insert_campaign(&self, campaign: &Campaign) -> Result<(), Error> {
            (self.on_insert_campaign)(campaign)
        }

        async fn fetch_campaigns(&self) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_campaigns)()
        }

        async fn fetch_campaign_by_id(
            &self,
            campaign_id: &CampaignId,
        ) -> Result<Option<Campaign>, Error> {
            (self.on_fetch_campaign_by_id)(campaign_id)
        }

        async fn fetch_campaigns_by_profile(
            &self,
            profile_id: &ProfileId,
        ) -> Result<Vec<Campaign>, Error> {
            (self.on_fetch_campaigns_by_profile)(profile_id)
        }
    }

    pub struct MockSharedCampaignStore {
        pub on_insert_shared_campaign:
            Box<dyn Fn(&SharedCampaign) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_shared_campaigns:
            Box<dyn Fn() -> Result<Vec<SharedCampaign>, Error> + Send + Sync>,
        pub on_fetch_shared_campaign_by_id:
            Box<dyn Fn(&SharedCampaignId) -> Result<Option<SharedCampaign>, Error> + Send + Sync>,
    }

    impl MockSharedCampaignStore {
        fn new() -> MockSharedCampaignStore {
            MockSharedCampaignStore {
                on_insert_shared_campaign: Box::new(|_| {
                    panic!("unexpected call to insert_shared_campaign")
                }),
                on_fetch_shared_campaigns: Box::new(|| {
                    panic!("unexpected call to fetch_shared_campaigns")
                }),
                on_fetch_shared_campaign_by_id: Box::new(|_| {
                    panic!("unexpected call to fetch_shared_campaign_by_id")
                }),
            }
        }
    }

    #[async_trait]
    impl SharedCampaignStore for MockSharedCampaignStore {
        async fn insert_shared_campaign(
            &self,
            shared_campaign: &SharedCampaign,
        ) -> Result<(), Error> {
            (self.on_insert_shared_campaign)(shared_campaign)
        }

        async fn fetch_shared_campaigns(&self) -> Result<Vec<SharedCampaign>, Error> {
            (self.on_fetch_shared_campaigns)()
        }

        async fn fetch_shared_campaign_by_id(
            &self,
            shared_campaign_id: &SharedCampaignId,
        ) -> Result<Option<SharedCampaign>, Error> {
            (self.on_fetch_shared_campaign_by_id)(shared_campaign_id)
        }
    }

    pub struct MockOrderStore {
        pub on_insert_order: Box<dyn Fn(&Order) -> Result<(), Error> + Send + Sync>,
        pub on_fetch_orders_by_campaign:
            Box<dyn Fn(&CampaignId) -> Result<Vec<Order>, Error> + Send + Sync>,
        pub on_fetch_order_by_campaign_and_id:
            Box<dyn Fn(&CampaignId, &OrderId) -> Result<Option<Order>, Error> + Send + Sync>,
    }

    impl MockOrderStore {
        fn new() -> MockOrderStore {
            MockOrderStore {
                on_insert_order: Box::new(|_| panic!("unexpected call to insert_order")),
                on_fetch_orders_by_campaign: Box::new(|_| {
                    panic!("unexpected call to fetch_orders_by_campaign")
                }),
                on_fetch_order_by_campaign_and_id: Box::new(|_, _| {
                    panic!("unexpected call to fetch_order_by_campaign_and_id")
                }),
            }
        }
    }

    #[async_trait]
    impl OrderStore for MockOrderStore {
        async fn insert_order(&self, order: &Order) -> Result<(), Error> {
            (self.on_insert_order)(order)
        }

        async fn fetch_orders_by_campaign(
            &self,
            campaign_id: &CampaignId,
        ) -> Result<Vec<Order>, Error> {
            (self.on_fetch_orders_by_campaign)(campaign_id)
        }

        async fn fetch_order_by_campaign_and_id(
            &self,
            campaign_id: &CampaignId,
            order_id: &OrderId,
        ) -> Result<Option<Order>, Error> {
            (self.on_fetch_order_by_campaign_and_id)(campaign_id, order_id)
        }
    }
}
