use chrono::Utc;

use crate::database::Database;
use crate::error::Error;
use crate::profile::ProfileId;

use super::{Campaign, CampaignDraft, CampaignId};

#[tracing::instrument(skip(db))]
pub async fn create_campaign(db: &dyn Database, draft: CampaignDraft) -> Result<Campaign, Error> {
    let prefill = match &draft.shared_campaign_id {
        Some(shared_campaign_id) => Some(
            db.shared_campaigns()
                .assert_shared_campaign_exists(shared_campaign_id)
                .await?,
        ),
        None => None,
    };

    let name = draft
        .name
        .or_else(|| prefill.as_ref().map(|shared| shared.name.clone()))
        .ok_or(Error::MissingCampaignField { field: "name" })?;
    let catalog_id = draft
        .catalog_id
        .or_else(|| prefill.as_ref().map(|shared| shared.catalog_id.clone()))
        .ok_or(Error::MissingCampaignField { field: "catalog_id" })?;
    let season = draft
        .season
        .or_else(|| prefill.as_ref().and_then(|shared| shared.season.clone()));
    let goal_amount = draft
        .goal_amount
        .or_else(|| prefill.as_ref().and_then(|shared| shared.goal_amount));

    db.profiles().assert_profile_exists(&draft.profile_id).await?;
    db.catalogs().assert_catalog_exists(&catalog_id).await?;

    let now = Utc::now();
    let campaign = Campaign {
        id: CampaignId::new(),
        profile_id: draft.profile_id,
        catalog_id,
        name,
        season,
        goal_amount,
        created_at: now,
        modified_at: now,
    };

    db.campaigns().insert_campaign(&campaign).await?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns(db: &dyn Database) -> Result<Vec<Campaign>, Error> {
    let campaigns = db.campaigns().fetch_campaigns().await?;

    Ok(campaigns)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaign_by_id(
    db: &dyn Database,
    campaign_id: &CampaignId,
) -> Result<Campaign, Error> {
    let campaign = db.campaigns().assert_campaign_exists(campaign_id).await?;

    Ok(campaign)
}

#[tracing::instrument(skip(db))]
pub async fn get_campaigns_by_profile(
    db: &dyn Database,
    profile_id: &ProfileId,
) -> Result<Vec<Campaign>, Error> {
    db.profiles().assert_profile_exists(profile_id).await?;

    let campaigns = db
        .campaigns()
        .fetch_campaigns_by_profile(profile_id)
        .await?;

    Ok(campaigns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogId};
    use crate::database::test::MockDatabase;
    use crate::profile::Profile;
    use crate::share::{SharedCampaign, SharedCampaignId};
    use std::sync::{Arc, Mutex};

    fn test_profile(profile_id: &ProfileId) -> Profile {
        let now = Utc::now();
        Profile {
            id: profile_id.clone(),
            name: "Alex Mercer".to_string(),
            email: None,
            created_at: now,
            modified_at: now,
        }
    }

    fn test_catalog(catalog_id: &CatalogId) -> Catalog {
        let now = Utc::now();
        Catalog {
            id: catalog_id.clone(),
            name: "Fall Popcorn".to_string(),
            products: vec![],
            created_at: now,
            modified_at: now,
        }
    }

    #[tokio::test]
    async fn can_create_campaign() {
        let mut db = MockDatabase::new();
        let profile_id: ProfileId = "PROFILE#P1".parse().unwrap();
        let catalog_id: CatalogId = "CATALOG#C1".parse().unwrap();

        let hook_profile_id = profile_id.clone();
        db.profiles.on_fetch_profile_by_id = Box::new(move |id| {
            assert_eq!(*id, hook_profile_id);
            Ok(Some(test_profile(&hook_profile_id)))
        });
        let hook_catalog_id = catalog_id.clone();
        db.catalogs.on_fetch_catalog_by_id = Box::new(move |id| {
            assert_eq!(*id, hook_catalog_id);
            Ok(Some(test_catalog(&hook_catalog_id)))
        });
        let called_insert = Arc::new(Mutex::new(false));
        let called_insert_clone = Arc::clone(&called_insert);
        db.campaigns.on_insert_campaign = Box::new(move |campaign| {
            *called_insert_clone.lock().unwrap() = true;
            assert_eq!(campaign.name, "Troop 42 Fall Drive".to_string());
            assert_eq!(campaign.created_at, campaign.modified_at);
            Ok(())
        });

        let campaign = create_campaign(
            &db,
            CampaignDraft {
                profile_id: profile_id.clone(),
                catalog_id: Some(catalog_id.clone()),
                shared_campaign_id: None,
                name: Some("Troop 42 Fall Drive".into()),
                season: Some("Fall 2023".into()),
                goal_amount: Some(500.0),
            },
        )
        .await
        .unwrap();

        assert_eq!(campaign.profile_id, profile_id);
        assert_eq!(campaign.catalog_id, catalog_id);
        assert_eq!(campaign.season, Some("Fall 2023".to_string()));
        assert!(
            *called_insert.lock().unwrap(),
            "db.insert_campaign was not called"
        );
    }

    #[tokio::test]
    async fn create_campaign_prefills_from_shared_campaign() {
        let mut db = MockDatabase::new();
        let profile_id: ProfileId = "PROFILE#P1".parse().unwrap();
        let catalog_id: CatalogId = "CATALOG#C1".parse().unwrap();
        let shared_campaign_id: SharedCampaignId = "SHARED#S1".parse().unwrap();

        let shared_catalog_id = catalog_id.clone();
        db.shared_campaigns.on_fetch_shared_campaign_by_id = Box::new(move |id| {
            Ok(Some(SharedCampaign {
                id: id.clone(),
                campaign_id: "CAMPAIGN#SOURCE".parse().unwrap(),
                catalog_id: shared_catalog_id.clone(),
                name: "Fall Popcorn Drive".to_string(),
                season: Some("Fall 2023".to_string()),
                goal_amount: Some(750.0),
                created_by: "PROFILE#SHARER".parse().unwrap(),
                created_at: Utc::now(),
            }))
        });
        let hook_profile_id = profile_id.clone();
        db.profiles.on_fetch_profile_by_id =
            Box::new(move |_| Ok(Some(test_profile(&hook_profile_id))));
        let hook_catalog_id = catalog_id.clone();
        db.catalogs.on_fetch_catalog_by_id =
            Box::new(move |_| Ok(Some(test_catalog(&hook_catalog_id))));
        db.campaigns.on_insert_campaign = Box::new(|_| Ok(()));

        let campaign = create_campaign(
            &db,
            CampaignDraft {
                profile_id: profile_id.clone(),
                catalog_id: None,
                shared_campaign_id: Some(shared_campaign_id),
                name: None,
                season: None,
                goal_amount: None,
            },
        )
        .await
        .unwrap();

        assert_eq!(campaign.name, "Fall Popcorn Drive".to_string());
        assert_eq!(campaign.catalog_id, catalog_id);
        assert_eq!(campaign.season, Some("Fall 2023".to_string()));
        assert_eq!(campaign.goal_amount, Some(750.0));
        assert_eq!(campaign.profile_id, profile_id);
    }

    #[tokio::test]
    async fn create_campaign_without_name_or_prefill_fails() {
        let db = MockDatabase::new();
        let profile_id: ProfileId = "PROFILE#P1".parse().unwrap();

        let campaign_result = create_campaign(
            &db,
            CampaignDraft {
                profile_id,
                catalog_id: Some("CATALOG#C1".parse().unwrap()),
                shared_campaign_id: None,
                name: None,
                season: None,
                goal_amount: None,
            },
        )
        .await;

        assert_eq!(
            campaign_result.unwrap_err(),
            Error::MissingCampaignField { field: "name" }
        );
    }

    #[tokio::test]
    async fn get_campaign_by_id_returns_error_if_doesnt_exist() {
        let mut db = MockDatabase::new();
        let test_campaign_id: CampaignId = "CAMPAIGN#C1".parse().unwrap();
        db.campaigns.on_fetch_campaign_by_id = Box::new(|_| Ok(None));

        let campaign_result = get_campaign_by_id(&db, &test_campaign_id).await;

        assert_eq!(
            campaign_result.unwrap_err(),
            Error::CampaignDoesNotExist {
                campaign_id: test_campaign_id.clone()
            }
        );
    }
}
