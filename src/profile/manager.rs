use chrono::Utc;

use crate::database::Database;
use crate::error::Error;

use super::{Profile, ProfileId};

#[tracing::instrument(skip(db))]
pub async fn create_profile(
    db: &dyn Database,
    name: String,
    email: Option<String>,
) -> Result<Profile, Error> {
    let now = Utc::now();
    let profile = Profile {
        id: ProfileId::new(),
        name,
        email,
        created_at: now,
        modified_at: now,
    };

    db.profiles().insert_profile(&profile).await?;

    Ok(profile)
}

#[tracing::instrument(skip(db))]
pub async fn get_profiles(db: &dyn Database) -> Result<Vec<Profile>, Error> {
    let profiles = db.profiles().fetch_profiles().await?;

    Ok(profiles)
}

#[tracing::instrument(skip(db))]
pub async fn get_profile_by_id(
    db: &dyn Database,
    profile_id: &ProfileId,
) -> Result<Profile, Error> {
    let profile = db.profiles().assert_profile_exists(profile_id).await?;

    Ok(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test::MockDatabase;
    use std::sync::{Arc, Mutex};

    #[tokio::test]
    async fn can_create_profile() {
        let mut db = MockDatabase::new();
        let called_insert = Arc::new(Mutex::new(false));
        let called_insert_clone = Arc::clone(&called_insert);
        db.profiles.on_insert_profile = Box::new(move |profile| {
            *called_insert_clone.lock().unwrap() = true;
            assert_eq!(profile.name, "Alex Mercer".to_string());
            assert_eq!(profile.created_at, profile.modified_at);
            Ok(())
        });

        let profile = create_profile(&db, "Alex Mercer".into(), None).await.unwrap();

        assert_eq!(profile.name, "Alex Mercer".to_string());
        assert_eq!(profile.email, None);
        assert!(
            *called_insert.lock().unwrap(),
            "db.insert_profile was not called"
        );
    }

    #[tokio::test]
    async fn get_profile_by_id_returns_error_if_doesnt_exist() {
        let mut db = MockDatabase::new();
        let test_profile_id: ProfileId = "PROFILE#P1".parse().unwrap();
        db.profiles.on_fetch_profile_by_id = Box::new(|_| Ok(None));

        let profile_result = get_profile_by_id(&db, &test_profile_id).await;

        assert_eq!(
            profile_result.unwrap_err(),
            Error::ProfileDoesNotExist {
                profile_id: test_profile_id.clone()
            }
        );
    }
}
