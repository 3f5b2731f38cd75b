use chrono::Utc;

use crate::campaign::Campaign;
use crate::catalog::{Catalog, Product};
use crate::database::Database;
use crate::error::Error;
use crate::order::{Order, OrderLineItem, PaymentMethod};
use crate::profile::Profile;
use crate::share::SharedCampaign;

pub async fn seed(db: &dyn Database) -> Result<(), Error> {
    db.drop().await?;

    let profile_id = "PROFILE#8A3F2C61-5A0B-4E0F-9C35-2B7D3A54E919".parse().unwrap();
    let catalog_id = "CATALOG#16E77539-8873-4C8A-BCA3-2036010474AD".parse().unwrap();
    let campaign_id = "CAMPAIGN#5EA81D0A-9788-4B8A-82D9-1A0D636B53CE".parse().unwrap();
    let shared_campaign_id = "SHARED#33957EB6-0EE7-487F-A087-E55C335BD63C".parse().unwrap();
    let caramel_corn_id = "PRODUCT#5C903E93-2524-4876-B4C8-816B98D0C77B".parse().unwrap();
    let pretzels_id = "PRODUCT#DE3168FD-2730-47A2-BFE0-E53C79DD57A0".parse().unwrap();

    let now = Utc::now();

    let profile = Profile {
        id: profile_id,
        name: "Riley Strand".to_string(),
        email: Some("riley@example.com".to_string()),
        created_at: now,
        modified_at: now,
    };

    let catalog = Catalog {
        id: catalog_id,
        name: "Fall Popcorn".to_string(),
        products: vec![
            Product {
                product_id: caramel_corn_id,
                product_name: "Caramel Corn".to_string(),
                price: 10.0,
            },
            Product {
                product_id: pretzels_id,
                product_name: "Chocolate Pretzels".to_string(),
                price: 20.0,
            },
        ],
        created_at: now,
        modified_at: now,
    };

    let campaign = Campaign {
        id: campaign_id,
        profile_id: profile.id.clone(),
        catalog_id: catalog.id.clone(),
        name: "Troop 42 Fall Drive".to_string(),
        season: Some("Fall 2025".to_string()),
        goal_amount: Some(750.0),
        created_at: now,
        modified_at: now,
    };

    let shared_campaign = SharedCampaign {
        id: shared_campaign_id,
        campaign_id: campaign.id.clone(),
        catalog_id: catalog.id.clone(),
        name: campaign.name.clone(),
        season: campaign.season.clone(),
        goal_amount: campaign.goal_amount,
        created_by: profile.id.clone(),
        created_at: now,
    };

    let order = Order {
        id: "ORDER#273047A2-0EE7-4B8A-9C35-816B98D0C77B".parse().unwrap(),
        campaign_id: campaign.id.clone(),
        profile_id: Some(profile.id.clone()),
        customer_name: "Dana Cole".to_string(),
        customer_phone: Some("555-0147".to_string()),
        customer_address: Some("12 Birch Lane".to_string()),
        order_date: now,
        payment_method: PaymentMethod::Cash,
        line_items: vec![
            OrderLineItem {
                product_id: catalog.products[0].product_id.clone(),
                product_name: Some(catalog.products[0].product_name.clone()),
                quantity: 2,
                price_per_unit: catalog.products[0].price,
                subtotal: 20.0,
            },
            OrderLineItem {
                product_id: catalog.products[1].product_id.clone(),
                product_name: Some(catalog.products[1].product_name.clone()),
                quantity: 1,
                price_per_unit: catalog.products[1].price,
                subtotal: 20.0,
            },
        ],
        total_amount: 40.0,
        notes: None,
        created_at: now,
        modified_at: now,
    };

    db.profiles().insert_profile(&profile).await?;
    db.catalogs().insert_catalog(&catalog).await?;
    db.campaigns().insert_campaign(&campaign).await?;
    db.shared_campaigns()
        .insert_shared_campaign(&shared_campaign)
        .await?;
    db.orders().insert_order(&order).await?;

    Ok(())
}
