use chrono::Utc;

use crate::campaign::{Campaign, CampaignId};
use crate::database::Database;
use crate::error::Error;

use super::{CatalogContext, Order, OrderDraft, OrderId};

/// Resolves the campaign and its catalog for an incoming order. Missing
/// records are the documented "no catalog" path, not an error; only storage
/// failures abort the request.
#[tracing::instrument(skip(db))]
pub async fn resolve_catalog_context(
    db: &dyn Database,
    campaign_id: &CampaignId,
) -> Result<(Option<Campaign>, CatalogContext), Error> {
    let campaign = db.campaigns().fetch_campaign_by_id(campaign_id).await?;

    let catalog = match &campaign {
        Some(campaign) => db.catalogs().fetch_catalog_by_id(&campaign.catalog_id).await?,
        None => None,
    };

    let context = match catalog {
        Some(catalog) => CatalogContext::Resolved(catalog),
        None => CatalogContext::Unresolved,
    };

    Ok((campaign, context))
}

#[tracing::instrument(skip(db))]
pub async fn create_order(
    db: &dyn Database,
    campaign_id: CampaignId,
    draft: OrderDraft,
) -> Result<Order, Error> {
    if draft.line_items.is_empty() {
        return Err(Error::EmptyLineItems { campaign_id });
    }

    let (campaign, catalog) = resolve_catalog_context(db, &campaign_id).await?;
    let (line_items, total_amount) = catalog.price_line_items(&draft.line_items)?;

    let profile_id = draft
        .profile_id
        .or_else(|| campaign.map(|campaign| campaign.profile_id));

    let now = Utc::now();
    let order = Order {
        id: OrderId::new(),
        campaign_id,
        profile_id,
        customer_name: draft.customer_name,
        customer_phone: draft.customer_phone,
        customer_address: draft.customer_address,
        order_date: draft.order_date,
        payment_method: draft.payment_method,
        line_items,
        total_amount,
        notes: draft.notes,
        created_at: now,
        modified_at: now,
    };

    db.orders().insert_order(&order).await?;

    Ok(order)
}

#[tracing::instrument(skip(db))]
pub async fn get_orders_in_campaign(
    db: &dyn Database,
    campaign_id: &CampaignId,
) -> Result<Vec<Order>, Error> {
    db.campaigns().assert_campaign_exists(campaign_id).await?;

    let orders = db.orders().fetch_orders_by_campaign(campaign_id).await?;

    Ok(orders)
}

#[tracing::instrument(skip(db))]
pub async fn get_order_by_id(
    db: &dyn Database,
    campaign_id: &CampaignId,
    order_id: &OrderId,
) -> Result<Order, Error> {
    db.campaigns().assert_campaign_exists(campaign_id).await?;

    let order = db
        .orders()
        .fetch_order_by_campaign_and_id(campaign_id, order_id)
        .await?
        .ok_or_else(|| Error::OrderDoesNotExistInCampaign {
            campaign_id: campaign_id.clone(),
            order_id: order_id.clone(),
        })?;

    Ok(order)
}
