use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::campaign::CampaignId;
use crate::catalog::ProductId;
use crate::database::Database;
use crate::error::Error;
use crate::profile::ProfileId;

use super::{manager, Order, OrderDraft, OrderId, OrderLineItem, PaymentMethod, RequestedLineItem};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateOrderBody {
    pub profile_id: Option<ProfileId>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub order_date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub line_items: Vec<RequestedLineItem>,
    pub notes: Option<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderBody {
    pub id: OrderId,
    pub campaign_id: CampaignId,
    pub profile_id: Option<ProfileId>,
    pub customer_name: String,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub order_date: DateTime<Utc>,
    pub payment_method: PaymentMethod,
    pub line_items: Vec<OrderLineItemBody>,
    pub total_amount: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OrderLineItemBody {
    pub product_id: ProductId,
    pub product_name: Option<String>,
    pub quantity: i32,
    pub price_per_unit: f64,
    pub subtotal: f64,
}

impl OrderBody {
    pub fn render(order: Order) -> OrderBody {
        OrderBody {
            id: order.id,
            campaign_id: order.campaign_id,
            profile_id: order.profile_id,
            customer_name: order.customer_name,
            customer_phone: order.customer_phone,
            customer_address: order.customer_address,
            order_date: order.order_date,
            payment_method: order.payment_method,
            line_items: order
                .line_items
                .into_iter()
                .map(OrderLineItemBody::render)
                .collect(),
            total_amount: order.total_amount,
            notes: order.notes,
            created_at: order.created_at,
            modified_at: order.modified_at,
        }
    }
}

impl OrderLineItemBody {
    pub fn render(line_item: OrderLineItem) -> OrderLineItemBody {
        OrderLineItemBody {
            product_id: line_item.product_id,
            product_name: line_item.product_name,
            quantity: line_item.quantity,
            price_per_unit: line_item.price_per_unit,
            subtotal: line_item.subtotal,
        }
    }
}

#[post("/campaigns/{campaign_id}/orders")]
#[tracing::instrument(skip(db))]
async fn create_order_in_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
    body: Json<CreateOrderBody>,
) -> Result<Json<OrderBody>, Error> {
    let campaign_id = params.into_inner();
    let body = body.into_inner();

    let draft = OrderDraft {
        profile_id: body.profile_id,
        customer_name: body.customer_name,
        customer_phone: body.customer_phone,
        customer_address: body.customer_address,
        order_date: body.order_date,
        payment_method: body.payment_method,
        line_items: body.line_items,
        notes: body.notes,
    };

    let order = manager::create_order(&***db, campaign_id, draft).await?;

    Ok(Json(OrderBody::render(order)))
}

#[get("/campaigns/{campaign_id}/orders")]
#[tracing::instrument(skip(db))]
async fn get_orders_in_campaign(
    db: Data<Box<dyn Database>>,
    params: Path<CampaignId>,
) -> Result<Json<Vec<OrderBody>>, Error> {
    let campaign_id = params.into_inner();

    let orders = manager::get_orders_in_campaign(&***db, &campaign_id).await?;

    Ok(Json(orders.into_iter().map(OrderBody::render).collect()))
}

#[get("/campaigns/{campaign_id}/orders/{order_id}")]
#[tracing::instrument(skip(db))]
async fn get_order_in_campaign_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<(CampaignId, OrderId)>,
) -> Result<Json<OrderBody>, Error> {
    let (campaign_id, order_id) = params.into_inner();

    let order = manager::get_order_by_id(&***db, &campaign_id, &order_id).await?;

    Ok(Json(OrderBody::render(order)))
}
