use actix_web::web::{self, FormConfig, JsonConfig, PathConfig, QueryConfig};
use actix_web::{App, HttpServer, ResponseError};
use mongodb::Client;
use tracing::{info, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::fmt::format::FmtSpan;

pub mod campaign;
pub mod catalog;
pub mod config;
pub mod database;
pub mod error;
pub mod order;
pub mod profile;
pub mod seed;
pub mod share;
pub mod typedid;

pub use crate::campaign::{CampaignBody, CreateCampaignBody};
pub use crate::catalog::{CatalogBody, CreateCatalogBody, CreateProductBody};
pub use crate::config::Config;
pub use crate::error::Error;
pub use crate::order::{CreateOrderBody, OrderBody, PaymentMethod, RequestedLineItem};
pub use crate::profile::{CreateProfileBody, ProfileBody};
pub use crate::share::SharedCampaignBody;

use crate::database::{Database, MongoDatabase};

#[actix_web::main]
pub async fn run(seed: bool) -> Result<(), Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();

    let config = Config::from_env();

    info!("connecting to db: {}", config.mongodb_uri);
    let db = Client::with_uri_str(&config.mongodb_uri)
        .await?
        .database(&config.database_name);
    let db = MongoDatabase::initialize(db).await?;

    if seed {
        seed::seed(&db).await?;
    }

    HttpServer::new(move || {
        App::new()
            .app_data(JsonConfig::default().error_handler(|err, _req| {
                // format json errors with custom format
                Error::InvalidJson(err).into()
            }))
            .app_data(PathConfig::default().error_handler(|err, _req| {
                // format path errors with custom format
                Error::InvalidPath(err).into()
            }))
            .app_data(FormConfig::default().error_handler(|err, _req| {
                // format form errors with custom format
                Error::InvalidForm(err).into()
            }))
            .app_data(QueryConfig::default().error_handler(|err, _req| {
                // format query errors with custom format
                Error::InvalidQuery(err).into()
            }))
            .app_data(web::Data::new(Box::new(db.clone()) as Box<dyn Database>))
            .wrap(TracingLogger::default())
            .service(profile::endpoints::create_profile)
            .service(profile::endpoints::get_profiles)
            .service(profile::endpoints::get_profile_by_id)
            .service(catalog::endpoints::create_catalog)
            .service(catalog::endpoints::get_catalogs)
            .service(catalog::endpoints::get_catalog_by_id)
            .service(campaign::endpoints::create_campaign)
            .service(campaign::endpoints::get_campaigns)
            .service(campaign::endpoints::get_campaign_by_id)
            .service(campaign::endpoints::get_campaigns_by_profile)
            .service(share::endpoints::share_campaign)
            .service(share::endpoints::get_shared_campaigns)
            .service(share::endpoints::get_shared_campaign_by_id)
            .service(order::endpoints::create_order_in_campaign)
            .service(order::endpoints::get_orders_in_campaign)
            .service(order::endpoints::get_order_in_campaign_by_id)
            .default_service(web::to(|| async { Error::PathDoesNotExist.error_response() }))
    })
    .bind(&config.bind_address)?
    .run()
    .await?;

    Ok(())
}
