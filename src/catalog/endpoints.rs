use actix_web::web::{Data, Json, Path};
use actix_web::{get, post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::Database;
use crate::error::Error;

use super::{manager, Catalog, CatalogId, Product, ProductDraft, ProductId};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateCatalogBody {
    pub name: String,
    pub products: Vec<CreateProductBody>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateProductBody {
    pub product_name: String,
    pub price: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CatalogBody {
    pub id: CatalogId,
    pub name: String,
    pub products: Vec<ProductBody>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProductBody {
    pub product_id: ProductId,
    pub product_name: String,
    pub price: f64,
}

impl CatalogBody {
    pub fn render(catalog: Catalog) -> CatalogBody {
        CatalogBody {
            id: catalog.id,
            name: catalog.name,
            products: catalog.products.into_iter().map(ProductBody::render).collect(),
            created_at: catalog.created_at,
            modified_at: catalog.modified_at,
        }
    }
}

impl ProductBody {
    pub fn render(product: Product) -> ProductBody {
        ProductBody {
            product_id: product.product_id,
            product_name: product.product_name,
            price: product.price,
        }
    }
}

#[post("/catalogs")]
#[tracing::instrument(skip(db))]
async fn create_catalog(
    db: Data<Box<dyn Database>>,
    body: Json<CreateCatalogBody>,
) -> Result<Json<CatalogBody>, Error> {
    let body = body.into_inner();

    let products = body
        .products
        .into_iter()
        .map(|product| ProductDraft {
            product_name: product.product_name,
            price: product.price,
        })
        .collect();

    let catalog = manager::create_catalog(&***db, body.name, products).await?;

    Ok(Json(CatalogBody::render(catalog)))
}

#[get("/catalogs")]
#[tracing::instrument(skip(db))]
async fn get_catalogs(db: Data<Box<dyn Database>>) -> Result<Json<Vec<CatalogBody>>, Error> {
    let catalogs = manager::get_catalogs(&***db).await?;

    Ok(Json(catalogs.into_iter().map(CatalogBody::render).collect()))
}

#[get("/catalogs/{catalog_id}")]
#[tracing::instrument(skip(db))]
async fn get_catalog_by_id(
    db: Data<Box<dyn Database>>,
    params: Path<CatalogId>,
) -> Result<Json<CatalogBody>, Error> {
    let catalog_id = params.into_inner();

    let catalog = manager::get_catalog_by_id(&***db, &catalog_id).await?;

    Ok(Json(CatalogBody::render(catalog)))
}
