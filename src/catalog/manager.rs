use chrono::Utc;

use crate::database::Database;
use crate::error::Error;

use super::{Catalog, CatalogId, Product, ProductDraft, ProductId};

#[tracing::instrument(skip(db))]
pub async fn create_catalog(
    db: &dyn Database,
    name: String,
    products: Vec<ProductDraft>,
) -> Result<Catalog, Error> {
    let products = products
        .into_iter()
        .map(|draft| Product {
            product_id: ProductId::new(),
            product_name: draft.product_name,
            price: draft.price,
        })
        .collect();

    let now = Utc::now();
    let catalog = Catalog {
        id: CatalogId::new(),
        name,
        products,
        created_at: now,
        modified_at: now,
    };

    db.catalogs().insert_catalog(&catalog).await?;

    Ok(catalog)
}

#[tracing::instrument(skip(db))]
pub async fn get_catalogs(db: &dyn Database) -> Result<Vec<Catalog>, Error> {
    let catalogs = db.catalogs().fetch_catalogs().await?;

    Ok(catalogs)
}

#[tracing::instrument(skip(db))]
pub async fn get_catalog_by_id(
    db: &dyn Database,
    catalog_id: &CatalogId,
) -> Result<Catalog, Error> {
    let catalog = db.catalogs().assert_catalog_exists(catalog_id).await?;

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test::MockDatabase;

    #[tokio::test]
    async fn create_catalog_assigns_product_ids() {
        let mut db = MockDatabase::new();
        db.catalogs.on_insert_catalog = Box::new(|catalog| {
            assert_eq!(catalog.products.len(), 2);
            assert_ne!(
                catalog.products[0].product_id,
                catalog.products[1].product_id
            );
            Ok(())
        });

        let catalog = create_catalog(
            &db,
            "Fall Popcorn".into(),
            vec![
                ProductDraft {
                    product_name: "Caramel Corn".into(),
                    price: 10.0,
                },
                ProductDraft {
                    product_name: "Chocolate Pretzels".into(),
                    price: 20.0,
                },
            ],
        )
        .await
        .unwrap();

        assert_eq!(catalog.name, "Fall Popcorn".to_string());
        assert_eq!(catalog.products[1].price, 20.0);
        assert_eq!(
            catalog.find_product(&catalog.products[0].product_id).unwrap().product_name,
            "Caramel Corn".to_string()
        );
    }

    #[tokio::test]
    async fn get_catalog_by_id_returns_error_if_doesnt_exist() {
        let mut db = MockDatabase::new();
        let test_catalog_id: CatalogId = "CATALOG#C1".parse().unwrap();
        db.catalogs.on_fetch_catalog_by_id = Box::new(|_| Ok(None));

        let catalog_result = get_catalog_by_id(&db, &test_catalog_id).await;

        assert_eq!(
            catalog_result.unwrap_err(),
            Error::CatalogDoesNotExist {
                catalog_id: test_catalog_id.clone()
            }
        );
    }
}
