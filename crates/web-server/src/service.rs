use crate::error::ServiceError;
use core_types::{CategoryId, CoreError, Product, ProductId};
use database::ProductRepository;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Sits between the HTTP handlers and the repository.
///
/// Raw identifiers from the request path are validated here; the repository
/// is only called with values that already parsed.
#[derive(Clone)]
pub struct ProductService {
    repo: Arc<dyn ProductRepository>,
}

fn parse_id<T>(operation: &str, raw: &str) -> Result<T, ServiceError>
where
    T: FromStr<Err = CoreError>,
{
    raw.parse::<T>().map_err(|err| {
        tracing::warn!(operation, raw, error = %err, "Rejected invalid id parameter");
        ServiceError::Validation(err)
    })
}

impl ProductService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    pub async fn get_products(&self) -> Result<Vec<Product>, ServiceError> {
        let products = self.repo.get_products().await?;
        Ok(products)
    }

    pub async fn get_product_by_id(&self, raw_id: &str) -> Result<Option<Product>, ServiceError> {
        let id: ProductId = parse_id("get_product_by_id", raw_id)?;
        let product = self.repo.get_product_by_id(id).await?;
        Ok(product)
    }

    pub async fn get_products_by_category_id(
        &self,
        raw_id: &str,
    ) -> Result<Vec<Product>, ServiceError> {
        let category_id: CategoryId = parse_id("get_products_by_category_id", raw_id)?;
        let products = self.repo.get_products_by_category_id(category_id).await?;
        Ok(products)
    }

    // Writes are accepted and dropped. There is no persistence behind them.

    pub async fn create_product(&self, product: &Value) {
        tracing::debug!(%product, "create_product: nothing persisted");
    }

    pub async fn update_product(&self, raw_id: &str, product: Option<&Value>) {
        tracing::debug!(raw_id, ?product, "update_product: nothing persisted");
    }

    pub async fn delete_product(&self, raw_id: &str) {
        tracing::debug!(raw_id, "delete_product: nothing persisted");
    }
}

impl fmt::Debug for ProductService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductService").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{Call, RecordingRepository};
    use serde_json::json;

    fn service(repo: &Arc<RecordingRepository>) -> ProductService {
        ProductService::new(repo.clone())
    }

    #[tokio::test]
    async fn valid_id_issues_exactly_one_lookup() {
        let repo = Arc::new(RecordingRepository::seeded());

        let product = service(&repo).get_product_by_id("2").await.unwrap().unwrap();

        assert_eq!(product.id, 2);
        assert_eq!(product.product_name, "B");
        assert_eq!(repo.calls(), vec![Call::ById(2)]);
    }

    #[tokio::test]
    async fn invalid_ids_never_reach_the_repository() {
        let repo = Arc::new(RecordingRepository::seeded());
        let service = service(&repo);

        for raw in ["abc", "-1", "+3", "1.5", "", " 7", "2147483648"] {
            let by_id = service.get_product_by_id(raw).await.unwrap_err();
            assert!(matches!(by_id, ServiceError::Validation(_)), "{raw:?}");

            let by_cat = service.get_products_by_category_id(raw).await.unwrap_err();
            assert!(matches!(by_cat, ServiceError::Validation(_)), "{raw:?}");
        }

        assert!(repo.calls().is_empty());
    }

    #[tokio::test]
    async fn category_lookup_returns_resolved_rows() {
        let repo = Arc::new(RecordingRepository::seeded());

        let products = service(&repo).get_products_by_category_id("5").await.unwrap();

        let ids: Vec<_> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(repo.calls(), vec![Call::ByCategory(5)]);
    }

    #[tokio::test]
    async fn database_failures_are_not_masked_as_empty() {
        let repo = Arc::new(RecordingRepository::failing());
        let service = service(&repo);

        assert!(matches!(
            service.get_products().await.unwrap_err(),
            ServiceError::Database(_)
        ));
        assert!(matches!(
            service.get_product_by_id("1").await.unwrap_err(),
            ServiceError::Database(_)
        ));
        assert!(matches!(
            service.get_products_by_category_id("1").await.unwrap_err(),
            ServiceError::Database(_)
        ));
    }

    #[tokio::test]
    async fn write_stubs_do_not_touch_the_repository() {
        let repo = Arc::new(RecordingRepository::seeded());
        let service = service(&repo);
        let body = json!({ "product_name": "D", "category_id": 5 });

        service.create_product(&body).await;
        service.update_product("1", Some(&body)).await;
        service.delete_product("1").await;

        assert!(repo.calls().is_empty());
    }
}
