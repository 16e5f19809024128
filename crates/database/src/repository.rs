use crate::DbError;
use async_trait::async_trait;
use core_types::{CategoryId, Product, ProductId};
use sqlx::postgres::PgPool;

const SELECT_ALL_PRODUCTS: &str = "SELECT id, category_id, product_name, product_description, product_stock, product_price \
     FROM product ORDER BY product_name ASC";

const SELECT_PRODUCT_BY_ID: &str = "SELECT id, category_id, product_name, product_description, product_stock, product_price \
     FROM product WHERE id = $1";

const SELECT_PRODUCTS_BY_CATEGORY_ID: &str = "SELECT id, category_id, product_name, product_description, product_stock, product_price \
     FROM product WHERE category_id = $1 ORDER BY product_name ASC";

/// Read access to the `product` table.
///
/// Every failure is returned as a `DbError`, so an empty result always means
/// the query ran and matched nothing.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products ordered by name.
    async fn get_products(&self) -> Result<Vec<Product>, DbError>;

    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, DbError>;

    /// Products of one category ordered by name.
    async fn get_products_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, DbError>;
}

/// The `DbRepository` provides a high-level, application-specific interface
/// to the database. It encapsulates all SQL queries and data access logic.
#[derive(Debug, Clone)]
pub struct DbRepository {
    pool: PgPool,
}

impl DbRepository {
    /// Creates a new `DbRepository` with a shared database connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Logs the failure where it happened and tags it with the operation name.
fn query_error(operation: &'static str) -> impl FnOnce(sqlx::Error) -> DbError {
    move |source| {
        tracing::error!(operation, error = %source, "Database query failed");
        DbError::Query { operation, source }
    }
}

#[async_trait]
impl ProductRepository for DbRepository {
    async fn get_products(&self) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(SELECT_ALL_PRODUCTS)
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("get_products"))?;
        Ok(products)
    }

    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, DbError> {
        let product = sqlx::query_as::<_, Product>(SELECT_PRODUCT_BY_ID)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error("get_product_by_id"))?;
        Ok(product)
    }

    async fn get_products_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, DbError> {
        let products = sqlx::query_as::<_, Product>(SELECT_PRODUCTS_BY_CATEGORY_ID)
            .bind(category_id.get())
            .fetch_all(&self.pool)
            .await
            .map_err(query_error("get_products_by_category_id"))?;
        Ok(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_bind_a_placeholder_instead_of_a_literal() {
        for sql in [SELECT_PRODUCT_BY_ID, SELECT_PRODUCTS_BY_CATEGORY_ID] {
            assert_eq!(sql.matches("$1").count(), 1, "{sql}");
            assert!(!sql.contains('\''), "{sql}");
        }
        assert!(!SELECT_ALL_PRODUCTS.contains('$'));
    }

    #[test]
    fn list_queries_order_by_name() {
        for sql in [SELECT_ALL_PRODUCTS, SELECT_PRODUCTS_BY_CATEGORY_ID] {
            assert!(sql.ends_with("ORDER BY product_name ASC"), "{sql}");
        }
    }

    #[test]
    fn query_error_keeps_the_operation() {
        let err = query_error("get_products")(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, DbError::Query { operation: "get_products", .. }));
        assert!(err.to_string().starts_with("Query 'get_products' failed"));
    }
}
