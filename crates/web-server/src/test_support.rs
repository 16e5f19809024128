use async_trait::async_trait;
use core_types::{CategoryId, Product, ProductId};
use database::{DbError, ProductRepository};
use std::sync::Mutex;

/// A repository call as seen by the double.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    All,
    ById(i32),
    ByCategory(i32),
}

/// In-memory stand-in for `DbRepository` that records every query it receives.
#[derive(Default)]
pub struct RecordingRepository {
    products: Vec<Product>,
    fail: bool,
    calls: Mutex<Vec<Call>>,
}

pub fn product(id: i32, name: &str, category_id: i32) -> Product {
    Product {
        id,
        category_id,
        product_name: name.to_string(),
        product_description: None,
        product_stock: None,
        product_price: None,
    }
}

impl RecordingRepository {
    /// Rows 1/A/5, 2/B/5 and 3/C/9, stored out of name order.
    pub fn seeded() -> Self {
        Self {
            products: vec![product(3, "C", 9), product(2, "B", 5), product(1, "A", 5)],
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: &'static str, call: Call) -> Result<(), DbError> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(DbError::Query {
                operation,
                source: sqlx::Error::PoolTimedOut,
            });
        }
        Ok(())
    }

    fn sorted_where(&self, keep: impl Fn(&Product) -> bool) -> Vec<Product> {
        let mut rows: Vec<Product> = self.products.iter().filter(|p| keep(p)).cloned().collect();
        rows.sort_by(|a, b| a.product_name.cmp(&b.product_name));
        rows
    }
}

#[async_trait]
impl ProductRepository for RecordingRepository {
    async fn get_products(&self) -> Result<Vec<Product>, DbError> {
        self.record("get_products", Call::All)?;
        Ok(self.sorted_where(|_| true))
    }

    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, DbError> {
        self.record("get_product_by_id", Call::ById(id.get()))?;
        Ok(self.products.iter().find(|p| p.id == id.get()).cloned())
    }

    async fn get_products_by_category_id(
        &self,
        category_id: CategoryId,
    ) -> Result<Vec<Product>, DbError> {
        self.record("get_products_by_category_id", Call::ByCategory(category_id.get()))?;
        Ok(self.sorted_where(|p| p.category_id == category_id.get()))
    }
}
