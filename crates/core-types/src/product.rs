use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `product` table.
///
/// The table layout is owned by the database; field names match the columns
/// so the JSON handed to clients carries the same keys as the row.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub category_id: i32,
    pub product_name: String,
    pub product_description: Option<String>,
    pub product_stock: Option<i32>,
    pub product_price: Option<Decimal>,
}
