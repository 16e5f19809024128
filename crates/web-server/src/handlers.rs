use crate::{error::AppError, AppState};
use axum::{
    extract::{Path, State},
    Json,
};
use core_types::Product;
use serde_json::Value;
use std::sync::Arc;

/// # GET /product
/// All products, ordered by name.
pub async fn get_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.products.get_products().await?;
    Ok(Json(products))
}

/// # GET /product/:id
pub async fn get_product_by_id(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Product>, AppError> {
    let product = state
        .products
        .get_product_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("No product with id {id}")))?;
    Ok(Json(product))
}

/// # GET /product/bycat/:id
/// Products in one category, ordered by name.
pub async fn get_products_by_category_id(
    Path(category_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state
        .products
        .get_products_by_category_id(&category_id)
        .await?;
    Ok(Json(products))
}

/// # POST /product
/// Echoes the submitted body. Nothing is stored.
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    Json(product): Json<Value>,
) -> Json<Value> {
    state.products.create_product(&product).await;
    Json(product)
}

/// # PUT /product/:id
pub async fn update_product(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    body: Option<Json<Value>>,
) -> Json<String> {
    let product = body.map(|Json(value)| value);
    state.products.update_product(&id, product.as_ref()).await;
    Json(format!("This will update product with id = {id}"))
}

/// # DELETE /product/:id
pub async fn delete_product(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Json<String> {
    state.products.delete_product(&id).await;
    Json(format!("This will delete product with id = {id}"))
}
