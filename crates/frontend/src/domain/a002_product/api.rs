use contracts::domain::a002_product::aggregate::{Product, ProductActivePatch, ProductDto};

use crate::shared::api_utils::{get_json, patch_json, post_json, put_json, ApiError};

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json("/products/").await
}

/// Active products only, for pickers in POS, purchases and lost sales.
pub async fn fetch_active_products() -> Result<Vec<Product>, ApiError> {
    let mut products = fetch_products().await?;
    products.retain(|p| p.is_active);
    products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(products)
}

pub async fn create_product(dto: &ProductDto) -> Result<Product, ApiError> {
    post_json("/products/", dto).await
}

pub async fn update_product(id: i64, dto: &ProductDto) -> Result<Product, ApiError> {
    put_json(&format!("/products/{}", id), dto).await
}

pub async fn set_product_active(id: i64, is_active: bool) -> Result<Product, ApiError> {
    patch_json(&format!("/products/{}", id), &ProductActivePatch { is_active }).await
}
