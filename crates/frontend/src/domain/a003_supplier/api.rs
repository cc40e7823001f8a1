use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, ApiError> {
    get_json("/suppliers/").await
}

pub async fn create_supplier(dto: &SupplierDto) -> Result<Supplier, ApiError> {
    post_json("/suppliers/", dto).await
}

pub async fn update_supplier(id: i64, dto: &SupplierDto) -> Result<Supplier, ApiError> {
    put_json(&format!("/suppliers/{}", id), dto).await
}

pub async fn delete_supplier(id: i64) -> Result<(), ApiError> {
    delete(&format!("/suppliers/{}", id)).await
}
