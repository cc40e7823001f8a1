use contracts::domain::a004_customer::aggregate::{Customer, CustomerDto};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};

pub async fn fetch_customers() -> Result<Vec<Customer>, ApiError> {
    get_json("/customers/").await
}

pub async fn create_customer(dto: &CustomerDto) -> Result<Customer, ApiError> {
    post_json("/customers/", dto).await
}

pub async fn update_customer(id: i64, dto: &CustomerDto) -> Result<Customer, ApiError> {
    put_json(&format!("/customers/{}", id), dto).await
}

pub async fn delete_customer(id: i64) -> Result<(), ApiError> {
    delete(&format!("/customers/{}", id)).await
}
