use contracts::domain::a009_order::aggregate::{Order, OrderDto, OrderStatus, OrderStatusUpdate};
use serde::Serialize;

use crate::shared::api_utils::{get_json, patch_json, post_json, with_query, ApiError};

#[derive(Debug, Default, Serialize)]
struct OrderQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<OrderStatus>,
}

pub async fn fetch_orders(status: Option<OrderStatus>) -> Result<Vec<Order>, ApiError> {
    get_json(&with_query("/orders/", &OrderQuery { status })).await
}

/// Used for both POS sales and repair orders.
pub async fn create_order(dto: &OrderDto) -> Result<Order, ApiError> {
    post_json("/orders/", dto).await
}

pub async fn update_order_status(id: i64, status: OrderStatus) -> Result<Order, ApiError> {
    patch_json(&format!("/orders/{}/status", id), &OrderStatusUpdate { status }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_query() {
        let query = OrderQuery { status: Some(OrderStatus::InProgress) };
        assert_eq!(with_query("/orders/", &query), "/orders/?status=in_progress");
        assert_eq!(with_query("/orders/", &OrderQuery::default()), "/orders/");
    }
}
