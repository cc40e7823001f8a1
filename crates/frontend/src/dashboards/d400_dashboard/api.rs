use contracts::dashboards::d400_dashboard::dto::{
    DashboardSummary, LowStockItem, ReportQuery, SalesByDay,
};

use crate::shared::api_utils::{get_json, with_query, ApiError};

pub async fn get_summary(location_id: Option<i64>) -> Result<DashboardSummary, ApiError> {
    let query = ReportQuery { location_id, days: None };
    get_json(&with_query("/reports/dashboard", &query)).await
}

pub async fn get_sales_by_day(location_id: Option<i64>, days: u32) -> Result<Vec<SalesByDay>, ApiError> {
    let query = ReportQuery { location_id, days: Some(days) };
    get_json(&with_query("/reports/sales-by-day", &query)).await
}

pub async fn get_low_stock(location_id: Option<i64>) -> Result<Vec<LowStockItem>, ApiError> {
    let query = ReportQuery { location_id, days: None };
    get_json(&with_query("/reports/low-stock", &query)).await
}
