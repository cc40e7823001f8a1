use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;

/// Headline figures for `GET /reports/dashboard`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardSummary {
    #[serde(default)]
    pub sales_today: f64,
    #[serde(default)]
    pub orders_today: i64,
    #[serde(default)]
    pub orders_open: i64,
    #[serde(default)]
    pub repairs_in_progress: i64,
    #[serde(default)]
    pub low_stock_count: i64,
    #[serde(default)]
    pub cash_total: f64,
    #[serde(default)]
    pub lost_sales_week: i64,
}

impl DashboardSummary {
    /// Average ticket for today, `None` before the first sale.
    pub fn average_ticket(&self) -> Option<f64> {
        if self.orders_today <= 0 {
            None
        } else {
            Some(crate::domain::common::round_money(
                self.sales_today / self.orders_today as f64,
            ))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesByDay {
    pub date: String,
    #[serde(default)]
    pub orders: i64,
    #[serde(default)]
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LowStockItem {
    pub product_id: EntityId,
    pub sku: String,
    pub name: String,
    pub stock_qty: i64,
    pub reorder_level: i64,
}

impl LowStockItem {
    /// Units needed to get back to the reorder level.
    pub fn shortfall(&self) -> i64 {
        (self.reorder_level - self.stock_qty).max(0)
    }
}

/// Query string for the dashboard endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReportQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_id: Option<EntityId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_average_ticket() {
        let mut s = DashboardSummary::default();
        assert_eq!(s.average_ticket(), None);
        s.sales_today = 100.0;
        s.orders_today = 3;
        assert_eq!(s.average_ticket(), Some(33.33));
    }

    #[test]
    fn test_summary_tolerates_missing_fields() {
        let s: DashboardSummary = serde_json::from_str(r#"{"sales_today": 12.5}"#).unwrap();
        assert_eq!(s.sales_today, 12.5);
        assert_eq!(s.orders_open, 0);
    }

    #[test]
    fn test_shortfall() {
        let item = LowStockItem {
            product_id: 1,
            sku: "A".into(),
            name: "A".into(),
            stock_qty: 2,
            reorder_level: 5,
        };
        assert_eq!(item.shortfall(), 3);
        let item = LowStockItem { stock_qty: 9, ..item };
        assert_eq!(item.shortfall(), 0);
    }
}
