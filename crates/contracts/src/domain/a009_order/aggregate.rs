use serde::{Deserialize, Serialize};

use crate::domain::common::money::sum_money;
use crate::domain::common::validation::{non_empty, require_non_negative, require_text};
use crate::domain::common::{line_total, round_money, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
    #[default]
    Sale,
    Repair,
}

impl OrderKind {
    pub fn label(self) -> &'static str {
        match self {
            OrderKind::Sale => "Sale",
            OrderKind::Repair => "Repair",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Open,
    InProgress,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Open,
        OrderStatus::InProgress,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Open => "open",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrderStatus::Open => "Open",
            OrderStatus::InProgress => "In progress",
            OrderStatus::Ready => "Ready for pickup",
            OrderStatus::Completed => "Completed",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|st| st.as_str() == s)
    }

    /// Statuses the UI offers from the current one.
    pub fn next_statuses(self) -> &'static [OrderStatus] {
        match self {
            OrderStatus::Open => &[OrderStatus::InProgress, OrderStatus::Cancelled],
            OrderStatus::InProgress => &[OrderStatus::Ready, OrderStatus::Cancelled],
            OrderStatus::Ready => &[OrderStatus::Completed],
            OrderStatus::Completed | OrderStatus::Cancelled => &[],
        }
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    pub fn is_terminal(self) -> bool {
        self.next_statuses().is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Cash,
    Card,
    Transfer,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] =
        [PaymentMethod::Cash, PaymentMethod::Card, PaymentMethod::Transfer];

    pub fn as_str(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::Card => "card",
            PaymentMethod::Transfer => "transfer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::Card => "Card",
            PaymentMethod::Transfer => "Bank transfer",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "card" => PaymentMethod::Card,
            "transfer" => PaymentMethod::Transfer,
            _ => PaymentMethod::Cash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<EntityId>,
    pub description: String,
    pub quantity: i64,
    pub unit_price: f64,
}

impl OrderLine {
    pub fn total(&self) -> f64 {
        line_total(self.quantity as f64, self.unit_price)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: EntityId,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub kind: OrderKind,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub customer_id: Option<EntityId>,
    #[serde(default)]
    pub customer_name: Option<String>,
    pub location_id: EntityId,
    #[serde(default)]
    pub lines: Vec<OrderLine>,
    #[serde(default)]
    pub discount: f64,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
    #[serde(default)]
    pub device_description: Option<String>,
    #[serde(default)]
    pub problem_description: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

impl Order {
    pub fn display_number(&self) -> String {
        if self.number.is_empty() {
            format!("#{}", self.id)
        } else {
            self.number.clone()
        }
    }
}

/// Subtotal minus discount, never below zero.
pub fn order_total(lines: &[OrderLine], discount: f64) -> f64 {
    let subtotal = sum_money(lines.iter().map(OrderLine::total));
    round_money((subtotal - discount).max(0.0))
}

/// Create payload for `POST /orders/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OrderDto {
    pub kind: OrderKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<EntityId>,
    pub location_id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_id: Option<EntityId>,
    pub lines: Vec<OrderLine>,
    pub discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub problem_description: Option<String>,
}

impl OrderDto {
    pub fn subtotal(&self) -> f64 {
        sum_money(self.lines.iter().map(OrderLine::total))
    }

    pub fn total(&self) -> f64 {
        order_total(&self.lines, self.discount)
    }

    pub fn normalized(mut self) -> Self {
        self.discount = round_money(self.discount);
        self.device_description = self.device_description.as_deref().and_then(non_empty);
        self.problem_description = self.problem_description.as_deref().and_then(non_empty);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.location_id <= 0 {
            return Err("An active shift is required".into());
        }
        require_non_negative(self.discount, "Discount")?;
        if self.discount > self.subtotal() {
            return Err("Discount cannot exceed the subtotal".into());
        }
        for line in &self.lines {
            require_text(&line.description, "Line description")?;
            if line.quantity <= 0 {
                return Err("Line quantity must be at least 1".into());
            }
            require_non_negative(line.unit_price, "Unit price")?;
        }
        match self.kind {
            OrderKind::Sale => {
                if self.lines.is_empty() {
                    return Err("The cart is empty".into());
                }
                if self.payment_method.is_none() {
                    return Err("Select a payment method".into());
                }
            }
            OrderKind::Repair => {
                if self.customer_id.is_none() {
                    return Err("Select a customer".into());
                }
                require_text(
                    self.device_description.as_deref().unwrap_or(""),
                    "Device",
                )?;
                require_text(
                    self.problem_description.as_deref().unwrap_or(""),
                    "Problem description",
                )?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(qty: i64, price: f64) -> OrderLine {
        OrderLine { product_id: Some(1), description: "Item".into(), quantity: qty, unit_price: price }
    }

    #[test]
    fn test_status_transitions() {
        assert!(OrderStatus::Open.can_transition_to(OrderStatus::InProgress));
        assert!(OrderStatus::Open.can_transition_to(OrderStatus::Cancelled));
        assert!(!OrderStatus::Open.can_transition_to(OrderStatus::Completed));
        assert!(OrderStatus::Ready.can_transition_to(OrderStatus::Completed));
        assert!(!OrderStatus::Ready.can_transition_to(OrderStatus::Cancelled));
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Cancelled.is_terminal());
        assert!(!OrderStatus::InProgress.is_terminal());
    }

    #[test]
    fn test_status_serde() {
        assert_eq!(serde_json::to_string(&OrderStatus::InProgress).unwrap(), "\"in_progress\"");
        for s in OrderStatus::ALL {
            assert_eq!(OrderStatus::parse(s.as_str()), Some(s));
        }
        assert_eq!(OrderStatus::parse("lost"), None);
    }

    #[test]
    fn test_order_total() {
        let lines = vec![line(2, 5.0), line(1, 2.5)];
        assert_eq!(order_total(&lines, 0.0), 12.5);
        assert_eq!(order_total(&lines, 2.5), 10.0);
        assert_eq!(order_total(&lines, 50.0), 0.0);
    }

    #[test]
    fn test_sale_validate() {
        let dto = OrderDto {
            kind: OrderKind::Sale,
            location_id: 1,
            lines: vec![line(1, 10.0)],
            payment_method: Some(PaymentMethod::Card),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let bad = OrderDto { discount: 11.0, ..dto.clone() };
        assert_eq!(bad.validate().unwrap_err(), "Discount cannot exceed the subtotal");

        let bad = OrderDto { lines: vec![], ..dto.clone() };
        assert_eq!(bad.validate().unwrap_err(), "The cart is empty");

        let bad = OrderDto { payment_method: None, ..dto.clone() };
        assert!(bad.validate().is_err());

        let bad = OrderDto { location_id: 0, ..dto };
        assert_eq!(bad.validate().unwrap_err(), "An active shift is required");
    }

    #[test]
    fn test_repair_validate() {
        let dto = OrderDto {
            kind: OrderKind::Repair,
            location_id: 1,
            customer_id: Some(4),
            device_description: Some("Galaxy S21".into()),
            problem_description: Some("Cracked screen".into()),
            ..Default::default()
        };
        assert!(dto.validate().is_ok());
        let bad = OrderDto { customer_id: None, ..dto.clone() };
        assert_eq!(bad.validate().unwrap_err(), "Select a customer");
        let bad = OrderDto { problem_description: None, ..dto };
        assert_eq!(bad.validate().unwrap_err(), "Problem description is required");
    }

    #[test]
    fn test_dto_skips_empty_optionals() {
        let dto = OrderDto { kind: OrderKind::Sale, location_id: 1, ..Default::default() };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("customer_id").is_none());
        assert!(json.get("payment_method").is_none());
        assert_eq!(json["kind"], "sale");
    }
}
