use contracts::domain::a009_order::aggregate::{Order, OrderDto, OrderKind, OrderLine};
use contracts::domain::common::validation::{
    non_empty, parse_optional_amount, require_non_negative,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a009_order::api;
use crate::shared::form::parse_id;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RepairForm {
    pub customer_id: String,
    pub device: String,
    pub problem: String,
    /// Quoted price; becomes the single order line when given
    pub estimate: String,
}

impl RepairForm {
    pub fn to_dto(&self, location_id: Option<i64>, shift_id: Option<i64>) -> Result<OrderDto, String> {
        let estimate = parse_optional_amount(&self.estimate, "Estimate")?;
        if let Some(price) = estimate {
            require_non_negative(price, "Estimate")?;
        }
        let lines = match estimate {
            Some(price) if price > 0.0 => vec![OrderLine {
                product_id: None,
                description: format!("Repair: {}", self.device.trim()),
                quantity: 1,
                unit_price: price,
            }],
            _ => Vec::new(),
        };
        let dto = OrderDto {
            kind: OrderKind::Repair,
            customer_id: parse_id(&self.customer_id),
            location_id: location_id.unwrap_or(0),
            shift_id,
            lines,
            discount: 0.0,
            payment_method: None,
            device_description: non_empty(&self.device),
            problem_description: non_empty(&self.problem),
        }
        .normalized();
        dto.validate()?;
        Ok(dto)
    }
}

#[derive(Clone, Copy)]
pub struct RepairOrderViewModel {
    pub form: RwSignal<RepairForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl RepairOrderViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(RepairForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, location_id: Option<i64>, shift_id: Option<i64>, on_saved: Callback<Order>) {
        let dto = match self.form.with_untracked(|f| f.to_dto(location_id, shift_id)) {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let (error, saving) = (self.error, self.saving);
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = api::create_order(&dto).await;
            saving.set(false);
            match result {
                Ok(order) => on_saved.run(order),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RepairForm {
        RepairForm {
            customer_id: "12".into(),
            device: " iPhone 12 ".into(),
            problem: "Cracked screen".into(),
            estimate: "89.90".into(),
        }
    }

    #[test]
    fn test_repair_dto_with_estimate() {
        let dto = form().to_dto(Some(1), Some(40)).unwrap();
        assert_eq!(dto.kind, OrderKind::Repair);
        assert_eq!(dto.customer_id, Some(12));
        assert_eq!(dto.shift_id, Some(40));
        assert_eq!(dto.device_description.as_deref(), Some("iPhone 12"));
        assert_eq!(dto.lines.len(), 1);
        assert_eq!(dto.lines[0].description, "Repair: iPhone 12");
        assert_eq!(dto.total(), 89.9);
    }

    #[test]
    fn test_repair_without_estimate_has_no_lines() {
        let mut f = form();
        f.estimate = String::new();
        let dto = f.to_dto(Some(1), None).unwrap();
        assert!(dto.lines.is_empty());
        assert_eq!(dto.payment_method, None);
    }

    #[test]
    fn test_repair_validation() {
        let mut f = form();
        f.customer_id = String::new();
        assert_eq!(f.to_dto(Some(1), None).unwrap_err(), "Select a customer");

        let mut f = form();
        f.problem = "  ".into();
        assert_eq!(f.to_dto(Some(1), None).unwrap_err(), "Problem description is required");

        let mut f = form();
        f.estimate = "-5".into();
        assert_eq!(f.to_dto(Some(1), None).unwrap_err(), "Estimate cannot be negative");

        assert_eq!(form().to_dto(None, None).unwrap_err(), "An active shift is required");
    }
}
