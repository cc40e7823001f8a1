use contracts::domain::a002_product::aggregate::Product;
use contracts::domain::a008_lost_sale::aggregate::{LostSale, LostSaleDto, LostSaleReason};
use contracts::domain::common::validation::{non_empty, parse_quantity};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a008_lost_sale::api;
use crate::shared::form::parse_id;

/// Either `product_id` points at a catalogue product or `product_name`
/// describes something the shop does not stock.
#[derive(Debug, Clone, PartialEq)]
pub struct LostSaleForm {
    pub product_id: String,
    pub product_name: String,
    pub quantity: String,
    pub reason: LostSaleReason,
    pub customer_id: String,
    pub notes: String,
}

impl Default for LostSaleForm {
    fn default() -> Self {
        Self {
            product_id: String::new(),
            product_name: String::new(),
            quantity: "1".into(),
            reason: LostSaleReason::default(),
            customer_id: String::new(),
            notes: String::new(),
        }
    }
}

impl LostSaleForm {
    pub fn to_dto(&self, location_id: Option<i64>, products: &[Product]) -> Result<LostSaleDto, String> {
        let product = parse_id(&self.product_id).and_then(|id| products.iter().find(|p| p.id == id));
        let product_name = match product {
            Some(p) => p.name.clone(),
            None => self.product_name.clone(),
        };
        let dto = LostSaleDto {
            product_id: product.map(|p| p.id),
            product_name,
            quantity: parse_quantity(&self.quantity, "Quantity")?,
            reason: self.reason,
            customer_id: parse_id(&self.customer_id),
            notes: non_empty(&self.notes),
            location_id: location_id.unwrap_or(0),
        }
        .normalized();
        dto.validate()?;
        Ok(dto)
    }
}

#[derive(Clone, Copy)]
pub struct LostSaleViewModel {
    pub form: RwSignal<LostSaleForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl LostSaleViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(LostSaleForm::default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(
        &self,
        location_id: Option<i64>,
        products: &[Product],
        on_saved: Callback<LostSale>,
    ) {
        let dto = match self.form.with_untracked(|f| f.to_dto(location_id, products)) {
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
            let result = api::record_lost_sale(&dto).await;
            saving.set(false);
            match result {
                Ok(lost) => on_saved.run(lost),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogue() -> Vec<Product> {
        vec![Product {
            id: 5,
            sku: "SCR-12".into(),
            name: "Screen protector".into(),
            description: None,
            category: None,
            price: 9.99,
            cost: 2.0,
            stock_qty: 0,
            reorder_level: 3,
            is_active: true,
        }]
    }

    #[test]
    fn test_catalogue_product_takes_its_name() {
        let form = LostSaleForm {
            product_id: "5".into(),
            product_name: "ignored".into(),
            ..Default::default()
        };
        let dto = form.to_dto(Some(1), &catalogue()).unwrap();
        assert_eq!(dto.product_id, Some(5));
        assert_eq!(dto.product_name, "Screen protector");
        assert_eq!(dto.quantity, 1);
        assert_eq!(dto.reason, LostSaleReason::OutOfStock);
    }

    #[test]
    fn test_free_text_product() {
        let form = LostSaleForm {
            product_name: "  Vintage charger ".into(),
            quantity: "2".into(),
            reason: LostSaleReason::Other,
            notes: "  ".into(),
            ..Default::default()
        };
        let dto = form.to_dto(Some(1), &catalogue()).unwrap();
        assert_eq!(dto.product_id, None);
        assert_eq!(dto.product_name, "Vintage charger");
        assert_eq!(dto.notes, None);
    }

    #[test]
    fn test_requires_product_quantity_and_shift() {
        let form = LostSaleForm::default();
        assert_eq!(form.to_dto(Some(1), &[]).unwrap_err(), "Product is required");

        let form = LostSaleForm {
            product_name: "Cable".into(),
            quantity: "0".into(),
            ..Default::default()
        };
        assert_eq!(form.to_dto(Some(1), &[]).unwrap_err(), "Quantity must be at least 1");

        let form = LostSaleForm {
            product_name: "Cable".into(),
            ..Default::default()
        };
        assert_eq!(form.to_dto(None, &[]).unwrap_err(), "An active shift is required");
    }
}
