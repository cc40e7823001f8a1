use contracts::domain::a002_product::aggregate::{Product, ProductDto};
use contracts::domain::common::validation::{parse_amount, parse_count};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_product::api;

/// Raw text of the product form. Numbers stay strings until submit so a
/// half-typed value like `12.` is not rejected while editing.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductForm {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub price: String,
    pub cost: String,
    pub stock_qty: String,
    pub reorder_level: String,
    pub is_active: bool,
}

impl Default for ProductForm {
    fn default() -> Self {
        Self {
            sku: String::new(),
            name: String::new(),
            category: String::new(),
            description: String::new(),
            price: String::new(),
            cost: "0".into(),
            stock_qty: "0".into(),
            reorder_level: "0".into(),
            is_active: true,
        }
    }
}

impl ProductForm {
    pub fn from_product(p: &Product) -> Self {
        Self {
            sku: p.sku.clone(),
            name: p.name.clone(),
            category: p.category.clone().unwrap_or_default(),
            description: p.description.clone().unwrap_or_default(),
            price: format!("{:.2}", p.price),
            cost: format!("{:.2}", p.cost),
            stock_qty: p.stock_qty.to_string(),
            reorder_level: p.reorder_level.to_string(),
            is_active: p.is_active,
        }
    }

    pub fn to_dto(&self) -> Result<ProductDto, String> {
        let dto = ProductDto {
            sku: self.sku.clone(),
            name: self.name.clone(),
            description: Some(self.description.clone()),
            category: Some(self.category.clone()),
            price: parse_amount(&self.price, "Price")?,
            cost: parse_amount(&self.cost, "Cost")?,
            stock_qty: parse_count(&self.stock_qty, "Stock")?,
            reorder_level: parse_count(&self.reorder_level, "Reorder level")?,
            is_active: self.is_active,
        }
        .normalized();
        dto.validate()?;
        Ok(dto)
    }
}

#[derive(Clone, Copy)]
pub struct ProductDetailsViewModel {
    pub id: Option<i64>,
    pub form: RwSignal<ProductForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl ProductDetailsViewModel {
    pub fn new(product: Option<&Product>) -> Self {
        Self {
            id: product.map(|p| p.id),
            form: RwSignal::new(product.map(ProductForm::from_product).unwrap_or_default()),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    pub fn save_command(&self, on_saved: Callback<Product>) {
        let dto = match self.form.with_untracked(ProductForm::to_dto) {
            Ok(dto) => dto,
            Err(msg) => {
                self.error.set(Some(msg));
                return;
            }
        };

        let (id, error, saving) = (self.id, self.error, self.saving);
        saving.set(true);
        error.set(None);
        spawn_local(async move {
            let result = match id {
                Some(id) => api::update_product(id, &dto).await,
                None => api::create_product(&dto).await,
            };
            saving.set(false);
            match result {
                Ok(product) => on_saved.run(product),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ProductForm {
        ProductForm {
            sku: " usb-c1 ".into(),
            name: "USB-C cable".into(),
            category: "".into(),
            description: "1 m, braided".into(),
            price: "12,50".into(),
            cost: "4.2".into(),
            stock_qty: "15".into(),
            reorder_level: "".into(),
            is_active: true,
        }
    }

    #[test]
    fn test_to_dto_parses_and_normalizes() {
        let dto = filled().to_dto().unwrap();
        assert_eq!(dto.sku, "USB-C1");
        assert_eq!(dto.price, 12.5);
        assert_eq!(dto.cost, 4.2);
        assert_eq!(dto.stock_qty, 15);
        assert_eq!(dto.reorder_level, 0);
        assert_eq!(dto.category, None);
        assert_eq!(dto.description.as_deref(), Some("1 m, braided"));
    }

    #[test]
    fn test_to_dto_rejects_bad_numbers() {
        let mut form = filled();
        form.price = "-1".into();
        assert_eq!(form.to_dto().unwrap_err(), "Price cannot be negative");

        let mut form = filled();
        form.stock_qty = "2.5".into();
        assert_eq!(form.to_dto().unwrap_err(), "Stock must be a whole number");

        let mut form = filled();
        form.price = "".into();
        assert_eq!(form.to_dto().unwrap_err(), "Price is required");
    }

    #[test]
    fn test_to_dto_requires_sku_and_name() {
        let mut form = filled();
        form.sku = "  ".into();
        assert_eq!(form.to_dto().unwrap_err(), "SKU is required");
    }

    #[test]
    fn test_from_product_round_trips_values() {
        let product = Product {
            id: 7,
            sku: "BAT-01".into(),
            name: "Battery".into(),
            description: None,
            category: Some("Parts".into()),
            price: 30.0,
            cost: 18.5,
            stock_qty: 2,
            reorder_level: 5,
            is_active: false,
        };
        let form = ProductForm::from_product(&product);
        assert_eq!(form.price, "30.00");
        assert_eq!(form.category, "Parts");
        assert!(!form.is_active);
        let dto = form.to_dto().unwrap();
        assert_eq!(dto.cost, 18.5);
        assert_eq!(dto.reorder_level, 5);
    }
}
