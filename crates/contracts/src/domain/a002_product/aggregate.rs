use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{
    max_length, non_empty, require_non_negative, require_text,
};
use crate::domain::common::{round_money, EntityId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: EntityId,
    pub sku: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    pub price: f64,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub stock_qty: i64,
    #[serde(default)]
    pub reorder_level: i64,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

impl Product {
    pub fn is_low_stock(&self) -> bool {
        self.stock_qty <= self.reorder_level
    }

    /// Gross margin as a share of price, `None` for free items.
    pub fn margin(&self) -> Option<f64> {
        if self.price <= 0.0 {
            return None;
        }
        Some((self.price - self.cost) / self.price)
    }

    /// Case-insensitive match on SKU, name and category.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.sku.to_lowercase().contains(&q)
            || self.name.to_lowercase().contains(&q)
            || self
                .category
                .as_deref()
                .map(|c| c.to_lowercase().contains(&q))
                .unwrap_or(false)
    }
}

/// Create / update payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductDto {
    pub sku: String,
    pub name: String,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: f64,
    pub cost: f64,
    pub stock_qty: i64,
    pub reorder_level: i64,
    pub is_active: bool,
}

impl ProductDto {
    pub fn from_product(p: &Product) -> Self {
        Self {
            sku: p.sku.clone(),
            name: p.name.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            price: p.price,
            cost: p.cost,
            stock_qty: p.stock_qty,
            reorder_level: p.reorder_level,
            is_active: p.is_active,
        }
    }

    pub fn normalized(mut self) -> Self {
        self.sku = self.sku.trim().to_uppercase();
        self.name = self.name.trim().to_string();
        self.description = self.description.as_deref().and_then(non_empty);
        self.category = self.category.as_deref().and_then(non_empty);
        self.price = round_money(self.price);
        self.cost = round_money(self.cost);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        require_text(&self.sku, "SKU")?;
        max_length(&self.sku, 40, "SKU")?;
        require_text(&self.name, "Name")?;
        max_length(&self.name, 200, "Name")?;
        require_non_negative(self.price, "Price")?;
        require_non_negative(self.cost, "Cost")?;
        if self.stock_qty < 0 {
            return Err("Stock cannot be negative".into());
        }
        if self.reorder_level < 0 {
            return Err("Reorder level cannot be negative".into());
        }
        Ok(())
    }
}

/// Partial update used to (de)activate a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductActivePatch {
    pub is_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product {
            id: 1,
            sku: "CBL-USB-C".into(),
            name: "USB-C cable".into(),
            description: None,
            category: Some("Accessories".into()),
            price: 10.0,
            cost: 4.0,
            stock_qty: 3,
            reorder_level: 5,
            is_active: true,
        }
    }

    #[test]
    fn test_low_stock_and_margin() {
        let mut p = product();
        assert!(p.is_low_stock());
        p.stock_qty = 6;
        assert!(!p.is_low_stock());
        assert_eq!(p.margin(), Some(0.6));
        p.price = 0.0;
        assert_eq!(p.margin(), None);
    }

    #[test]
    fn test_matches() {
        let p = product();
        assert!(p.matches("usb"));
        assert!(p.matches("accessor"));
        assert!(p.matches(""));
        assert!(!p.matches("screen"));
    }

    #[test]
    fn test_dto_validate() {
        let dto = ProductDto::from_product(&product());
        assert!(dto.validate().is_ok());

        let mut bad = dto.clone();
        bad.price = -1.0;
        assert_eq!(bad.validate().unwrap_err(), "Price cannot be negative");

        let mut bad = dto.clone();
        bad.sku = " ".into();
        assert_eq!(bad.validate().unwrap_err(), "SKU is required");

        let mut bad = dto;
        bad.stock_qty = -2;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_dto_normalized() {
        let dto = ProductDto {
            sku: " scr-01 ".into(),
            name: " Screen ".into(),
            description: Some("".into()),
            price: 12.346,
            ..Default::default()
        }
        .normalized();
        assert_eq!(dto.sku, "SCR-01");
        assert_eq!(dto.name, "Screen");
        assert_eq!(dto.description, None);
        assert_eq!(dto.price, 12.35);
    }
}
