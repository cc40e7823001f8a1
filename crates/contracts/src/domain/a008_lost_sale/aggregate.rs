use serde::{Deserialize, Serialize};

use crate::domain::common::validation::{max_length, non_empty, require_text};
use crate::domain::common::EntityId;

/// Why a customer left without buying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LostSaleReason {
    #[default]
    OutOfStock,
    Price,
    Other,
}

impl LostSaleReason {
    pub const ALL: [LostSaleReason; 3] =
        [LostSaleReason::OutOfStock, LostSaleReason::Price, LostSaleReason::Other];

    pub fn as_str(self) -> &'static str {
        match self {
            LostSaleReason::OutOfStock => "out_of_stock",
            LostSaleReason::Price => "price",
            LostSaleReason::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LostSaleReason::OutOfStock => "Out of stock",
            LostSaleReason::Price => "Price",
            LostSaleReason::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "price" => LostSaleReason::Price,
            "other" => LostSaleReason::Other,
            _ => LostSaleReason::OutOfStock,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LostSale {
    pub id: EntityId,
    #[serde(default)]
    pub product_id: Option<EntityId>,
    pub product_name: String,
    pub quantity: i64,
    #[serde(default)]
    pub reason: LostSaleReason,
    #[serde(default)]
    pub customer_id: Option<EntityId>,
    #[serde(default)]
    pub notes: Option<String>,
    pub location_id: EntityId,
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LostSaleDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<EntityId>,
    pub product_name: String,
    pub quantity: i64,
    pub reason: LostSaleReason,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<EntityId>,
    pub notes: Option<String>,
    pub location_id: EntityId,
}

impl LostSaleDto {
    pub fn normalized(mut self) -> Self {
        self.product_name = self.product_name.trim().to_string();
        self.notes = self.notes.as_deref().and_then(non_empty);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        // Either a catalogue product or a free-text description
        if self.product_id.is_none() {
            require_text(&self.product_name, "Product")?;
        }
        max_length(&self.product_name, 200, "Product")?;
        if self.quantity < 1 {
            return Err("Quantity must be at least 1".into());
        }
        if self.location_id <= 0 {
            return Err("An active shift is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        let dto = LostSaleDto {
            product_name: "iPhone 12 screen".into(),
            quantity: 1,
            location_id: 3,
            ..Default::default()
        };
        assert!(dto.validate().is_ok());

        let catalogue = LostSaleDto { product_id: Some(5), product_name: String::new(), ..dto.clone() };
        assert!(catalogue.validate().is_ok());

        let bad = LostSaleDto { product_name: " ".into(), ..dto.clone() };
        assert_eq!(bad.validate().unwrap_err(), "Product is required");

        let bad = LostSaleDto { quantity: 0, ..dto };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_reason_serde() {
        assert_eq!(serde_json::to_string(&LostSaleReason::OutOfStock).unwrap(), "\"out_of_stock\"");
        for r in LostSaleReason::ALL {
            assert_eq!(LostSaleReason::parse(r.as_str()), r);
        }
    }
}
