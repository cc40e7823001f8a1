use serde::{Deserialize, Serialize};

use crate::domain::common::money::sum_money;
use crate::domain::common::validation::{
    non_empty, require_non_negative, require_text, validate_date,
};
use crate::domain::common::{line_total, EntityId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    #[default]
    Draft,
    Received,
    Cancelled,
}

impl InvoiceStatus {
    pub fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "Draft",
            InvoiceStatus::Received => "Received",
            InvoiceStatus::Cancelled => "Cancelled",
        }
    }

    /// Only drafts can be received into stock.
    pub fn can_receive(self) -> bool {
        self == InvoiceStatus::Draft
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInvoiceLine {
    pub product_id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,
    pub quantity: i64,
    pub unit_cost: f64,
}

impl PurchaseInvoiceLine {
    pub fn total(&self) -> f64 {
        line_total(self.quantity as f64, self.unit_cost)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.product_id <= 0 {
            return Err("Select a product for every line".into());
        }
        if self.quantity <= 0 {
            return Err("Line quantity must be at least 1".into());
        }
        require_non_negative(self.unit_cost, "Unit cost")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PurchaseInvoice {
    pub id: EntityId,
    pub supplier_id: EntityId,
    #[serde(default)]
    pub supplier_name: Option<String>,
    pub location_id: EntityId,
    pub invoice_number: String,
    pub invoice_date: String,
    #[serde(default)]
    pub status: InvoiceStatus,
    #[serde(default)]
    pub lines: Vec<PurchaseInvoiceLine>,
    #[serde(default)]
    pub total: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Sum of line totals.
pub fn invoice_total(lines: &[PurchaseInvoiceLine]) -> f64 {
    sum_money(lines.iter().map(PurchaseInvoiceLine::total))
}

/// Create payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PurchaseInvoiceDto {
    pub supplier_id: EntityId,
    pub location_id: EntityId,
    pub invoice_number: String,
    pub invoice_date: String,
    pub lines: Vec<PurchaseInvoiceLine>,
    pub notes: Option<String>,
}

impl PurchaseInvoiceDto {
    pub fn total(&self) -> f64 {
        invoice_total(&self.lines)
    }

    pub fn normalized(mut self) -> Self {
        self.invoice_number = self.invoice_number.trim().to_string();
        self.notes = self.notes.as_deref().and_then(non_empty);
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.supplier_id <= 0 {
            return Err("Supplier is required".into());
        }
        if self.location_id <= 0 {
            return Err("Location is required".into());
        }
        require_text(&self.invoice_number, "Invoice number")?;
        validate_date(&self.invoice_date, "Invoice date")?;
        if self.lines.is_empty() {
            return Err("Add at least one line".into());
        }
        for line in &self.lines {
            line.validate()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(product_id: EntityId, quantity: i64, unit_cost: f64) -> PurchaseInvoiceLine {
        PurchaseInvoiceLine { product_id, product_name: None, quantity, unit_cost }
    }

    fn dto() -> PurchaseInvoiceDto {
        PurchaseInvoiceDto {
            supplier_id: 2,
            location_id: 1,
            invoice_number: "INV-77".into(),
            invoice_date: "2024-05-02".into(),
            lines: vec![line(10, 3, 2.5), line(11, 1, 19.99)],
            notes: None,
        }
    }

    #[test]
    fn test_totals() {
        assert_eq!(line(1, 3, 2.5).total(), 7.5);
        assert_eq!(dto().total(), 27.49);
        assert_eq!(invoice_total(&[]), 0.0);
    }

    #[test]
    fn test_validate() {
        assert!(dto().validate().is_ok());

        let mut d = dto();
        d.lines.clear();
        assert_eq!(d.validate().unwrap_err(), "Add at least one line");

        let mut d = dto();
        d.lines[1].quantity = 0;
        assert_eq!(d.validate().unwrap_err(), "Line quantity must be at least 1");

        let mut d = dto();
        d.invoice_date = "yesterday".into();
        assert!(d.validate().is_err());

        let mut d = dto();
        d.supplier_id = 0;
        assert_eq!(d.validate().unwrap_err(), "Supplier is required");
    }

    #[test]
    fn test_status() {
        assert!(InvoiceStatus::Draft.can_receive());
        assert!(!InvoiceStatus::Received.can_receive());
        let s: InvoiceStatus = serde_json::from_str("\"cancelled\"").unwrap();
        assert_eq!(s, InvoiceStatus::Cancelled);
    }
}
