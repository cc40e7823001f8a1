use contracts::domain::a005_purchase_invoice::aggregate::{
    invoice_total, PurchaseInvoice, PurchaseInvoiceDto, PurchaseInvoiceLine,
};
use contracts::domain::common::validation::{parse_amount, parse_quantity};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a005_purchase_invoice::api;
use crate::shared::date_utils::today_iso;
use crate::shared::form::{id_to_value, parse_id};

/// One editable invoice line. `key` identifies the row while lines are
/// added and removed.
#[derive(Debug, Clone, PartialEq)]
pub struct LineForm {
    pub key: u32,
    pub product_id: String,
    pub quantity: String,
    pub unit_cost: String,
}

impl LineForm {
    fn to_line(&self, number: usize) -> Result<PurchaseInvoiceLine, String> {
        let product_id =
            parse_id(&self.product_id).ok_or_else(|| format!("Line {}: select a product", number))?;
        let quantity = parse_quantity(&self.quantity, "Quantity")
            .map_err(|e| format!("Line {}: {}", number, e))?;
        let unit_cost = parse_amount(&self.unit_cost, "Unit cost")
            .map_err(|e| format!("Line {}: {}", number, e))?;
        Ok(PurchaseInvoiceLine {
            product_id,
            product_name: None,
            quantity,
            unit_cost,
        })
    }

    /// The line as far as it parses; incomplete lines count as zero.
    fn partial_line(&self) -> Option<PurchaseInvoiceLine> {
        Some(PurchaseInvoiceLine {
            product_id: 0,
            product_name: None,
            quantity: self.quantity.trim().parse().ok().filter(|q: &i64| *q > 0)?,
            unit_cost: parse_amount(&self.unit_cost, "").ok()?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseForm {
    pub supplier_id: String,
    pub location_id: String,
    pub invoice_number: String,
    pub invoice_date: String,
    pub notes: String,
    pub lines: Vec<LineForm>,
    next_key: u32,
}

impl PurchaseForm {
    pub fn new(location_id: Option<i64>, invoice_date: String) -> Self {
        let mut form = Self {
            supplier_id: String::new(),
            location_id: id_to_value(location_id),
            invoice_number: String::new(),
            invoice_date,
            notes: String::new(),
            lines: Vec::new(),
            next_key: 0,
        };
        form.add_line();
        form
    }

    pub fn add_line(&mut self) {
        self.next_key += 1;
        self.lines.push(LineForm {
            key: self.next_key,
            product_id: String::new(),
            quantity: "1".into(),
            unit_cost: String::new(),
        });
    }

    pub fn remove_line(&mut self, key: u32) {
        self.lines.retain(|l| l.key != key);
    }

    pub fn update_line(&mut self, key: u32, apply: impl FnOnce(&mut LineForm)) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.key == key) {
            apply(line);
        }
    }

    /// Running total shown under the lines while typing.
    pub fn live_total(&self) -> f64 {
        let lines: Vec<PurchaseInvoiceLine> =
            self.lines.iter().filter_map(LineForm::partial_line).collect();
        invoice_total(&lines)
    }

    pub fn to_dto(&self) -> Result<PurchaseInvoiceDto, String> {
        let lines = self
            .lines
            .iter()
            .enumerate()
            .map(|(i, line)| line.to_line(i + 1))
            .collect::<Result<Vec<_>, _>>()?;
        let dto = PurchaseInvoiceDto {
            supplier_id: parse_id(&self.supplier_id).unwrap_or(0),
            location_id: parse_id(&self.location_id).unwrap_or(0),
            invoice_number: self.invoice_number.clone(),
            invoice_date: self.invoice_date.clone(),
            lines,
            notes: Some(self.notes.clone()),
        }
        .normalized();
        dto.validate()?;
        Ok(dto)
    }
}

#[derive(Clone, Copy)]
pub struct PurchaseDetailsViewModel {
    pub form: RwSignal<PurchaseForm>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
}

impl PurchaseDetailsViewModel {
    pub fn new(location_id: Option<i64>) -> Self {
        Self {
            form: RwSignal::new(PurchaseForm::new(location_id, today_iso())),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
        }
    }

    pub fn save_command(&self, on_saved: Callback<PurchaseInvoice>) {
        let dto = match self.form.with_untracked(PurchaseForm::to_dto) {
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
            let result = api::create_invoice(&dto).await;
            saving.set(false);
            match result {
                Ok(invoice) => on_saved.run(invoice),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> PurchaseForm {
        let mut form = PurchaseForm::new(Some(2), "2024-03-15".into());
        form.supplier_id = "4".into();
        form.invoice_number = " INV-100 ".into();
        let key = form.lines[0].key;
        form.update_line(key, |l| {
            l.product_id = "10".into();
            l.quantity = "3".into();
            l.unit_cost = "2.50".into();
        });
        form
    }

    #[test]
    fn test_new_form_has_one_line() {
        let form = PurchaseForm::new(None, "2024-03-15".into());
        assert_eq!(form.lines.len(), 1);
        assert_eq!(form.location_id, "");
    }

    #[test]
    fn test_add_and_remove_lines_keep_keys_unique() {
        let mut form = form();
        form.add_line();
        form.add_line();
        let keys: Vec<u32> = form.lines.iter().map(|l| l.key).collect();
        assert_eq!(keys, vec![1, 2, 3]);
        form.remove_line(2);
        form.add_line();
        let keys: Vec<u32> = form.lines.iter().map(|l| l.key).collect();
        assert_eq!(keys, vec![1, 3, 4]);
    }

    #[test]
    fn test_live_total_skips_incomplete_lines() {
        let mut form = form();
        form.add_line();
        let key = form.lines[1].key;
        form.update_line(key, |l| l.unit_cost = "abc".into());
        assert_eq!(form.live_total(), 7.5);
        form.update_line(key, |l| {
            l.quantity = "2".into();
            l.unit_cost = "0.35".into();
        });
        assert_eq!(form.live_total(), 8.2);
    }

    #[test]
    fn test_to_dto() {
        let dto = form().to_dto().unwrap();
        assert_eq!(dto.supplier_id, 4);
        assert_eq!(dto.location_id, 2);
        assert_eq!(dto.invoice_number, "INV-100");
        assert_eq!(dto.notes, None);
        assert_eq!(dto.lines.len(), 1);
        assert_eq!(dto.total(), 7.5);
    }

    #[test]
    fn test_to_dto_reports_line_number() {
        let mut form = form();
        form.add_line();
        assert_eq!(form.to_dto().unwrap_err(), "Line 2: select a product");

        let mut form = self::form();
        let key = form.lines[0].key;
        form.update_line(key, |l| l.quantity = "0".into());
        assert_eq!(form.to_dto().unwrap_err(), "Line 1: Quantity must be at least 1");
    }

    #[test]
    fn test_to_dto_requires_supplier_and_lines() {
        let mut form = form();
        form.supplier_id = String::new();
        assert_eq!(form.to_dto().unwrap_err(), "Supplier is required");

        let mut form = self::form();
        form.lines.clear();
        assert_eq!(form.to_dto().unwrap_err(), "Add at least one line");
    }
}
