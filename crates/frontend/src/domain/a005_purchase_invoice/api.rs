use contracts::domain::a005_purchase_invoice::aggregate::{PurchaseInvoice, PurchaseInvoiceDto};

use crate::shared::api_utils::{get_json, post_action, post_json, ApiError};

pub async fn fetch_invoices() -> Result<Vec<PurchaseInvoice>, ApiError> {
    get_json("/purchase-invoices/").await
}

pub async fn create_invoice(dto: &PurchaseInvoiceDto) -> Result<PurchaseInvoice, ApiError> {
    post_json("/purchase-invoices/", dto).await
}

/// Books the invoice lines into stock at the invoice location.
pub async fn receive_invoice(id: i64) -> Result<PurchaseInvoice, ApiError> {
    post_action(&format!("/purchase-invoices/{}/receive", id)).await
}
