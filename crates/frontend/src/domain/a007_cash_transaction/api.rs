use contracts::domain::a007_cash_transaction::aggregate::{CashTransaction, CashTransactionRequest};

use crate::shared::api_utils::{get_json, post_json, ApiError};

pub async fn fetch_transactions(account_id: i64) -> Result<Vec<CashTransaction>, ApiError> {
    get_json(&format!("/cash-accounts/{}/transactions/", account_id)).await
}

/// A wrong PIN comes back as 403 with the server's message.
pub async fn create_transaction(request: &CashTransactionRequest) -> Result<CashTransaction, ApiError> {
    post_json("/cash-transactions/", request).await
}
