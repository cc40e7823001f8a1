use contracts::domain::a006_cash_account::aggregate::{CashAccount, CashAccountDto};

use crate::shared::api_utils::{get_json, post_json, ApiError};

pub async fn fetch_accounts() -> Result<Vec<CashAccount>, ApiError> {
    get_json("/cash-accounts/").await
}

pub async fn fetch_account(id: i64) -> Result<CashAccount, ApiError> {
    get_json(&format!("/cash-accounts/{}", id)).await
}

pub async fn create_account(dto: &CashAccountDto) -> Result<CashAccount, ApiError> {
    post_json("/cash-accounts/", dto).await
}
