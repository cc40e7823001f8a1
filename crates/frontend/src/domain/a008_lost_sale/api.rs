use contracts::domain::a008_lost_sale::aggregate::{LostSale, LostSaleDto};

use crate::shared::api_utils::{get_json, post_json, ApiError};

pub async fn fetch_lost_sales() -> Result<Vec<LostSale>, ApiError> {
    get_json("/lost-sales/").await
}

pub async fn record_lost_sale(dto: &LostSaleDto) -> Result<LostSale, ApiError> {
    post_json("/lost-sales/", dto).await
}
