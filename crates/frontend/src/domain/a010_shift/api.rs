use contracts::domain::a010_shift::aggregate::{ClockInRequest, ClockOutRequest, Shift};

use crate::shared::api_utils::{get_json, post_json, ApiError};

/// The caller's open shift. The API answers `null` or 404 when there is none.
pub async fn fetch_current_shift() -> Result<Option<Shift>, ApiError> {
    match get_json::<Option<Shift>>("/shifts/current").await {
        Ok(shift) => Ok(shift.filter(Shift::is_open)),
        Err(ApiError::NotFound) => Ok(None),
        Err(e) => Err(e),
    }
}

pub async fn clock_in(request: &ClockInRequest) -> Result<Shift, ApiError> {
    post_json("/shifts/clock-in", request).await
}

pub async fn clock_out(request: &ClockOutRequest) -> Result<Shift, ApiError> {
    post_json("/shifts/clock-out", request).await
}
