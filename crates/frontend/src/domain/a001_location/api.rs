use contracts::domain::a001_location::aggregate::{Location, LocationDto};

use crate::shared::api_utils::{get_json, post_json, put_json, ApiError};

pub async fn fetch_locations() -> Result<Vec<Location>, ApiError> {
    get_json("/locations/").await
}

/// Locations a shift can be started at.
pub async fn fetch_active_locations() -> Result<Vec<Location>, ApiError> {
    let mut locations = fetch_locations().await?;
    locations.retain(|l| l.is_active);
    locations.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
    Ok(locations)
}

pub async fn create_location(dto: &LocationDto) -> Result<Location, ApiError> {
    post_json("/locations/", dto).await
}

pub async fn update_location(id: i64, dto: &LocationDto) -> Result<Location, ApiError> {
    put_json(&format!("/locations/{}", id), dto).await
}
