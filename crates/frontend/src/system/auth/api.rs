use contracts::system::auth::{LoginRequest, TokenResponse, UserInfo};

use crate::shared::api_utils::{get_json, post_form, ApiError};

/// Exchange credentials for an access token (OAuth2 password form)
pub async fn login(request: &LoginRequest) -> Result<TokenResponse, ApiError> {
    post_form(
        "/auth/login",
        &[
            ("username", request.username.trim()),
            ("password", request.password.as_str()),
        ],
    )
    .await
}

/// Get the user the stored token belongs to
pub async fn get_current_user() -> Result<UserInfo, ApiError> {
    get_json("/auth/me").await
}
