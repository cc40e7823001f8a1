use contracts::system::users::{InvitationRequest, InvitationResponse, UpdateUserDto, User};

use crate::shared::api_utils::{get_json, post_json, put_json, ApiError};

/// Fetch all users
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    get_json("/users/").await
}

/// Update role, active flag and contact fields
pub async fn update_user(id: i64, dto: &UpdateUserDto) -> Result<User, ApiError> {
    put_json(&format!("/users/{}", id), dto).await
}

/// Send an invitation e-mail; the account is created when it is accepted
pub async fn send_invitation(request: &InvitationRequest) -> Result<InvitationResponse, ApiError> {
    post_json("/invitations/send", request).await
}
