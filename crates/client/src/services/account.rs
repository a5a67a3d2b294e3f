use rideops_core::envelope::{ApiResponse, MessageResponse};
use rideops_core::models::account::{PasswordChange, ProfileUpdate};
use rideops_core::models::user::User;

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn profile(api: &ApiClient) -> Result<ApiResponse<User>, ApiError> {
    api.get("/api/me").await
}

pub async fn update_profile(
    api: &ApiClient,
    body: &ProfileUpdate,
) -> Result<MessageResponse, ApiError> {
    api.put("/api/me", body).await
}

pub async fn update_password(
    api: &ApiClient,
    body: &PasswordChange,
) -> Result<MessageResponse, ApiError> {
    api.put("/api/me/password", body).await
}
