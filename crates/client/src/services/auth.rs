use rideops_core::envelope::{ApiResponse, MessageResponse};
use rideops_core::models::account::{
    GoogleLoginRequest, LoginRequest, LoginResult, RegisterAccountRequest,
};

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn register(
    api: &ApiClient,
    body: &RegisterAccountRequest,
) -> Result<MessageResponse, ApiError> {
    api.post("/api/auth/register", body).await
}

pub async fn login(
    api: &ApiClient,
    credentials: &LoginRequest,
) -> Result<ApiResponse<LoginResult>, ApiError> {
    api.post("/api/auth/login", credentials).await
}

pub async fn login_with_google(
    api: &ApiClient,
    body: &GoogleLoginRequest,
) -> Result<ApiResponse<LoginResult>, ApiError> {
    api.post("/api/auth/google", body).await
}

pub async fn logout(api: &ApiClient) -> Result<MessageResponse, ApiError> {
    api.post_empty("/api/logout").await
}
