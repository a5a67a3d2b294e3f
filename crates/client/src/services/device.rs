use rideops_core::envelope::{ApiResponse, MessageResponse};
use rideops_core::models::device::{Device, FcmTokenUpdate};

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn list(api: &ApiClient) -> Result<ApiResponse<Vec<Device>>, ApiError> {
    api.get("/api/devices").await
}

pub async fn revoke(api: &ApiClient, jti: &str) -> Result<MessageResponse, ApiError> {
    api.delete(&format!("/api/devices/{jti}/revoke")).await
}

/// Register this client's push-notification token.
pub async fn update_fcm_token(api: &ApiClient, fcm_token: &str) -> Result<MessageResponse, ApiError> {
    let body = FcmTokenUpdate {
        fcm_token: fcm_token.to_string(),
    };
    api.put("/api/devices/fcm-token", &body).await
}

pub async fn mine(api: &ApiClient) -> Result<ApiResponse<Vec<Device>>, ApiError> {
    api.get("/api/devices/my").await
}
