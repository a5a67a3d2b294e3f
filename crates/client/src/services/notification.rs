use rideops_core::envelope::ApiResponse;
use rideops_core::models::notification::{NotificationResult, SendBulkRequest, SendToUserRequest};

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn send_to_user(
    api: &ApiClient,
    body: &SendToUserRequest,
) -> Result<ApiResponse<NotificationResult>, ApiError> {
    api.post("/api/notifications/send-to-user", body).await
}

pub async fn send_bulk(
    api: &ApiClient,
    body: &SendBulkRequest,
) -> Result<ApiResponse<NotificationResult>, ApiError> {
    api.post("/api/notifications/send-bulk", body).await
}

/// Push a test notification to the caller's own devices.
pub async fn send_test(api: &ApiClient) -> Result<ApiResponse<NotificationResult>, ApiError> {
    api.post_empty("/api/notifications/test").await
}
