use rideops_core::envelope::{ApiResponse, MessageResponse};
use rideops_core::models::payment_method::PaymentMethod;
use rideops_core::models::AvailabilityUpdate;
use rideops_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn list(api: &ApiClient) -> Result<ApiResponse<Vec<PaymentMethod>>, ApiError> {
    api.get("/api/payment-methods").await
}

pub async fn update_status(
    api: &ApiClient,
    id: DbId,
    is_available: bool,
) -> Result<MessageResponse, ApiError> {
    api.put(
        &format!("/api/payment-methods/{id}/status"),
        &AvailabilityUpdate { is_available },
    )
    .await
}
