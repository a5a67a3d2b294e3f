//! Platform services and the regencies tariffs can target.

use rideops_core::envelope::{ApiResponse, MessageResponse};
use rideops_core::models::service::{Regency, Service};
use rideops_core::models::AvailabilityUpdate;
use rideops_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn list(api: &ApiClient) -> Result<ApiResponse<Vec<Service>>, ApiError> {
    api.get("/api/services").await
}

pub async fn update_status(
    api: &ApiClient,
    id: DbId,
    is_available: bool,
) -> Result<MessageResponse, ApiError> {
    api.put(
        &format!("/api/services/{id}/status"),
        &AvailabilityUpdate { is_available },
    )
    .await
}

pub async fn regencies(api: &ApiClient) -> Result<ApiResponse<Vec<Regency>>, ApiError> {
    api.get("/api/admin/regencies").await
}
