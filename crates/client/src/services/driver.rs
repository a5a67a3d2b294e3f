use rideops_core::envelope::{ApiResponse, MessageResponse, Paginated, StatusSummary};
use rideops_core::filter::ListQuery;
use rideops_core::models::driver::{Driver, DriverDetail, DriverWallet, WalletPageQuery};
use rideops_core::models::DecisionNotes;

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn list(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<ApiResponse<Paginated<Driver>>, ApiError> {
    api.get_with_query("/api/admin/driver", query).await
}

/// Wallet ledger of one driver.
pub async fn wallet(
    api: &ApiClient,
    driver_uuid: &str,
    query: &WalletPageQuery,
) -> Result<ApiResponse<DriverWallet>, ApiError> {
    api.get_with_query(&format!("/api/admin/driver/{driver_uuid}/wallet"), query)
        .await
}

pub async fn detail(
    api: &ApiClient,
    driver_uuid: &str,
) -> Result<ApiResponse<DriverDetail>, ApiError> {
    api.get(&format!("/api/driver/{driver_uuid}")).await
}

pub async fn summary(api: &ApiClient) -> Result<ApiResponse<StatusSummary>, ApiError> {
    api.get("/api/admin/driver/summary-status").await
}

pub async fn approve(
    api: &ApiClient,
    driver_uuid: &str,
    notes: &DecisionNotes,
) -> Result<MessageResponse, ApiError> {
    api.put(&format!("/api/admin/driver/{driver_uuid}/approved"), notes)
        .await
}

pub async fn reject(
    api: &ApiClient,
    driver_uuid: &str,
    notes: &DecisionNotes,
) -> Result<MessageResponse, ApiError> {
    api.put(&format!("/api/admin/driver/{driver_uuid}/rejected"), notes)
        .await
}
