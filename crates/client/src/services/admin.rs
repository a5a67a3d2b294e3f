use rideops_core::envelope::{ApiResponse, MessageResponse, Paginated, StatusSummary};
use rideops_core::filter::ListQuery;
use rideops_core::models::admin::Admin;
use rideops_core::models::DecisionNotes;

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn list(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<ApiResponse<Paginated<Admin>>, ApiError> {
    api.get_with_query("/api/admin/admins", query).await
}

pub async fn summary(api: &ApiClient) -> Result<ApiResponse<StatusSummary>, ApiError> {
    api.get("/api/admin/admins/summary-status").await
}

pub async fn approve(
    api: &ApiClient,
    admin_uuid: &str,
    notes: &DecisionNotes,
) -> Result<MessageResponse, ApiError> {
    api.put(&format!("/api/admin/admins/{admin_uuid}/approved"), notes)
        .await
}

pub async fn reject(
    api: &ApiClient,
    admin_uuid: &str,
    notes: &DecisionNotes,
) -> Result<MessageResponse, ApiError> {
    api.put(&format!("/api/admin/admins/{admin_uuid}/rejected"), notes)
        .await
}
