use rideops_core::envelope::{ApiResponse, MessageResponse, Paginated, StatusSummary};
use rideops_core::filter::ListQuery;
use rideops_core::models::wallet::{TopupDecision, TopupDecisionRequest, WalletRequest};
use rideops_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn list_topups(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<ApiResponse<Paginated<WalletRequest>>, ApiError> {
    api.get_with_query("/api/admin/wallet/request-topup", query)
        .await
}

/// Counts by status; this endpoint reports `approved`, not `approve`.
pub async fn summary(api: &ApiClient) -> Result<ApiResponse<StatusSummary>, ApiError> {
    api.get("/api/admin/wallet/request-topup/summary-status")
        .await
}

pub async fn update_request_status(
    api: &ApiClient,
    request_id: DbId,
    status: TopupDecision,
    admin_note: &str,
) -> Result<MessageResponse, ApiError> {
    let body = TopupDecisionRequest {
        status,
        admin_note: admin_note.to_string(),
    };
    api.put(&format!("/api/admin/wallet/request-topup/{request_id}"), &body)
        .await
}
