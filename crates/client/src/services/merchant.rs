//! Admin merchant review plus the merchant self-registration endpoints.

use rideops_core::envelope::{ApiResponse, MessageResponse, Paginated, StatusSummary};
use rideops_core::filter::ListQuery;
use rideops_core::models::merchant::{
    BankAccountRequest, DocumentsRequest, MenuItemRequest, Merchant, MerchantDetail,
    NearbyMerchant, NearbyMerchantQuery, ProfileRequest, RegisterRequest, RegisteredMerchant,
    SubmitOnboardingRequest, WaitingProfile,
};
use rideops_core::models::DecisionNotes;

use crate::error::ApiError;
use crate::http::ApiClient;

// ---- admin review ----

pub async fn summary(api: &ApiClient) -> Result<ApiResponse<StatusSummary>, ApiError> {
    api.get("/api/admin/merchants/summary-status").await
}

pub async fn list(
    api: &ApiClient,
    query: &ListQuery,
) -> Result<ApiResponse<Paginated<Merchant>>, ApiError> {
    api.get_with_query("/api/admin/merchants", query).await
}

pub async fn detail(api: &ApiClient, uuid: &str) -> Result<ApiResponse<MerchantDetail>, ApiError> {
    api.get(&format!("/api/admin/merchants/{uuid}")).await
}

/// Approval carries no notes.
pub async fn approve(api: &ApiClient, uuid: &str) -> Result<MessageResponse, ApiError> {
    api.put(
        &format!("/api/admin/merchants/{uuid}/approved"),
        &DecisionNotes::default(),
    )
    .await
}

pub async fn reject(
    api: &ApiClient,
    uuid: &str,
    notes: &DecisionNotes,
) -> Result<MessageResponse, ApiError> {
    api.put(&format!("/api/admin/merchants/{uuid}/rejected"), notes)
        .await
}

pub async fn nearby(
    api: &ApiClient,
    query: &NearbyMerchantQuery,
) -> Result<ApiResponse<Vec<NearbyMerchant>>, ApiError> {
    api.get_with_query("/api/admin/nearby-merchants", query)
        .await
}

// ---- registration ----

/// Step 1.
pub async fn register(
    api: &ApiClient,
    body: &RegisterRequest,
) -> Result<ApiResponse<RegisteredMerchant>, ApiError> {
    api.post("/api/v1/merchant/register", body).await
}

/// The caller's unfinished registration. Answers 4xx when there is none.
pub async fn waiting_profile(api: &ApiClient) -> Result<ApiResponse<WaitingProfile>, ApiError> {
    api.get("/api/v1/merchant/me/waiting").await
}

/// Step 2.
pub async fn update_profile(
    api: &ApiClient,
    body: &ProfileRequest,
) -> Result<MessageResponse, ApiError> {
    api.post("/api/v1/merchant/profile", body).await
}

/// Step 3.
pub async fn update_documents(
    api: &ApiClient,
    body: &DocumentsRequest,
) -> Result<MessageResponse, ApiError> {
    api.post("/api/v1/merchant/documents", body).await
}

/// Step 4.
pub async fn update_bank_account(
    api: &ApiClient,
    body: &BankAccountRequest,
) -> Result<MessageResponse, ApiError> {
    api.post("/api/v1/merchant/bank-account", body).await
}

/// Step 5, one call per menu item.
pub async fn add_menu_item(
    api: &ApiClient,
    body: &MenuItemRequest,
) -> Result<MessageResponse, ApiError> {
    api.post("/api/v1/merchant/menu/items", body).await
}

/// Step 6.
pub async fn submit_onboarding(
    api: &ApiClient,
    body: &SubmitOnboardingRequest,
) -> Result<MessageResponse, ApiError> {
    api.post("/api/v1/merchant/onboarding/submit", body).await
}

pub async fn profile_by_uuid(
    api: &ApiClient,
    uuid: &str,
) -> Result<ApiResponse<WaitingProfile>, ApiError> {
    api.get(&format!("/api/v1/merchant/me/{uuid}")).await
}

pub async fn current_profile(api: &ApiClient) -> Result<ApiResponse<WaitingProfile>, ApiError> {
    api.get("/api/v1/merchant/me").await
}
