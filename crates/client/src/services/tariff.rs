use rideops_core::envelope::{ApiResponse, MessageResponse};
use rideops_core::models::tariff::{
    IncentiveRequest, PricingPreview, PricingPreviewQuery, RegencyQuery, TariffForm, TariffList,
    TariffQuery,
};

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn list(
    api: &ApiClient,
    query: &TariffQuery,
) -> Result<ApiResponse<TariffList>, ApiError> {
    api.get_with_query("/api/admin/tariffs", query).await
}

pub async fn defaults(api: &ApiClient) -> Result<ApiResponse<TariffList>, ApiError> {
    api.get("/api/admin/tariffs-default").await
}

/// Tariffs effective in a regency, regional ones ahead of defaults.
pub async fn prioritized(
    api: &ApiClient,
    regency_id: &str,
) -> Result<ApiResponse<TariffList>, ApiError> {
    let query = RegencyQuery {
        regency_id: regency_id.to_string(),
    };
    api.get_with_query("/api/admin/tariffs-prioritized", &query)
        .await
}

pub async fn save(api: &ApiClient, form: &TariffForm) -> Result<MessageResponse, ApiError> {
    api.post("/api/admin/tariffs", form).await
}

pub async fn update_incentive(
    api: &ApiClient,
    body: &IncentiveRequest,
) -> Result<MessageResponse, ApiError> {
    api.put("/api/admin/tariffs/incentive", body).await
}

pub async fn pricing_preview(
    api: &ApiClient,
    query: &PricingPreviewQuery,
) -> Result<ApiResponse<PricingPreview>, ApiError> {
    api.get_with_query("/api/pricing/preview", query).await
}
