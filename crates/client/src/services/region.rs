use rideops_core::envelope::ApiResponse;
use rideops_core::models::region::{District, Province, RegencyOption, Village};

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn provinces(api: &ApiClient) -> Result<ApiResponse<Vec<Province>>, ApiError> {
    api.get("/api/regions").await
}

pub async fn regencies(
    api: &ApiClient,
    province_id: &str,
) -> Result<ApiResponse<Vec<RegencyOption>>, ApiError> {
    api.get(&format!("/api/regions/{province_id}")).await
}

pub async fn districts(
    api: &ApiClient,
    province_id: &str,
    regency_id: &str,
) -> Result<ApiResponse<Vec<District>>, ApiError> {
    api.get(&format!("/api/regions/{province_id}/{regency_id}"))
        .await
}

pub async fn villages(
    api: &ApiClient,
    province_id: &str,
    regency_id: &str,
    district_id: &str,
) -> Result<ApiResponse<Vec<Village>>, ApiError> {
    api.get(&format!(
        "/api/regions/{province_id}/{regency_id}/{district_id}"
    ))
    .await
}
