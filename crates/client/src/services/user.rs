use rideops_core::envelope::{ApiResponse, Paginated};
use rideops_core::models::user::{User, UserDetail, UserQuery};
use rideops_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

/// The signed-in user.
pub async fn me(api: &ApiClient) -> Result<ApiResponse<User>, ApiError> {
    api.get("/api/me").await
}

pub async fn search(
    api: &ApiClient,
    query: &UserQuery,
) -> Result<ApiResponse<Paginated<User>>, ApiError> {
    api.get_with_query("/api/admin/users", query).await
}

pub async fn detail(api: &ApiClient, id: DbId) -> Result<ApiResponse<UserDetail>, ApiError> {
    api.get(&format!("/api/admin/users/{id}")).await
}
