use async_trait::async_trait;

use rideops_client::services::user;
use rideops_client::{ApiClient, ApiError};
use rideops_core::envelope::{ApiResponse, Paginated};
use rideops_core::filter::{ListQuery, NoStatus};
use rideops_core::models::user::{User, UserDetail, UserQuery};
use rideops_core::types::DbId;

use crate::list::{DetailResource, ListResource, ListStore};

/// Platform users. Searchable, no status filter, no summary.
pub struct Users;

pub type UserStore = ListStore<Users>;

#[async_trait]
impl ListResource for Users {
    type Item = User;
    type Status = NoStatus;
    type Detail = UserDetail;

    const NAME: &'static str = "users";
    const FETCH_FAILED: &'static str = "Failed to fetch users";

    async fn list(
        api: &ApiClient,
        query: &ListQuery,
    ) -> Result<ApiResponse<Paginated<User>>, ApiError> {
        let query = UserQuery {
            search: query.search.clone(),
            page: query.page,
            per_page: query.limit,
        };
        user::search(api, &query).await
    }
}

#[async_trait]
impl DetailResource for Users {
    type Key = DbId;

    const DETAIL_FAILED: &'static str = "Failed to fetch user detail";

    async fn detail(api: &ApiClient, id: &DbId) -> Result<ApiResponse<UserDetail>, ApiError> {
        user::detail(api, *id).await
    }
}
