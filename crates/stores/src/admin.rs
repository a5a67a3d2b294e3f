use async_trait::async_trait;

use rideops_client::services::admin;
use rideops_client::{ApiClient, ApiError};
use rideops_core::envelope::{ApiResponse, Paginated, StatusSummary};
use rideops_core::filter::ListQuery;
use rideops_core::models::admin::{Admin, AdminStatus};
use rideops_core::models::DecisionNotes;

use crate::list::{ListResource, ListStore, Reviewable};

/// Admin accounts, keyed by uuid for review.
pub struct Admins;

pub type AdminStore = ListStore<Admins>;

#[async_trait]
impl ListResource for Admins {
    type Item = Admin;
    type Status = AdminStatus;
    type Detail = ();

    const NAME: &'static str = "admins";
    const FETCH_FAILED: &'static str = "Failed to fetch admins";

    async fn list(
        api: &ApiClient,
        query: &ListQuery,
    ) -> Result<ApiResponse<Paginated<Admin>>, ApiError> {
        admin::list(api, query).await
    }

    async fn summary(api: &ApiClient) -> Result<Option<StatusSummary>, ApiError> {
        Ok(Some(admin::summary(api).await?.data))
    }
}

#[async_trait]
impl Reviewable for Admins {
    type Id = str;

    const APPROVE_FAILED: &'static str = "Failed to approve admin";
    const REJECT_FAILED: &'static str = "Failed to reject admin";

    async fn approve(api: &ApiClient, uuid: &str, notes: &DecisionNotes) -> Result<(), ApiError> {
        admin::approve(api, uuid, notes).await?;
        Ok(())
    }

    async fn reject(api: &ApiClient, uuid: &str, notes: &DecisionNotes) -> Result<(), ApiError> {
        admin::reject(api, uuid, notes).await?;
        Ok(())
    }
}
