use async_trait::async_trait;

use rideops_client::services::merchant;
use rideops_client::{ApiClient, ApiError};
use rideops_core::envelope::{ApiResponse, Paginated, StatusSummary};
use rideops_core::filter::ListQuery;
use rideops_core::models::merchant::{Merchant, MerchantDetail, MerchantStatus};
use rideops_core::models::DecisionNotes;

use crate::list::{DetailResource, ListResource, ListStore, Reviewable};

/// Merchants under admin review.
pub struct Merchants;

pub type MerchantStore = ListStore<Merchants>;

#[async_trait]
impl ListResource for Merchants {
    type Item = Merchant;
    type Status = MerchantStatus;
    type Detail = MerchantDetail;

    const NAME: &'static str = "merchants";
    const FETCH_FAILED: &'static str = "Failed to fetch merchants";

    async fn list(
        api: &ApiClient,
        query: &ListQuery,
    ) -> Result<ApiResponse<Paginated<Merchant>>, ApiError> {
        merchant::list(api, query).await
    }

    async fn summary(api: &ApiClient) -> Result<Option<StatusSummary>, ApiError> {
        Ok(Some(merchant::summary(api).await?.data))
    }
}

#[async_trait]
impl Reviewable for Merchants {
    type Id = str;

    const APPROVE_FAILED: &'static str = "Failed to approve merchant";
    const REJECT_FAILED: &'static str = "Failed to reject merchant";

    /// The approval endpoint takes no notes; any given are dropped.
    async fn approve(api: &ApiClient, uuid: &str, _notes: &DecisionNotes) -> Result<(), ApiError> {
        merchant::approve(api, uuid).await?;
        Ok(())
    }

    async fn reject(api: &ApiClient, uuid: &str, notes: &DecisionNotes) -> Result<(), ApiError> {
        merchant::reject(api, uuid, notes).await?;
        Ok(())
    }
}

#[async_trait]
impl DetailResource for Merchants {
    type Key = str;

    const DETAIL_FAILED: &'static str = "Failed to fetch merchant details";

    async fn detail(api: &ApiClient, uuid: &str) -> Result<ApiResponse<MerchantDetail>, ApiError> {
        merchant::detail(api, uuid).await
    }
}
