use async_trait::async_trait;

use rideops_client::services::wallet;
use rideops_client::{ApiClient, ApiError};
use rideops_core::envelope::{ApiResponse, Paginated, StatusSummary};
use rideops_core::filter::ListQuery;
use rideops_core::models::wallet::{TopupDecision, WalletRequest, WalletRequestStatus};
use rideops_core::models::DecisionNotes;
use rideops_core::types::DbId;

use crate::list::{ListResource, ListStore, Reviewable};

/// Wallet top-up requests.
pub struct TopupRequests;

pub type WalletStore = ListStore<TopupRequests>;

const UPDATE_FAILED: &str = "Failed to update request status";

#[async_trait]
impl ListResource for TopupRequests {
    type Item = WalletRequest;
    type Status = WalletRequestStatus;
    type Detail = ();

    const NAME: &'static str = "wallet_requests";
    const FETCH_FAILED: &'static str = "Failed to fetch topup requests";

    async fn list(
        api: &ApiClient,
        query: &ListQuery,
    ) -> Result<ApiResponse<Paginated<WalletRequest>>, ApiError> {
        wallet::list_topups(api, query).await
    }

    async fn summary(api: &ApiClient) -> Result<Option<StatusSummary>, ApiError> {
        Ok(Some(wallet::summary(api).await?.data))
    }
}

/// Notes become the single `admin_note`, one per line.
fn admin_note(notes: &DecisionNotes) -> String {
    notes.notes.join("\n")
}

#[async_trait]
impl Reviewable for TopupRequests {
    type Id = DbId;

    const APPROVE_FAILED: &'static str = UPDATE_FAILED;
    const REJECT_FAILED: &'static str = UPDATE_FAILED;

    async fn approve(api: &ApiClient, id: &DbId, notes: &DecisionNotes) -> Result<(), ApiError> {
        wallet::update_request_status(api, *id, TopupDecision::Approved, &admin_note(notes)).await?;
        Ok(())
    }

    async fn reject(api: &ApiClient, id: &DbId, notes: &DecisionNotes) -> Result<(), ApiError> {
        wallet::update_request_status(api, *id, TopupDecision::Rejected, &admin_note(notes)).await?;
        Ok(())
    }
}

impl ListStore<TopupRequests> {
    /// Approve or reject a top-up request, then reload the current page.
    pub async fn update_request_status(
        &mut self,
        request_id: DbId,
        decision: TopupDecision,
        admin_note: &str,
    ) -> bool {
        self.set_loading(true);
        let result = wallet::update_request_status(self.api(), request_id, decision, admin_note)
            .await
            .map(|_| ());
        self.finish_decision(result, UPDATE_FAILED).await
    }
}
