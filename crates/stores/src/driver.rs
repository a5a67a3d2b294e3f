//! Driver list plus the single-driver review page.

use async_trait::async_trait;

use rideops_client::services::driver;
use rideops_client::{ApiClient, ApiError};
use rideops_core::envelope::{ApiResponse, Paginated, StatusSummary};
use rideops_core::filter::ListQuery;
use rideops_core::models::driver::{
    Driver, DriverDetail, DriverStatus, DriverWallet, WalletPageQuery,
};
use rideops_core::models::DecisionNotes;

use crate::list::{DetailResource, ListResource, ListStore};

pub struct Drivers;

#[async_trait]
impl ListResource for Drivers {
    type Item = Driver;
    type Status = DriverStatus;
    type Detail = DriverDetail;

    const NAME: &'static str = "drivers";
    const FETCH_FAILED: &'static str = "Failed to fetch drivers";

    async fn list(
        api: &ApiClient,
        query: &ListQuery,
    ) -> Result<ApiResponse<Paginated<Driver>>, ApiError> {
        driver::list(api, query).await
    }

    async fn summary(api: &ApiClient) -> Result<Option<StatusSummary>, ApiError> {
        Ok(Some(driver::summary(api).await?.data))
    }
}

#[async_trait]
impl DetailResource for Drivers {
    type Key = str;

    const DETAIL_FAILED: &'static str = "Failed to fetch driver details";

    async fn detail(api: &ApiClient, uuid: &str) -> Result<ApiResponse<DriverDetail>, ApiError> {
        driver::detail(api, uuid).await
    }
}

/// Drivers are reviewed from their detail page, so a decision reloads the
/// detail record rather than the list.
pub struct DriverStore {
    list: ListStore<Drivers>,
    wallet: Option<DriverWallet>,
    wallet_error: Option<String>,
    is_wallet_loading: bool,
}

impl DriverStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            list: ListStore::new(api),
            wallet: None,
            wallet_error: None,
            is_wallet_loading: false,
        }
    }

    pub fn list(&self) -> &ListStore<Drivers> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListStore<Drivers> {
        &mut self.list
    }

    pub fn detail(&self) -> Option<&DriverDetail> {
        self.list.detail()
    }

    pub fn wallet(&self) -> Option<&DriverWallet> {
        self.wallet.as_ref()
    }

    pub fn wallet_error(&self) -> Option<&str> {
        self.wallet_error.as_deref()
    }

    pub fn is_wallet_loading(&self) -> bool {
        self.is_wallet_loading
    }

    pub async fn fetch_detail(&mut self, uuid: &str) -> bool {
        self.list.fetch_detail(uuid).await
    }

    /// Approve a driver, then reload their detail record.
    pub async fn approve(&mut self, uuid: &str, notes: Vec<String>) -> bool {
        self.list.set_loading(true);
        let result = driver::approve(self.list.api(), uuid, &DecisionNotes::new(notes)).await;
        self.finish_decision(uuid, result.map(|_| ()), "Failed to approve driver")
            .await
    }

    /// Reject a driver, then reload their detail record.
    pub async fn reject(&mut self, uuid: &str, notes: Vec<String>) -> bool {
        self.list.set_loading(true);
        let result = driver::reject(self.list.api(), uuid, &DecisionNotes::new(notes)).await;
        self.finish_decision(uuid, result.map(|_| ()), "Failed to reject driver")
            .await
    }

    async fn finish_decision(
        &mut self,
        uuid: &str,
        result: Result<(), ApiError>,
        fallback: &str,
    ) -> bool {
        let ok = match result {
            Ok(()) => {
                self.list.fetch_detail(uuid).await;
                true
            }
            Err(e) => {
                tracing::warn!(driver_uuid = %uuid, error = %e, "Driver decision failed");
                self.list.set_error(e.user_message(fallback));
                false
            }
        };
        self.list.set_loading(false);
        ok
    }

    /// Load one page of a driver's wallet ledger.
    pub async fn fetch_wallet(&mut self, uuid: &str, page: u32, limit: u32) -> bool {
        self.is_wallet_loading = true;
        self.wallet_error = None;
        let query = WalletPageQuery { page, limit };
        let ok = match driver::wallet(self.list.api(), uuid, &query).await {
            Ok(response) => {
                self.wallet = Some(response.data);
                self.list.notify();
                true
            }
            Err(e) => {
                tracing::warn!(driver_uuid = %uuid, error = %e, "Driver wallet fetch failed");
                self.wallet_error = Some(e.user_message("Failed to fetch driver wallet"));
                false
            }
        };
        self.is_wallet_loading = false;
        ok
    }
}
