//! Tariff list with service/regency filters and the lookup tables the
//! filter dropdowns need.

use validator::Validate;

use rideops_client::services::{region, service, tariff};
use rideops_client::{ApiClient, AppEvent};
use rideops_core::models::region::{Province, RegencyOption};
use rideops_core::models::service::{Regency, Service};
use rideops_core::models::tariff::{
    IncentiveRequest, PricingPreview, PricingPreviewQuery, Tariff, TariffForm, TariffQuery,
};
use rideops_core::types::{DbId, DEFAULT_PAGE_SIZE, FIRST_PAGE};

use crate::error::StoreError;

const STORE_NAME: &str = "tariffs";

pub struct TariffStore {
    api: ApiClient,
    tariffs: Vec<Tariff>,
    is_loading: bool,
    error: Option<String>,
    service_id: Option<DbId>,
    regency_ids: Vec<String>,

    current_page: u32,
    total_pages: u32,
    total_items: u64,
    items_per_page: u32,

    services: Vec<Service>,
    regencies: Vec<Regency>,
    provinces: Vec<Province>,
    loading_services: bool,
    loading_regencies: bool,
    loading_provinces: bool,
}

impl TariffStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            tariffs: Vec::new(),
            is_loading: false,
            error: None,
            service_id: None,
            regency_ids: Vec::new(),
            current_page: FIRST_PAGE,
            total_pages: 1,
            total_items: 0,
            items_per_page: DEFAULT_PAGE_SIZE,
            services: Vec::new(),
            regencies: Vec::new(),
            provinces: Vec::new(),
            loading_services: false,
            loading_regencies: false,
            loading_provinces: false,
        }
    }

    // ---- state ----

    pub fn tariffs(&self) -> &[Tariff] {
        &self.tariffs
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn service_id(&self) -> Option<DbId> {
        self.service_id
    }

    pub fn regency_ids(&self) -> &[String] {
        &self.regency_ids
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn regencies(&self) -> &[Regency] {
        &self.regencies
    }

    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    pub fn loading_services(&self) -> bool {
        self.loading_services
    }

    pub fn loading_regencies(&self) -> bool {
        self.loading_regencies
    }

    pub fn loading_provinces(&self) -> bool {
        self.loading_provinces
    }

    // ---- filters ----

    /// Query for the current filters. Regency ids go out comma-joined.
    pub fn query(&self) -> TariffQuery {
        TariffQuery {
            service_id: self.service_id,
            regency_id: if self.regency_ids.is_empty() {
                None
            } else {
                Some(self.regency_ids.join(","))
            },
            page: Some(self.current_page),
            limit: Some(self.items_per_page),
        }
    }

    pub fn set_service_id(&mut self, service_id: Option<DbId>) {
        self.service_id = service_id;
        self.current_page = FIRST_PAGE;
    }

    pub fn set_regency_ids(&mut self, regency_ids: Vec<String>) {
        self.regency_ids = regency_ids;
        self.current_page = FIRST_PAGE;
    }

    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(FIRST_PAGE);
    }

    pub fn clear_filters(&mut self) {
        self.service_id = None;
        self.regency_ids.clear();
        self.current_page = FIRST_PAGE;
    }

    // ---- fetching ----

    /// Load the page selected by the current filters. A flat (unpaged)
    /// response collapses to a single page.
    pub async fn fetch_tariffs(&mut self) {
        self.is_loading = true;
        self.error = None;

        let query = self.query();
        tracing::debug!(?query, "Fetching tariffs");
        match tariff::list(&self.api, &query).await {
            Ok(response) => {
                let page = response.data.into_page(self.items_per_page);
                self.tariffs = page.items;
                self.total_items = page.total_items;
                self.total_pages = page.total_pages;
                self.current_page = page.current_page;
                self.items_per_page = page.items_per_page;
                self.notify();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Tariff fetch failed");
                self.error = Some(e.user_message("Failed to fetch tariffs"));
            }
        }

        self.is_loading = false;
    }

    pub async fn fetch_services(&mut self) {
        self.loading_services = true;
        match service::list(&self.api).await {
            Ok(response) => {
                self.services = response.data;
                self.notify();
            }
            Err(e) => tracing::warn!(error = %e, "Error fetching services"),
        }
        self.loading_services = false;
    }

    pub async fn fetch_regencies(&mut self) {
        self.loading_regencies = true;
        match service::regencies(&self.api).await {
            Ok(response) => {
                self.regencies = response.data;
                self.notify();
            }
            Err(e) => tracing::warn!(error = %e, "Error fetching regencies"),
        }
        self.loading_regencies = false;
    }

    pub async fn fetch_provinces(&mut self) {
        self.loading_provinces = true;
        match region::provinces(&self.api).await {
            Ok(response) => {
                self.provinces = response.data;
                self.notify();
            }
            Err(e) => tracing::warn!(error = %e, "Error fetching provinces"),
        }
        self.loading_provinces = false;
    }

    /// Regencies of one province, for the cascading picker. Empty on error.
    pub async fn fetch_regencies_by_province(&mut self, province_id: &str) -> Vec<RegencyOption> {
        self.loading_regencies = true;
        let regencies = match region::regencies(&self.api, province_id).await {
            Ok(response) => response.data,
            Err(e) => {
                tracing::warn!(province_id, error = %e, "Error fetching regencies by province");
                Vec::new()
            }
        };
        self.loading_regencies = false;
        regencies
    }

    // ---- lookups ----

    pub fn service_name(&self, id: DbId) -> String {
        self.services
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("Service #{id}"))
    }

    pub fn regency_name(&self, id: &str) -> String {
        self.regencies
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    pub fn province_name(&self, id: &str) -> String {
        self.provinces
            .iter()
            .find(|p| p.id == id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    // ---- mutations ----

    /// Create or update a tariff, then reload the current page.
    pub async fn save_tariff(&mut self, form: TariffForm) -> Result<(), StoreError> {
        form.validate()?;
        tariff::save(&self.api, &form).await?;
        tracing::info!(service_id = form.service_id, regency_id = %form.regency_id, "Tariff saved");
        self.fetch_tariffs().await;
        Ok(())
    }

    /// Attach a time-limited incentive, then reload the current page.
    pub async fn update_incentive(&mut self, request: IncentiveRequest) -> Result<(), StoreError> {
        request.validate()?;
        tariff::update_incentive(&self.api, &request).await?;
        tracing::info!(
            service_id = request.service_id,
            regency_id = %request.regency_id,
            duration_hours = request.duration_hours,
            "Incentive updated"
        );
        self.fetch_tariffs().await;
        Ok(())
    }

    pub async fn pricing_preview(
        &self,
        query: &PricingPreviewQuery,
    ) -> Result<PricingPreview, StoreError> {
        Ok(tariff::pricing_preview(&self.api, query).await?.data)
    }

    fn notify(&self) {
        self.api
            .events()
            .publish(AppEvent::StoreChanged { store: STORE_NAME });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use rideops_client::storage::MemoryStorage;
    use rideops_client::{ClientConfig, EventBus, Session};
    use rideops_core::i18n::Language;

    fn store() -> TariffStore {
        let session = Arc::new(Session::new(Arc::new(MemoryStorage::new()), Language::En));
        let api = ApiClient::new(&ClientConfig::default(), session, Arc::new(EventBus::default()))
            .unwrap();
        TariffStore::new(api)
    }

    #[test]
    fn query_joins_regency_ids() {
        let mut store = store();
        store.set_regency_ids(vec!["3171".into(), "3172".into()]);
        assert_eq!(store.query().regency_id.as_deref(), Some("3171,3172"));
    }

    #[test]
    fn query_omits_empty_filters() {
        let store = store();
        let query = store.query();
        assert_eq!(query.service_id, None);
        assert_eq!(query.regency_id, None);
        assert_eq!(query.page, Some(1));
        assert_eq!(query.limit, Some(DEFAULT_PAGE_SIZE));
    }

    #[test]
    fn filter_setters_reset_page() {
        let mut store = store();
        store.set_page(4);
        store.set_service_id(Some(2));
        assert_eq!(store.current_page(), 1);

        store.set_page(3);
        store.set_regency_ids(vec!["3171".into()]);
        assert_eq!(store.current_page(), 1);

        store.set_page(5);
        store.clear_filters();
        assert_eq!(store.current_page(), 1);
        assert_eq!(store.service_id(), None);
        assert!(store.regency_ids().is_empty());
    }

    #[test]
    fn name_lookups_fall_back() {
        let store = store();
        assert_eq!(store.service_name(7), "Service #7");
        assert_eq!(store.regency_name("3171"), "3171");
        assert_eq!(store.province_name("31"), "31");
    }
}
