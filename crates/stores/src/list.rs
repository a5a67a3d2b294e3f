//! Generic filtered, paginated list view.
//!
//! A [`ListStore`] holds one page of a resource collection, the filter that
//! produced it, and the per-status summary. Setters only change state; the
//! caller follows them with [`ListStore::refresh`] to load the new page.

use std::marker::PhantomData;

use async_trait::async_trait;

use rideops_client::{ApiClient, ApiError, AppEvent};
use rideops_core::envelope::{ApiResponse, Paginated, StatusSummary};
use rideops_core::error::CoreError;
use rideops_core::filter::{FilterStatus, ListQuery, StatusFilter};
use rideops_core::models::DecisionNotes;
use rideops_core::types::{DEFAULT_PAGE_SIZE, FIRST_PAGE};

/// A backend collection that can be listed page by page.
#[async_trait]
pub trait ListResource: Send + Sync + 'static {
    type Item: Clone + Send + Sync + 'static;
    type Status: FilterStatus;
    /// Detail record type; `()` when the resource has no detail view.
    type Detail: Send + Sync + 'static;

    /// Store name carried by [`AppEvent::StoreChanged`].
    const NAME: &'static str;
    const FETCH_FAILED: &'static str;

    async fn list(
        api: &ApiClient,
        query: &ListQuery,
    ) -> Result<ApiResponse<Paginated<Self::Item>>, ApiError>;

    /// Per-status counts. Resources without a summary endpoint report `None`.
    async fn summary(_api: &ApiClient) -> Result<Option<StatusSummary>, ApiError> {
        Ok(None)
    }
}

/// A resource whose entries an admin approves or rejects.
#[async_trait]
pub trait Reviewable: ListResource {
    type Id: ?Sized + Sync;

    const APPROVE_FAILED: &'static str;
    const REJECT_FAILED: &'static str;

    async fn approve(api: &ApiClient, id: &Self::Id, notes: &DecisionNotes) -> Result<(), ApiError>;
    async fn reject(api: &ApiClient, id: &Self::Id, notes: &DecisionNotes) -> Result<(), ApiError>;
}

/// A resource with a single-record detail endpoint.
#[async_trait]
pub trait DetailResource: ListResource {
    type Key: ?Sized + Sync;

    const DETAIL_FAILED: &'static str;

    async fn detail(api: &ApiClient, key: &Self::Key) -> Result<ApiResponse<Self::Detail>, ApiError>;
}

pub struct ListStore<R: ListResource> {
    api: ApiClient,
    items: Vec<R::Item>,
    detail: Option<R::Detail>,
    summary: Option<StatusSummary>,
    status: StatusFilter<R::Status>,
    search: String,
    current_page: u32,
    items_per_page: u32,
    total_items: u64,
    total_pages: u32,
    is_loading: bool,
    error: Option<String>,
    _resource: PhantomData<R>,
}

impl<R: ListResource> ListStore<R> {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            items: Vec::new(),
            detail: None,
            summary: None,
            status: StatusFilter::All,
            search: String::new(),
            current_page: FIRST_PAGE,
            items_per_page: DEFAULT_PAGE_SIZE,
            total_items: 0,
            total_pages: 0,
            is_loading: false,
            error: None,
            _resource: PhantomData,
        }
    }

    // ---- state ----

    pub fn items(&self) -> &[R::Item] {
        &self.items
    }

    pub fn detail(&self) -> Option<&R::Detail> {
        self.detail.as_ref()
    }

    pub fn summary(&self) -> Option<&StatusSummary> {
        self.summary.as_ref()
    }

    pub fn status(&self) -> StatusFilter<R::Status> {
        self.status
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    // ---- pure setters ----

    /// Change the status filter and go back to the first page.
    pub fn set_status(&mut self, status: StatusFilter<R::Status>) {
        self.status = status;
        self.current_page = FIRST_PAGE;
    }

    /// [`set_status`](Self::set_status) from a UI value (`"all"`, `""`, or a
    /// status name).
    pub fn set_status_value(&mut self, raw: &str) -> Result<(), CoreError> {
        let status = StatusFilter::parse(raw)?;
        self.set_status(status);
        Ok(())
    }

    /// Change the search text and go back to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.current_page = FIRST_PAGE;
    }

    /// Move to `page`, keeping the filters.
    pub fn set_page(&mut self, page: u32) {
        self.current_page = page.max(FIRST_PAGE);
    }

    pub fn set_page_size(&mut self, limit: u32) {
        self.items_per_page = limit.max(1);
        self.current_page = FIRST_PAGE;
    }

    // ---- fetching ----

    /// Load one page. On success the items, pagination, and filter are
    /// replaced; on failure only `error` changes. The summary is refreshed
    /// either way.
    pub async fn fetch(
        &mut self,
        status: StatusFilter<R::Status>,
        search: &str,
        page: u32,
        limit: u32,
    ) {
        self.is_loading = true;
        self.error = None;

        let query = ListQuery::new(&status, search, page, limit);
        match R::list(&self.api, &query).await {
            Ok(response) => {
                let page = response.data;
                tracing::debug!(
                    store = R::NAME,
                    items = page.items.len(),
                    total_items = page.total_items,
                    current_page = page.current_page,
                    "List loaded"
                );
                self.items = page.items;
                self.total_items = page.total_items;
                self.total_pages = page.total_pages;
                self.current_page = page.current_page;
                self.items_per_page = page.items_per_page;
                self.status = status;
                self.search = search.to_string();
                self.notify();
            }
            Err(e) => {
                tracing::warn!(store = R::NAME, error = %e, "List fetch failed");
                self.error = Some(e.user_message(R::FETCH_FAILED));
            }
        }

        self.is_loading = false;
        self.refresh_summary().await;
    }

    /// Re-fetch with the current filter, search, and page.
    pub async fn refresh(&mut self) {
        let search = self.search.clone();
        self.fetch(self.status, &search, self.current_page, self.items_per_page)
            .await;
    }

    /// Reload the summary counters. Failures are logged, not surfaced.
    pub async fn refresh_summary(&mut self) {
        match R::summary(&self.api).await {
            Ok(Some(summary)) => {
                self.summary = Some(summary);
                self.notify();
            }
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(store = R::NAME, error = %e, "Summary fetch failed");
            }
        }
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
        if loading {
            self.error = None;
        }
    }

    pub(crate) fn notify(&self) {
        self.api
            .events()
            .publish(AppEvent::StoreChanged { store: R::NAME });
    }
}

impl<R: Reviewable> ListStore<R> {
    /// Approve `id`, then reload the current page. Returns whether the
    /// approval succeeded.
    pub async fn approve(&mut self, id: &R::Id, notes: Vec<String>) -> bool {
        self.set_loading(true);
        let result = R::approve(&self.api, id, &DecisionNotes::new(notes)).await;
        self.finish_decision(result, R::APPROVE_FAILED).await
    }

    /// Reject `id`, then reload the current page.
    pub async fn reject(&mut self, id: &R::Id, notes: Vec<String>) -> bool {
        self.set_loading(true);
        let result = R::reject(&self.api, id, &DecisionNotes::new(notes)).await;
        self.finish_decision(result, R::REJECT_FAILED).await
    }

    pub(crate) async fn finish_decision(
        &mut self,
        result: Result<(), ApiError>,
        fallback: &str,
    ) -> bool {
        let ok = match result {
            Ok(()) => {
                self.refresh().await;
                true
            }
            Err(e) => {
                tracing::warn!(store = R::NAME, error = %e, "Decision failed");
                self.set_error(e.user_message(fallback));
                false
            }
        };
        self.is_loading = false;
        ok
    }
}

impl<R: DetailResource> ListStore<R> {
    /// Load one record into [`detail`](Self::detail). Returns whether it
    /// loaded; on failure the previous record is kept and `error` set.
    pub async fn fetch_detail(&mut self, key: &R::Key) -> bool {
        self.set_loading(true);
        let ok = match R::detail(&self.api, key).await {
            Ok(response) => {
                self.detail = Some(response.data);
                self.notify();
                true
            }
            Err(e) => {
                tracing::warn!(store = R::NAME, error = %e, "Detail fetch failed");
                self.set_error(e.user_message(R::DETAIL_FAILED));
                false
            }
        };
        self.is_loading = false;
        ok
    }

    pub fn reset_detail(&mut self) {
        self.detail = None;
    }
}
