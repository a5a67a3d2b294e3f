//! Help centre: categories, the FAQs of the selected category, search,
//! and admin CRUD.

use validator::Validate;

use rideops_client::services::help;
use rideops_client::{ApiClient, AppEvent};
use rideops_core::models::help::{Faq, FaqInput, HelpCategory, HelpCategoryInput};
use rideops_core::types::DbId;

use crate::error::StoreError;

const STORE_NAME: &str = "help";

/// Read failures are logged and leave the previous lists in place; admin
/// mutations return their error to the caller.
pub struct HelpStore {
    api: ApiClient,
    categories: Vec<HelpCategory>,
    faqs: Vec<Faq>,
    selected_category: Option<DbId>,
    search_query: String,
    is_loading: bool,
    is_searching: bool,
}

impl HelpStore {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            categories: Vec::new(),
            faqs: Vec::new(),
            selected_category: None,
            search_query: String::new(),
            is_loading: false,
            is_searching: false,
        }
    }

    pub fn categories(&self) -> &[HelpCategory] {
        &self.categories
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    pub fn selected_category(&self) -> Option<DbId> {
        self.selected_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_searching(&self) -> bool {
        self.is_searching
    }

    /// First load: categories, then the FAQs of the first one.
    pub async fn init(&mut self) {
        self.is_loading = true;
        self.fetch_categories().await;
        self.is_loading = false;
    }

    /// Reload categories. Selects the first one when nothing is selected.
    pub async fn fetch_categories(&mut self) {
        match help::categories(&self.api).await {
            Ok(response) => {
                self.categories = response.data;
                self.notify();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to fetch help categories");
                return;
            }
        }

        if self.selected_category.is_none() {
            if let Some(first) = self.categories.first().map(|c| c.id) {
                self.select_category(first).await;
            }
        }
    }

    /// Select a category, clearing any search, and load its FAQs.
    pub async fn select_category(&mut self, id: DbId) {
        self.selected_category = Some(id);
        self.search_query.clear();
        self.fetch_faqs_for_selected_category().await;
    }

    pub async fn fetch_faqs_for_selected_category(&mut self) {
        let Some(category_id) = self.selected_category else {
            self.faqs.clear();
            self.notify();
            return;
        };

        self.is_loading = true;
        match help::faqs(&self.api, category_id).await {
            Ok(response) => {
                self.faqs = response.data;
                self.notify();
            }
            Err(e) => tracing::warn!(category_id, error = %e, "Failed to fetch FAQs"),
        }
        self.is_loading = false;
    }

    /// Full-text search. Results replace the FAQ list and the category
    /// selection is cleared.
    pub async fn search(&mut self, query: &str) {
        self.is_searching = true;
        self.search_query = query.to_string();
        match help::search(&self.api, query).await {
            Ok(response) => {
                self.faqs = response.data;
                self.selected_category = None;
                self.notify();
            }
            Err(e) => tracing::warn!(error = %e, "Help search failed"),
        }
        self.is_searching = false;
    }

    // ---- admin: categories ----

    pub async fn create_category(&mut self, input: HelpCategoryInput) -> Result<(), StoreError> {
        input.validate()?;
        help::create_category(&self.api, &input).await?;
        self.fetch_categories().await;
        Ok(())
    }

    pub async fn update_category(
        &mut self,
        id: DbId,
        input: HelpCategoryInput,
    ) -> Result<(), StoreError> {
        input.validate()?;
        help::update_category(&self.api, id, &input).await?;
        self.fetch_categories().await;
        Ok(())
    }

    pub async fn delete_category(&mut self, id: DbId) -> Result<(), StoreError> {
        help::delete_category(&self.api, id).await?;
        if self.selected_category == Some(id) {
            self.selected_category = None;
        }
        self.fetch_categories().await;
        Ok(())
    }

    // ---- admin: FAQs ----

    pub async fn create_faq(&mut self, input: FaqInput) -> Result<(), StoreError> {
        input.validate()?;
        help::create_faq(&self.api, &input).await?;
        self.fetch_faqs_for_selected_category().await;
        Ok(())
    }

    pub async fn update_faq(&mut self, id: DbId, input: FaqInput) -> Result<(), StoreError> {
        input.validate()?;
        help::update_faq(&self.api, id, &input).await?;
        self.fetch_faqs_for_selected_category().await;
        Ok(())
    }

    pub async fn delete_faq(&mut self, id: DbId) -> Result<(), StoreError> {
        help::delete_faq(&self.api, id).await?;
        self.fetch_faqs_for_selected_category().await;
        Ok(())
    }

    fn notify(&self) {
        self.api
            .events()
            .publish(AppEvent::StoreChanged { store: STORE_NAME });
    }
}
