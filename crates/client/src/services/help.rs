//! Help centre: public reads and admin CRUD.

use rideops_core::envelope::{ApiResponse, MessageResponse};
use rideops_core::models::help::{
    Faq, FaqInput, FaqQuery, HelpCategory, HelpCategoryInput, HelpSearchQuery,
};
use rideops_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

pub async fn categories(api: &ApiClient) -> Result<ApiResponse<Vec<HelpCategory>>, ApiError> {
    api.get("/api/help/categories").await
}

pub async fn faqs(api: &ApiClient, category_id: DbId) -> Result<ApiResponse<Vec<Faq>>, ApiError> {
    api.get_with_query("/api/help/faqs", &FaqQuery { category_id })
        .await
}

pub async fn search(api: &ApiClient, q: &str) -> Result<ApiResponse<Vec<Faq>>, ApiError> {
    api.get_with_query("/api/help/search", &HelpSearchQuery { q: q.to_string() })
        .await
}

// ---- admin: categories ----

pub async fn create_category(
    api: &ApiClient,
    body: &HelpCategoryInput,
) -> Result<MessageResponse, ApiError> {
    api.post("/api/help/admin/categories", body).await
}

pub async fn update_category(
    api: &ApiClient,
    id: DbId,
    body: &HelpCategoryInput,
) -> Result<MessageResponse, ApiError> {
    api.put(&format!("/api/help/admin/categories/{id}"), body)
        .await
}

pub async fn delete_category(api: &ApiClient, id: DbId) -> Result<MessageResponse, ApiError> {
    api.delete(&format!("/api/help/admin/categories/{id}")).await
}

// ---- admin: FAQs ----

pub async fn create_faq(api: &ApiClient, body: &FaqInput) -> Result<MessageResponse, ApiError> {
    api.post("/api/help/admin/faqs", body).await
}

pub async fn update_faq(
    api: &ApiClient,
    id: DbId,
    body: &FaqInput,
) -> Result<MessageResponse, ApiError> {
    api.put(&format!("/api/help/admin/faqs/{id}"), body).await
}

pub async fn delete_faq(api: &ApiClient, id: DbId) -> Result<MessageResponse, ApiError> {
    api.delete(&format!("/api/help/admin/faqs/{id}")).await
}
