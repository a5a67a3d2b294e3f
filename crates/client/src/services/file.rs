//! File uploads and the file browser.

use reqwest::multipart::{Form, Part};

use rideops_core::envelope::{ApiResponse, Paginated};
use rideops_core::models::file::{DeletedFile, FileQuery, StoredFile};
use rideops_core::types::DbId;

use crate::error::ApiError;
use crate::http::ApiClient;

/// Upload `bytes` as multipart fields `file` and `name`.
pub async fn upload(
    api: &ApiClient,
    file_name: &str,
    bytes: Vec<u8>,
    name: &str,
) -> Result<ApiResponse<StoredFile>, ApiError> {
    let part = Part::bytes(bytes).file_name(file_name.to_string());
    let form = Form::new().part("file", part).text("name", name.to_string());
    api.post_multipart("/api/upload", form).await
}

pub async fn list(
    api: &ApiClient,
    query: &FileQuery,
) -> Result<ApiResponse<Paginated<StoredFile>>, ApiError> {
    api.get_with_query("/api/files", query).await
}

pub async fn delete(api: &ApiClient, id: DbId) -> Result<ApiResponse<DeletedFile>, ApiError> {
    api.delete(&format!("/api/files/{id}")).await
}

/// Absolute URL for a stored file path.
pub fn file_url(api: &ApiClient, path: &str) -> String {
    api.file_url(path)
}
