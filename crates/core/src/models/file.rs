//! Uploaded files (document scans, store photos, menu images).

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFile {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub url: Option<String>,
    pub size: u64,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Query for the file browser.
#[derive(Debug, Clone, Serialize)]
pub struct FileQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    pub page: u32,
    pub limit: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeletedFile {
    pub id: DbId,
}
