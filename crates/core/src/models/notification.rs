//! Push notification requests sent through the backend.

use serde::{Deserialize, Serialize};

use crate::types::DbId;

/// Delivery counts reported after a send.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResult {
    pub sent: u64,
    pub total: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendToUserRequest {
    pub user_id: DbId,
    pub title: String,
    pub body: String,
    pub data: serde_json::Value,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendBulkRequest {
    pub user_ids: Vec<DbId>,
    pub title: String,
    pub body: String,
    pub data: serde_json::Value,
}
