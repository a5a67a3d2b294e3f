//! Backend response envelope types.
//!
//! Every endpoint answers with `{ "data": ..., "message": "..." }`. List
//! endpoints nest a pagination block inside `data`; summary endpoints nest
//! per-status counters.

use serde::{Deserialize, Serialize};

/// Standard `{ data, message }` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub message: String,
}

/// Envelope for mutations whose `data` payload is irrelevant to the caller.
pub type MessageResponse = ApiResponse<serde_json::Value>;

/// Paginated collection nested inside a list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    pub total_items: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub items_per_page: u32,
}

impl<T> Default for Paginated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            current_page: 1,
            items_per_page: crate::types::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Aggregate counts per status category.
///
/// Wallet summaries report `approved` instead of `approve`; both land in
/// [`StatusSummary::approve`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusSummary {
    #[serde(default, alias = "approved")]
    pub approve: u64,
    #[serde(default)]
    pub submitted: u64,
    #[serde(default)]
    pub rejected: u64,
    #[serde(default)]
    pub pending: u64,
    #[serde(default)]
    pub total: u64,
}

/// Error body returned by the backend on non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paginated_envelope_parses() {
        let raw = json!({
            "data": {
                "items": [1, 2, 3],
                "total_items": 23,
                "total_pages": 3,
                "current_page": 1,
                "items_per_page": 10
            },
            "message": "ok"
        });
        let parsed: ApiResponse<Paginated<i32>> = serde_json::from_value(raw).unwrap();
        assert_eq!(parsed.data.items, vec![1, 2, 3]);
        assert_eq!(parsed.data.total_items, 23);
        assert_eq!(parsed.data.total_pages, 3);
        assert_eq!(parsed.message, "ok");
    }

    #[test]
    fn missing_message_defaults_to_empty() {
        let parsed: ApiResponse<i32> = serde_json::from_value(json!({ "data": 5 })).unwrap();
        assert_eq!(parsed.data, 5);
        assert!(parsed.message.is_empty());
    }

    #[test]
    fn missing_items_default_to_empty() {
        let parsed: Paginated<i32> = serde_json::from_value(json!({
            "total_items": 0,
            "total_pages": 0,
            "current_page": 1,
            "items_per_page": 10
        }))
        .unwrap();
        assert!(parsed.items.is_empty());
    }

    #[test]
    fn wallet_summary_alias_maps_approved() {
        let summary: StatusSummary = serde_json::from_value(json!({
            "pending": 4,
            "approved": 7,
            "rejected": 1,
            "total": 12
        }))
        .unwrap();
        assert_eq!(summary.approve, 7);
        assert_eq!(summary.pending, 4);
        assert_eq!(summary.submitted, 0);
        assert_eq!(summary.total, 12);
    }

    #[test]
    fn error_body_without_message() {
        let body: ErrorBody = serde_json::from_value(json!({ "code": "X" })).unwrap();
        assert!(body.message.is_none());
    }
}
