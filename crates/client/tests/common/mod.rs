#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::MockServer;

use rideops_client::storage::{KeyValueStore, MemoryStorage, KEY_TOKEN};
use rideops_client::{ApiClient, ClientConfig, EventBus, Session};
use rideops_core::i18n::Language;

/// Client wired to `server`, with an optional stored token.
pub struct TestClient {
    pub api: ApiClient,
    pub session: Arc<Session>,
    pub events: Arc<EventBus>,
    pub storage: Arc<MemoryStorage>,
}

pub fn test_client(server: &MockServer, token: Option<&str>) -> TestClient {
    let storage = Arc::new(MemoryStorage::new());
    if let Some(token) = token {
        storage.set(KEY_TOKEN, token).unwrap();
    }
    let session = Arc::new(Session::new(storage.clone(), Language::En));
    let events = Arc::new(EventBus::default());
    let config = ClientConfig::default().with_api_url(server.uri());
    let api = ApiClient::new(&config, session.clone(), events.clone()).unwrap();
    TestClient {
        api,
        session,
        events,
        storage,
    }
}

/// `{ data, message }` envelope.
pub fn envelope(data: Value) -> Value {
    json!({ "data": data, "message": "ok" })
}

/// Paginated list envelope.
pub fn page(items: Value, total_items: u64, total_pages: u32, current_page: u32) -> Value {
    envelope(json!({
        "items": items,
        "total_items": total_items,
        "total_pages": total_pages,
        "current_page": current_page,
        "items_per_page": 10
    }))
}

pub fn admin_json(uuid: &str, status: &str) -> Value {
    json!({
        "id": 1,
        "user_id": 10,
        "uuid": uuid,
        "username": format!("user-{uuid}"),
        "email": null,
        "status": status,
        "work_area_ids": ["3171"],
        "name": "Admin",
        "reject_notes": null
    })
}
