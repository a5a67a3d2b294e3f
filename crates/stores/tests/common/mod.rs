#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};
use wiremock::{MockServer, Request};

use rideops_client::storage::{KeyValueStore, MemoryStorage, KEY_TOKEN};
use rideops_client::ClientConfig;
use rideops_stores::AppContext;

/// Context wired to `server`, with an optional stored token.
pub fn test_context(server: &MockServer, token: Option<&str>) -> AppContext {
    let storage = Arc::new(MemoryStorage::new());
    if let Some(token) = token {
        storage.set(KEY_TOKEN, token).unwrap();
    }
    let config = ClientConfig::default().with_api_url(server.uri());
    AppContext::with_storage(config, storage).unwrap()
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

pub fn error_body(message: &str) -> Value {
    json!({ "message": message })
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

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

pub fn topup_json(id: i64, status: &str) -> Value {
    json!({
        "id": id,
        "user_id": 7,
        "wallet_id": 3,
        "amount": 50000.0,
        "status": status,
        "description": "Top up",
        "admin_note": null,
        "requested_at": "2026-03-01T08:00:00Z",
        "processed_at": null,
        "processed_by": null
    })
}

pub fn driver_detail_json(uuid: &str, status: &str) -> Value {
    json!({
        "user": { "uuid": uuid, "username": "driver1", "email": null, "roles": ["driver"] },
        "driver": {
            "uuid": uuid,
            "full_name": "Budi Santoso",
            "phone_number": "08123",
            "address": "Jl. Kenanga 1",
            "ktp_number": "3171000000000001",
            "date_of_birth": "1990-01-01",
            "gender": "male",
            "work_area_id": "3171",
            "plate_number": "B 1234 XYZ",
            "vehicle_brand": "Honda",
            "vehicle_model": "Vario",
            "vehicle_year": 2021,
            "service_id": 1,
            "joined_at": "2026-01-01T00:00:00Z",
            "color": "black",
            "status": status,
            "reject_notes": []
        },
        "work_area": { "id": "3171", "name": "Jakarta Selatan" },
        "summary": { "total_orders": 12, "total_revenue": 340000.0, "total_distance": 88.5 },
        "rating": { "average": 4.8, "total": 10 },
        "service": { "id": 1, "name": "Ride" }
    })
}

/// Waiting registration as the backend reports it after step `status`.
pub fn waiting_profile_json(uuid: &str, status: &str) -> Value {
    json!({
        "uuid": uuid,
        "store_name": "Warung Sari",
        "category_id": 4,
        "address": "Jl. Melati 3",
        "latitude": -6.2,
        "longitude": 106.8,
        "work_area_id": "3171",
        "contact_phone": "0812000111",
        "status": status
    })
}

// ---------------------------------------------------------------------------
// Request inspection
// ---------------------------------------------------------------------------

/// `"METHOD /path"` for every request the server saw, in arrival order.
pub async fn request_log(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|r| format!("{} {}", r.method, r.url.path()))
        .collect()
}

pub fn query_map(request: &Request) -> HashMap<String, String> {
    request
        .url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

/// Requests whose path is exactly `path`.
pub async fn requests_to(server: &MockServer, path: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap()
        .into_iter()
        .filter(|r| r.url.path() == path)
        .collect()
}
