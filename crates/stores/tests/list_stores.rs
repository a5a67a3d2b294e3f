//! List/detail store behaviour against a mock backend.

mod common;

use common::{
    admin_json, driver_detail_json, envelope, error_body, page, query_map, request_log,
    requests_to, test_context, topup_json,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rideops_client::AppEvent;
use rideops_core::filter::{RowStatus, StatusFilter};
use rideops_core::models::admin::AdminStatus;
use rideops_core::models::wallet::TopupDecision;

async fn mount_admin_page(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/admin/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([admin_json("a-1", "pending"), admin_json("a-2", "submitted")]),
            12,
            2,
            1,
        )))
        .mount(server)
        .await;
}

async fn mount_admin_summary(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/admin/admins/summary-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "approve": 3, "submitted": 4, "rejected": 1, "pending": 4, "total": 12
        }))))
        .mount(server)
        .await;
}

// ---------------------------------------------------------------------------
// Filter normalisation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn all_sentinel_and_empty_search_are_omitted() {
    let server = MockServer::start().await;
    mount_admin_page(&server).await;
    mount_admin_summary(&server).await;
    let mut ctx = test_context(&server, Some("token"));

    ctx.admins.fetch(StatusFilter::All, "", 1, 10).await;

    let requests = requests_to(&server, "/api/admin/admins").await;
    let query = query_map(&requests[0]);
    assert!(!query.contains_key("status"));
    assert!(!query.contains_key("search"));
    assert_eq!(query["page"], "1");
    assert_eq!(query["limit"], "10");
}

#[tokio::test]
async fn status_value_all_from_ui_is_omitted() {
    let server = MockServer::start().await;
    mount_admin_page(&server).await;
    let mut ctx = test_context(&server, None);

    ctx.admins.set_status_value("all").unwrap();
    ctx.admins.refresh().await;
    ctx.admins.set_status_value("").unwrap();
    ctx.admins.refresh().await;

    for request in requests_to(&server, "/api/admin/admins").await {
        assert!(!query_map(&request).contains_key("status"));
    }
}

#[tokio::test]
async fn present_filters_are_sent() {
    let server = MockServer::start().await;
    mount_admin_page(&server).await;
    let mut ctx = test_context(&server, None);

    ctx.admins
        .fetch(StatusFilter::Only(AdminStatus::Pending), "budi", 2, 25)
        .await;

    let requests = requests_to(&server, "/api/admin/admins").await;
    let query = query_map(&requests[0]);
    assert_eq!(query["status"], "pending");
    assert_eq!(query["search"], "budi");
    assert_eq!(query["page"], "2");
    assert_eq!(query["limit"], "25");
}

// ---------------------------------------------------------------------------
// Pure setters
// ---------------------------------------------------------------------------

#[tokio::test]
async fn set_status_and_search_reset_page_set_page_keeps_filters() {
    let server = MockServer::start().await;
    let mut ctx = test_context(&server, None);
    let admins = &mut ctx.admins;

    admins.set_page(4);
    admins.set_status(StatusFilter::Only(AdminStatus::Rejected));
    assert_eq!(admins.current_page(), 1);

    admins.set_page(3);
    admins.set_search("andi");
    assert_eq!(admins.current_page(), 1);

    admins.set_page(5);
    assert_eq!(admins.current_page(), 5);
    assert_eq!(admins.status(), StatusFilter::Only(AdminStatus::Rejected));
    assert_eq!(admins.search(), "andi");

    // Setters never touch the network.
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn unknown_status_value_is_rejected_without_change() {
    let server = MockServer::start().await;
    let mut ctx = test_context(&server, None);
    ctx.admins.set_page(2);
    assert!(ctx.admins.set_status_value("archived").is_err());
    assert_eq!(ctx.admins.status(), StatusFilter::All);
    assert_eq!(ctx.admins.current_page(), 2);
}

// ---------------------------------------------------------------------------
// Fetch outcomes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn successful_fetch_replaces_items_and_pagination() {
    let server = MockServer::start().await;
    mount_admin_page(&server).await;
    mount_admin_summary(&server).await;
    let mut ctx = test_context(&server, None);
    let mut rx = ctx.events.subscribe();

    ctx.admins.fetch(StatusFilter::All, "", 1, 10).await;

    assert_eq!(ctx.admins.items().len(), 2);
    assert_eq!(ctx.admins.total_items(), 12);
    assert_eq!(ctx.admins.total_pages(), 2);
    assert_eq!(ctx.admins.current_page(), 1);
    assert_eq!(ctx.admins.items_per_page(), 10);
    assert!(ctx.admins.error().is_none());
    assert!(!ctx.admins.is_loading());
    assert_eq!(ctx.admins.summary().unwrap().pending, 4);
    assert_eq!(
        rx.try_recv().unwrap(),
        AppEvent::StoreChanged { store: "admins" }
    );
}

#[tokio::test]
async fn unrecognised_row_status_does_not_fail_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([admin_json("a-1", "pending"), admin_json("a-2", "suspended")]),
            2,
            1,
            1,
        )))
        .mount(&server)
        .await;
    mount_admin_summary(&server).await;
    let mut ctx = test_context(&server, None);

    ctx.admins.fetch(StatusFilter::All, "", 1, 10).await;

    assert!(ctx.admins.error().is_none());
    let items = ctx.admins.items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].status, RowStatus::Known(AdminStatus::Pending));
    assert_eq!(items[1].status, RowStatus::Other("suspended".to_string()));
    assert_eq!(items[1].status.as_str(), "suspended");
}

#[tokio::test]
async fn failed_fetch_keeps_previous_items_and_sets_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/admins"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([admin_json("a-1", "pending")]),
            1,
            1,
            1,
        )))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/admins"))
        .respond_with(ResponseTemplate::new(500).set_body_json(error_body("Database down")))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    ctx.admins.fetch(StatusFilter::All, "", 1, 10).await;
    assert_eq!(ctx.admins.items().len(), 1);

    ctx.admins
        .fetch(StatusFilter::Only(AdminStatus::Approved), "x", 2, 10)
        .await;

    assert_eq!(ctx.admins.items().len(), 1);
    assert_eq!(ctx.admins.items()[0].uuid, "a-1");
    assert_eq!(ctx.admins.error(), Some("Database down"));
    assert!(!ctx.admins.is_loading());
    // The filter that failed is not adopted.
    assert_eq!(ctx.admins.status(), StatusFilter::All);
}

#[tokio::test]
async fn failed_fetch_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/admins"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    ctx.admins.fetch(StatusFilter::All, "", 1, 10).await;

    assert_eq!(ctx.admins.error(), Some("Failed to fetch admins"));
}

#[tokio::test]
async fn summary_refreshes_even_when_list_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/admins"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    mount_admin_summary(&server).await;
    let mut ctx = test_context(&server, None);

    ctx.admins.fetch(StatusFilter::All, "", 1, 10).await;

    assert!(ctx.admins.error().is_some());
    assert_eq!(ctx.admins.summary().unwrap().total, 12);
    assert_eq!(
        request_log(&server).await,
        vec![
            "GET /api/admin/admins".to_string(),
            "GET /api/admin/admins/summary-status".to_string(),
        ]
    );
}

#[tokio::test]
async fn summary_failure_is_not_surfaced() {
    let server = MockServer::start().await;
    mount_admin_page(&server).await;
    let mut ctx = test_context(&server, None);

    ctx.admins.fetch(StatusFilter::All, "", 1, 10).await;

    assert!(ctx.admins.error().is_none());
    assert!(ctx.admins.summary().is_none());
}

// ---------------------------------------------------------------------------
// Decisions
// ---------------------------------------------------------------------------

#[tokio::test]
async fn approve_refetches_current_page_after_mutation() {
    let server = MockServer::start().await;
    mount_admin_page(&server).await;
    mount_admin_summary(&server).await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/admins/a-1/approved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    let ok = ctx.admins.approve("a-1", vec!["Looks good".into()]).await;

    assert!(ok);
    let log = request_log(&server).await;
    assert_eq!(log[0], "PUT /api/admin/admins/a-1/approved");
    assert_eq!(log[1], "GET /api/admin/admins");

    let put = &requests_to(&server, "/api/admin/admins/a-1/approved").await[0];
    assert_eq!(
        put.body_json::<serde_json::Value>().unwrap(),
        json!({ "notes": ["Looks good"] })
    );
}

#[tokio::test]
async fn failed_reject_does_not_refetch() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/admins/a-1/rejected"))
        .respond_with(ResponseTemplate::new(422).set_body_json(error_body("Notes required")))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    let ok = ctx.admins.reject("a-1", vec![]).await;

    assert!(!ok);
    assert_eq!(ctx.admins.error(), Some("Notes required"));
    assert!(!ctx.admins.is_loading());
    assert_eq!(
        request_log(&server).await,
        vec!["PUT /api/admin/admins/a-1/rejected".to_string()]
    );
}

#[tokio::test]
async fn failed_reject_without_message_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    assert!(!ctx.admins.reject("a-1", vec![]).await);
    assert_eq!(ctx.admins.error(), Some("Failed to reject admin"));
}

#[tokio::test]
async fn merchant_approve_sends_empty_notes() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/merchants/m-1/approved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/merchants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!([]), 0, 0, 1)))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    assert!(ctx.merchants.approve("m-1", vec!["ignored".into()]).await);

    let put = &requests_to(&server, "/api/admin/merchants/m-1/approved").await[0];
    assert_eq!(
        put.body_json::<serde_json::Value>().unwrap(),
        json!({ "notes": [] })
    );
}

#[tokio::test]
async fn driver_decision_refetches_detail_after_mutation() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/driver/d-1/rejected"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/driver/d-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(driver_detail_json("d-1", "rejected"))),
        )
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    let ok = ctx
        .drivers
        .reject("d-1", vec!["Blurry KTP photo".into()])
        .await;

    assert!(ok);
    assert_eq!(
        request_log(&server).await,
        vec![
            "PUT /api/admin/driver/d-1/rejected".to_string(),
            "GET /api/driver/d-1".to_string(),
        ]
    );
    let detail = ctx.drivers.detail().unwrap();
    assert_eq!(detail.driver.full_name, "Budi Santoso");
    assert_eq!(detail.work_area.name, "Jakarta Selatan");
}

#[tokio::test]
async fn driver_wallet_is_loaded_per_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/driver/d-1/wallet"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "last_balance": 75000.0,
            "items": [],
            "total_items": 0,
            "total_pages": 0,
            "current_page": 2,
            "items_per_page": 5
        }))))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    assert!(ctx.drivers.fetch_wallet("d-1", 2, 5).await);

    let wallet = ctx.drivers.wallet().unwrap();
    assert_eq!(wallet.last_balance, 75000.0);
    assert_eq!(wallet.page.current_page, 2);
    let request = &requests_to(&server, "/api/admin/driver/d-1/wallet").await[0];
    let query = query_map(request);
    assert_eq!(query["page"], "2");
    assert_eq!(query["limit"], "5");
}

// ---------------------------------------------------------------------------
// Wallet top-ups
// ---------------------------------------------------------------------------

#[tokio::test]
async fn topup_decision_puts_status_then_reloads_page() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/wallet/request-topup/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/wallet/request-topup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([topup_json(42, "approved")]),
            1,
            1,
            1,
        )))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin/wallet/request-topup/summary-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "pending": 0, "approved": 1, "rejected": 0, "total": 1
        }))))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    let ok = ctx
        .wallet
        .update_request_status(42, TopupDecision::Approved, "Transfer verified")
        .await;

    assert!(ok);
    let put = &requests_to(&server, "/api/admin/wallet/request-topup/42").await[0];
    assert_eq!(
        put.body_json::<serde_json::Value>().unwrap(),
        json!({ "status": "approved", "admin_note": "Transfer verified" })
    );
    assert_eq!(
        request_log(&server).await[..2],
        [
            "PUT /api/admin/wallet/request-topup/42".to_string(),
            "GET /api/admin/wallet/request-topup".to_string(),
        ]
    );
    assert_eq!(ctx.wallet.items().len(), 1);
    assert_eq!(ctx.wallet.summary().unwrap().approve, 1);
}

#[tokio::test]
async fn topup_reject_joins_notes() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/admin/wallet/request-topup/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!(null))))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    ctx.wallet
        .reject(&7, vec!["No receipt".into(), "Amount mismatch".into()])
        .await;

    let put = &requests_to(&server, "/api/admin/wallet/request-topup/7").await[0];
    assert_eq!(
        put.body_json::<serde_json::Value>().unwrap(),
        json!({ "status": "rejected", "admin_note": "No receipt\nAmount mismatch" })
    );
}

#[tokio::test]
async fn failed_topup_decision_uses_fallback() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    let ok = ctx
        .wallet
        .update_request_status(1, TopupDecision::Rejected, "")
        .await;

    assert!(!ok);
    assert_eq!(ctx.wallet.error(), Some("Failed to update request status"));
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn user_list_uses_per_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([{ "id": 5, "uuid": "u-5", "username": "sari", "email": null, "roles": ["customer"] }]),
            1,
            1,
            1,
        )))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    ctx.users.fetch(StatusFilter::All, "sari", 1, 20).await;

    assert_eq!(ctx.users.items()[0].username, "sari");
    let query = query_map(&requests_to(&server, "/api/admin/users").await[0]);
    assert_eq!(query["per_page"], "20");
    assert_eq!(query["search"], "sari");
    assert!(!query.contains_key("limit"));
    assert!(!query.contains_key("status"));
}

#[tokio::test]
async fn user_detail_failure_keeps_previous_and_resets() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/admin/users/5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 5, "uuid": "u-5", "username": "sari", "email": null, "roles": ["customer"]
        }))))
        .mount(&server)
        .await;
    let mut ctx = test_context(&server, None);

    assert!(ctx.users.fetch_detail(&5).await);
    assert!(!ctx.users.fetch_detail(&6).await);

    assert_eq!(ctx.users.detail().unwrap().username, "sari");
    assert_eq!(ctx.users.error(), Some("Failed to fetch user detail"));

    ctx.users.reset_detail();
    assert!(ctx.users.detail().is_none());
}
