mod common;

use axum_test::TestServer;
use serde_json::Value;
use trust_badge_service::routes::app_router;

fn make_server() -> TestServer {
    let (state, _) = common::create_test_state();
    TestServer::new(app_router(state)).unwrap()
}

#[tokio::test]
async fn test_catalog_lists_outlets_in_report_order() {
    let server = make_server();

    let response = server.get("/api/grids/1/outlets").await;
    response.assert_status_ok();

    let body = response.json::<Value>();
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 8);

    let ids: Vec<i64> = entries.iter().map(|e| e["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[tokio::test]
async fn test_catalog_decorates_known_outlets_with_logos() {
    let server = make_server();

    let body = server.get("/api/grids/1/outlets").await.json::<Value>();
    let entries = body.as_array().unwrap();

    // "Business Insider" is an exact table hit.
    assert!(entries[0]["logo_url"].as_str().unwrap().contains("business-insider"));
    // "Regional Gazette" has no logo and no URL.
    assert!(entries[4]["logo_url"].is_null());
    assert!(entries[4]["domain"].is_null());
    // Derived domains flow through.
    assert_eq!(entries[3]["domain"], "forbes.com");
}

#[tokio::test]
async fn test_catalog_for_unknown_grid_is_empty() {
    let server = make_server();

    let response = server.get("/api/grids/404/outlets").await;
    response.assert_status_ok();
    assert!(response.json::<Value>().as_array().unwrap().is_empty());
}
