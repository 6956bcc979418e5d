mod common;

use std::time::{Duration, Instant};

use axum::http::StatusCode;
use serde_json::json;

use common::{Canned, MockHarvest};
use harvest_api::v2::{ClientFilter, TimeEntryFilter};
use harvest_api::{HarvestClient, HarvestError, ListOptions};

#[tokio::test]
async fn fetch_all_pages_follows_next_page() {
    let mock = MockHarvest::start().await;
    let client = HarvestClient::from_config(&mock.config()).unwrap();
    mock.respond_json(StatusCode::OK, json!({"time_entries": [{"id": 1}, {"id": 2}], "page": 1, "total_pages": 3, "next_page": 2}));
    mock.respond_json(StatusCode::OK, json!({"time_entries": [{"id": 3}], "page": 2, "total_pages": 3, "next_page": 3}));
    mock.respond_json(StatusCode::OK, json!({"time_entries": [{"id": 4}], "page": 3, "total_pages": 3, "next_page": null}));

    let filter = TimeEntryFilter {
        project_id: Some(14307913),
        paging: ListOptions { page: Some(7), per_page: Some(2) },
        ..Default::default()
    };
    let entries = client.all_time_entries(&filter).await.unwrap();
    let ids: Vec<u64> = entries.iter().filter_map(|e| e["id"].as_u64()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);

    let reqs = mock.requests();
    assert_eq!(reqs.len(), 3);
    for (i, req) in reqs.iter().enumerate() {
        assert_eq!(req.path, "/v2/time_entries");
        assert_eq!(req.query_value("page"), Some((i + 1).to_string().as_str()));
        assert_eq!(req.query_value("per_page"), Some("2"));
        assert_eq!(req.query_value("project_id"), Some("14307913"));
        assert_eq!(req.query.iter().filter(|(k, _)| k == "page").count(), 1);
    }
}

#[tokio::test]
async fn fetch_all_pages_rejects_page_without_collection() {
    let mock = MockHarvest::start().await;
    let client = HarvestClient::from_config(&mock.config()).unwrap();
    mock.respond_json(StatusCode::OK, json!({"projects": [], "next_page": null}));
    let err = client.all_clients(&ClientFilter::default()).await.unwrap_err();
    assert!(matches!(err, HarvestError::UnexpectedResponse(ref m) if m.contains("clients")));
}

#[tokio::test]
async fn rate_limited_request_is_retried_when_enabled() {
    let mock = MockHarvest::start().await;
    let mut cfg = mock.config();
    cfg.http_max_retries = 2;
    let client = HarvestClient::from_config(&cfg).unwrap();
    mock.respond(Canned::json(StatusCode::TOO_MANY_REQUESTS, json!({"message": "slow down"})).with_header("retry-after", "0"));
    mock.respond_json(StatusCode::SERVICE_UNAVAILABLE, json!({}));
    mock.respond_json(StatusCode::OK, json!({"id": 2, "name": "Retried"}));

    let out = client.get_task(2).await.unwrap();
    assert_eq!(out["name"], "Retried");
    assert_eq!(mock.requests().len(), 3);
}

#[tokio::test]
async fn retries_are_off_by_default() {
    let mock = MockHarvest::start().await;
    let client = HarvestClient::from_config(&mock.config()).unwrap();
    mock.respond_json(StatusCode::TOO_MANY_REQUESTS, json!({"message": "slow down"}));

    let err = client.get_task(2).await.unwrap_err();
    assert_eq!(err.status(), Some(429));
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let mock = MockHarvest::start().await;
    let mut cfg = mock.config();
    cfg.http_max_retries = 3;
    let client = HarvestClient::from_config(&cfg).unwrap();
    mock.respond_json(StatusCode::UNAUTHORIZED, json!({"error": "invalid_token", "error_description": "The access token provided is expired"}));

    let err = client.me().await.unwrap_err();
    match err {
        HarvestError::Status { status, message } => {
            assert_eq!(status, 401);
            assert_eq!(message.as_deref(), Some("The access token provided is expired; invalid_token"));
        }
        other => panic!("unexpected error variant: {:?}", other),
    }
    assert_eq!(mock.requests().len(), 1);
}

#[tokio::test]
async fn connect_errors_are_retried_then_surfaced() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let cfg = harvest_api::Config {
        api_url: format!("http://{}/v2", addr),
        access_token: Some("test-token".into()),
        account_id: Some("12345".into()),
        http_max_retries: 1,
        http_retry_backoff_ms: 200,
        ..Default::default()
    };
    let client = HarvestClient::from_config(&cfg).unwrap();

    let started = Instant::now();
    let err = client.company().await.unwrap_err();
    match err {
        HarvestError::Http(e) => assert!(e.is_connect(), "expected connect error, got {:?}", e),
        other => panic!("unexpected error variant: {:?}", other),
    }
    // one backoff sleep between the two attempts
    assert!(started.elapsed() >= Duration::from_millis(200));
}

#[tokio::test]
async fn retry_budget_is_bounded() {
    let mock = MockHarvest::start().await;
    let mut cfg = mock.config();
    cfg.http_max_retries = 1;
    let client = HarvestClient::from_config(&cfg).unwrap();
    mock.respond_json(StatusCode::BAD_GATEWAY, json!({}));
    mock.respond_json(StatusCode::BAD_GATEWAY, json!({}));
    mock.respond_json(StatusCode::OK, json!({}));

    let err = client.company().await.unwrap_err();
    assert_eq!(err.status(), Some(502));
    assert_eq!(mock.requests().len(), 2);
}
