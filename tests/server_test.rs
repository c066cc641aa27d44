use axum::body::Body;
use axum::http::{Request, StatusCode};
use httpmock::prelude::*;
use revwhois::{FileCredentialSource, LookupSettings, SearchOrchestrator, WhoisXmlClient};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

fn app(server: &MockServer, temp_dir: &TempDir) -> axum::Router {
    let key_path = temp_dir.path().join("whoisxml.conf");
    std::fs::write(&key_path, "at_server_key").unwrap();

    let settings = LookupSettings {
        api_endpoint: server.url("/api/v2"),
        timeout_seconds: 5,
        ..LookupSettings::default()
    };
    revwhois::server::router(Arc::new(SearchOrchestrator::new(
        FileCredentialSource::new(key_path),
        WhoisXmlClient::new(settings),
    )))
}

async fn post_search(app: axum::Router, body: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/search")
                .header("Content-Type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_search_endpoint_success() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2")
            .json_body_partial(r#"{"mode": "preview"}"#);
        then.status(200).json_body(json!({"domainsCount": 1}));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/v2")
            .json_body_partial(r#"{"mode": "purchase"}"#);
        then.status(200)
            .json_body(json!({"domainsList": ["example.com"], "domainsCount": 1}));
    });

    let (status, body) = post_search(app(&server, &temp_dir), r#"{"keyword": "example"}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"status": "success", "domains": ["example.com"], "count": 1, "keyword": "example"})
    );
}

#[tokio::test]
async fn test_search_endpoint_missing_keyword() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    let any_call = server.mock(|when, then| {
        when.method(POST).path("/api/v2");
        then.status(200).json_body(json!({"domainsCount": 1}));
    });

    for body in [r#"{}"#, r#"{"keyword": ""}"#, r#"{"keyword": 42}"#, "not json"] {
        let (status, json_body) = post_search(app(&server, &temp_dir), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json_body, json!({"status": "error", "message": "Keyword is required"}));
    }

    any_call.assert_hits(0);
}

#[tokio::test]
async fn test_search_endpoint_no_results_is_bad_request() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v2");
        then.status(200).json_body(json!({"domainsCount": 0}));
    });

    let (status, body) = post_search(app(&server, &temp_dir), r#"{"keyword": "zzz"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "No domains found for this keyword");
}

#[tokio::test]
async fn test_health_endpoint() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();

    let response = app(&server, &temp_dir)
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_search_endpoint_wrong_shaped_body_is_bad_request() {
    let temp_dir = TempDir::new().unwrap();
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/api/v2");
        then.status(200).json_body(json!({"domainsCount": "5"}));
    });

    let (status, body) = post_search(app(&server, &temp_dir), r#"{"keyword": "shape"}"#).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "error");
    assert!(body["message"]
        .as_str()
        .unwrap()
        .starts_with("Error occurred while fetching domains: invalid type: string \"5\""));
}
