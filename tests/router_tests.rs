//! Router tests for the health endpoint.
//!
//! Uses `tower::ServiceExt::oneshot` to drive the router without binding a
//! TCP port.

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use reading_backend::config::{CACHE_CONTROL_HEALTH, HEALTH_DETAILS, HEALTH_MESSAGE};
use reading_backend::create_router;
use reading_backend::routes::health::HealthStatus;
use tower::ServiceExt; // .oneshot()

fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn send(req: Request<Body>) -> Response {
    create_router().oneshot(req).await.unwrap()
}

async fn body_bytes(resp: Response) -> Bytes {
    to_bytes(resp.into_body(), 64 * 1024).await.unwrap()
}

#[tokio::test]
async fn get_root_returns_200_with_health_payload() {
    let resp = send(request(Method::GET, "/")).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let body: HealthStatus = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    assert_eq!(body.status, "ok");
    assert_eq!(body.message, HEALTH_MESSAGE);
    assert_eq!(body.details, HEALTH_DETAILS);
}

#[tokio::test]
async fn payload_has_exactly_three_string_fields() {
    let resp = send(request(Method::GET, "/")).await;
    let value: serde_json::Value = serde_json::from_slice(&body_bytes(resp).await).unwrap();
    let object = value.as_object().unwrap();

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["details", "message", "status"]);
    assert!(object.values().all(serde_json::Value::is_string));
}

#[tokio::test]
async fn repeated_requests_yield_identical_bodies() {
    let first = body_bytes(send(request(Method::GET, "/")).await).await;
    for _ in 0..5 {
        let next = body_bytes(send(request(Method::GET, "/")).await).await;
        assert_eq!(first, next);
    }
}

#[tokio::test]
async fn health_response_is_not_cacheable() {
    let resp = send(request(Method::GET, "/")).await;
    assert_eq!(resp.headers()[header::CACHE_CONTROL], CACHE_CONTROL_HEALTH);
}

#[tokio::test]
async fn query_string_is_ignored() {
    let resp = send(request(Method::GET, "/?probe=1")).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_paths_return_404() {
    for path in ["/nonexistent", "/health", "/api/v1/students"] {
        let resp = send(request(Method::GET, path)).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "path {path}");
    }
}

#[tokio::test]
async fn wrong_method_on_root_returns_405() {
    for method in [Method::POST, Method::PUT, Method::DELETE] {
        let resp = send(request(method.clone(), "/")).await;
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "method {method}");
    }
}

#[tokio::test]
async fn request_id_is_generated_when_absent() {
    let resp = send(request(Method::GET, "/")).await;
    let id = resp.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(id).is_ok(), "generated id {id} is not a uuid");
}

#[tokio::test]
async fn request_id_is_generated_on_not_found_too() {
    let resp = send(request(Method::GET, "/missing")).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert!(resp.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn caller_request_id_is_echoed() {
    let req = Request::builder()
        .uri("/")
        .header("x-request-id", "frontend-42")
        .body(Body::empty())
        .unwrap();
    let resp = send(req).await;
    assert_eq!(resp.headers()["x-request-id"], "frontend-42");
}

#[tokio::test]
async fn malformed_caller_request_id_is_replaced() {
    let req = Request::builder()
        .uri("/")
        .header("x-request-id", "has spaces; and=junk")
        .body(Body::empty())
        .unwrap();
    let resp = send(req).await;
    let id = resp.headers()["x-request-id"].to_str().unwrap();
    assert_ne!(id, "has spaces; and=junk");
    assert!(uuid::Uuid::parse_str(id).is_ok());
}
