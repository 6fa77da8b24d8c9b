//! Shared helpers for driving the router in integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use mergington_core::ActivityDirectory;
use mergington_gateway::{create_router, GatewayConfig};
use tower::ServiceExt;

const BODY_LIMIT: usize = 1024 * 1024;

/// A fresh router over a freshly seeded directory.
pub fn seeded_app() -> Router {
    create_router(Arc::new(ActivityDirectory::seeded()), &GatewayConfig::new())
}

/// Raw response parts.
pub struct RawResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Send a request without a body and collect the whole response.
pub async fn send_raw(app: &Router, method: Method, uri: &str) -> RawResponse {
    let req = match Request::builder().method(method).uri(uri).body(Body::empty()) {
        Ok(r) => r,
        Err(e) => panic!("failed to build request for {uri}: {e}"),
    };
    let resp = match app.clone().oneshot(req).await {
        Ok(r) => r,
        Err(e) => panic!("handler error for {uri}: {e}"),
    };
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = match axum::body::to_bytes(resp.into_body(), BODY_LIMIT).await {
        Ok(b) => b,
        Err(e) => panic!("failed to read body for {uri}: {e}"),
    };
    RawResponse { status, headers, body }
}

/// Send a request and parse the response body as JSON.
pub async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, serde_json::Value) {
    let raw = send_raw(app, method, uri).await;
    let json = match serde_json::from_slice(&raw.body) {
        Ok(v) => v,
        Err(e) => panic!("invalid JSON from {uri}: {e}"),
    };
    (raw.status, json)
}

/// Fetch `/activities` and return the roster of `activity`.
pub async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let (status, body) = send(app, Method::GET, "/activities").await;
    assert_eq!(status, StatusCode::OK);
    match serde_json::from_value(body[activity]["participants"].clone()) {
        Ok(list) => list,
        Err(e) => panic!("{activity} has no participant list: {e}"),
    }
}
