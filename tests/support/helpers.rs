// tests/support/helpers.rs
use std::sync::Arc;

use super::mocks::{DummyClock, InMemoryBlog};
use axum::body::{self, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode, header::CONTENT_TYPE};
use crossblog::application::{ports::time::Clock, services::ApplicationServices};
use crossblog::domain::{
    article::{ArticleReadRepository, ArticleWriteRepository},
    comment::{CommentReadRepository, CommentWriteRepository},
};
use crossblog::presentation::http::{routes::build_router, state::HttpState};
use serde_json::Value;
use tower::util::ServiceExt as _;

pub fn services_for(blog: Arc<InMemoryBlog>) -> Arc<ApplicationServices> {
    let article_write: Arc<dyn ArticleWriteRepository> = blog.clone();
    let article_read: Arc<dyn ArticleReadRepository> = blog.clone();
    services_with(article_write, article_read, blog)
}

pub fn services_with(
    article_write: Arc<dyn ArticleWriteRepository>,
    article_read: Arc<dyn ArticleReadRepository>,
    blog: Arc<InMemoryBlog>,
) -> Arc<ApplicationServices> {
    let comment_write: Arc<dyn CommentWriteRepository> = blog.clone();
    let comment_read: Arc<dyn CommentReadRepository> = blog;
    let clock: Arc<dyn Clock> = Arc::new(DummyClock);

    Arc::new(ApplicationServices::new(
        article_write,
        article_read,
        comment_write,
        comment_read,
        clock,
    ))
}

/// Router over a fresh in-memory store, returned alongside it for seeding.
pub fn make_test_router() -> (axum::Router, Arc<InMemoryBlog>) {
    let blog = Arc::new(InMemoryBlog::new());
    let services = services_for(Arc::clone(&blog));
    (build_router(HttpState { services }), blog)
}

pub fn router_for(services: Arc<ApplicationServices>) -> axum::Router {
    build_router(HttpState { services })
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

/// Send one request through the router. Non-JSON or empty bodies come back
/// as `Value::Null`.
pub async fn send(app: &axum::Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send_request(app, request).await
}

pub async fn send_request(app: &axum::Router, request: Request<Body>) -> TestResponse {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    TestResponse {
        status,
        headers: parts.headers,
        json,
    }
}

/// Assert an `ErrorResponse` JSON body with the expected status and error string.
pub fn assert_error_response(resp: &TestResponse, expected_status: StatusCode, expected_error: &str) {
    assert_eq!(resp.status, expected_status, "unexpected body: {}", resp.json);
    let ct = resp
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);
    let err_field = resp.json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = resp.json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}

/// Field names carrying validation messages in a 400 body.
pub fn error_fields(resp: &TestResponse) -> Vec<String> {
    resp.json
        .get("fields")
        .and_then(|v| v.as_object())
        .map(|fields| fields.keys().cloned().collect())
        .unwrap_or_default()
}
