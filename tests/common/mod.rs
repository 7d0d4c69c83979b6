// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request};
use octofit_dashboard::config::Config;
use octofit_dashboard::routes::create_router;
use octofit_dashboard::services::BackendClient;
use octofit_dashboard::AppState;
use serde_json::Value;
use std::sync::Arc;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Backend base URL nothing listens on.
#[allow(dead_code)]
pub const UNREACHABLE_BACKEND: &str = "http://127.0.0.1:1";

/// Create a backend client pointed at `base_url`.
#[allow(dead_code)]
pub fn test_client(base_url: &str) -> BackendClient {
    BackendClient::new(&Config::test_default().with_base_url(base_url))
        .expect("Failed to build backend client")
}

/// Create a test app talking to the backend at `base_url`.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app(base_url: &str) -> (axum::Router, Arc<AppState>) {
    let config = Config::test_default().with_base_url(base_url);
    let state = Arc::new(AppState::new(config).expect("Failed to build app state"));
    (create_router(state.clone()), state)
}

/// Serve `body` from `GET /api/{collection}/`.
#[allow(dead_code)]
pub async fn mount_collection(server: &MockServer, collection: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{}/", collection)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[allow(dead_code)]
pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Form POST as a browser would send it.
#[allow(dead_code)]
pub fn post_form(uri: &str, form: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

#[allow(dead_code)]
pub async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
