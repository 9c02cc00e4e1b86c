//! Common test utilities for integration tests.
//!
//! Tests drive the production router from [`sentinel_api::app::build_router`]
//! through `tower::ServiceExt::oneshot`, so the layer stack under test is the
//! one `main.rs` serves.
//!
//! ```ignore
//! let response = common::send(common::app(), Method::GET, "/health").await;
//! let body = common::json_body(response).await;
//! ```

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request},
    response::Response,
    Router,
};
use sentinel_api::{app::build_router, config::Config};
use serde_json::Value;
use tower::ServiceExt;

/// Router built from default configuration.
pub fn app() -> Router {
    app_with(&Config::default())
}

/// Router built from a custom configuration.
pub fn app_with(config: &Config) -> Router {
    build_router(config)
}

/// Send a body-less request through the router.
pub async fn send(app: Router, method: Method, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
    .expect("response")
}

/// Collect and parse a JSON response body.
pub async fn json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("body");
    serde_json::from_slice(&body).expect("json body")
}
