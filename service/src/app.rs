//! Router assembly shared by `main.rs` and the integration tests.

use axum::{middleware, Extension, Router};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    config::Config,
    http::{build_security_headers, security_headers_middleware},
    routes,
};

/// Build the application router with every layer installed.
///
/// Layer order, outermost first:
/// 1. `Extension` carrying the shared security header map
/// 2. Security headers middleware
/// 3. Request tracing
/// 4. Routes (and axum's 404/405 fallbacks)
#[must_use]
pub fn build_router(config: &Config) -> Router {
    let headers = build_security_headers(&config.security_headers);

    routes::router().layer(
        ServiceBuilder::new()
            .layer(Extension(headers))
            .layer(middleware::from_fn(security_headers_middleware))
            .layer(TraceLayer::new_for_http()),
    )
}
