//! Security headers middleware for HTTP responses.
//!
//! The header set is built once at startup into an immutable `HeaderMap`
//! and stamped onto every outgoing response, including fallback 404/405
//! responses, by [`security_headers_middleware`].

use std::sync::Arc;

use axum::{
    extract::Request,
    http::{
        header::{
            CONTENT_SECURITY_POLICY, REFERRER_POLICY, STRICT_TRANSPORT_SECURITY,
            X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS,
        },
        HeaderMap, HeaderValue,
    },
    middleware::Next,
    response::Response,
    Extension,
};

use crate::config::SecurityHeadersConfig;

pub const CONTENT_SECURITY_POLICY_VALUE: &str = "default-src 'self'";
pub const FRAME_OPTIONS_VALUE: &str = "DENY";
/// Two years. Every Strict-Transport-Security value starts with this.
pub const HSTS_MAX_AGE: &str = "max-age=63072000";

fn hsts_value(config: &SecurityHeadersConfig) -> HeaderValue {
    HeaderValue::from_static(
        match (config.hsts_include_subdomains, config.hsts_preload) {
            (false, false) => "max-age=63072000",
            (true, false) => "max-age=63072000; includeSubDomains",
            (false, true) => "max-age=63072000; preload",
            (true, true) => "max-age=63072000; includeSubDomains; preload",
        },
    )
}

/// Build the security header set.
///
/// Content-Security-Policy, X-Frame-Options and the HSTS `max-age` are fixed;
/// `config` can only append HSTS directives. Returns an `Arc`-wrapped
/// `HeaderMap` shared across requests via Axum's `Extension` layer.
#[must_use]
pub fn build_security_headers(config: &SecurityHeadersConfig) -> Arc<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(
        CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(CONTENT_SECURITY_POLICY_VALUE),
    );
    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static(FRAME_OPTIONS_VALUE));
    headers.insert(STRICT_TRANSPORT_SECURITY, hsts_value(config));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(
        REFERRER_POLICY,
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    Arc::new(headers)
}

/// Middleware to add security headers to all responses.
///
/// Reads the pre-built `HeaderMap` from an `Extension` and overwrites the
/// matching headers on every response. Install it outside every other layer
/// so nothing downstream can strip the headers again:
///
/// ```ignore
/// let app = Router::new()
///     // ... routes ...
///     .layer(middleware::from_fn(security_headers_middleware))
///     .layer(Extension(headers));
/// ```
pub async fn security_headers_middleware(
    Extension(headers): Extension<Arc<HeaderMap>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let response_headers = response.headers_mut();
    for (name, value) in headers.iter() {
        response_headers.insert(name.clone(), value.clone());
    }
    response
}
