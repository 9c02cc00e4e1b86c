//! Status endpoints.

use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

/// Message returned by `GET /`.
pub const ROOT_MESSAGE: &str = "SentinelAPI Operational";

/// Body of `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `GET /`: static operational message.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

/// `GET /health`: liveness plus the package version.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Routes without any layers applied.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_root_payload() {
        let Json(body) = root().await;
        assert_eq!(body.message, "SentinelAPI Operational");
    }

    #[tokio::test]
    async fn test_health_reports_package_version() {
        let Json(body) = health_check().await;
        assert_eq!(body.status, "healthy");
        assert_eq!(body.version, "0.1.0");
    }
}
