//! Health check handlers for Kubernetes probes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator, always "ok" once the process is serving.
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Configured Data API endpoint (readiness only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

impl HealthStatus {
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            endpoint: None,
        }
    }

    pub fn ready(service: &str, version: &str, endpoint: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            endpoint: Some(endpoint.to_string()),
        }
    }
}

/// Liveness probe handler: 200 once the process is running.
pub async fn health_live() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthStatus::alive(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
        )),
    )
}

/// Readiness probe handler.
///
/// State construction already guarantees a validated configuration, so
/// readiness reports the endpoint the service will call. No upstream
/// probe is made; the Data API is consulted per request only.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthStatus::ready(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            &state.client().config().endpoint,
        )),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alive_omits_the_endpoint() {
        let status = HealthStatus::alive("airports", "0.1.0");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("endpoint"));
    }

    #[test]
    fn ready_reports_the_configured_endpoint() {
        let status = HealthStatus::ready("airports", "0.1.0", "api.example.com");
        assert_eq!(status.endpoint.as_deref(), Some("api.example.com"));
    }
}
