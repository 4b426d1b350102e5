//! Airport Data API HTTP microservice.
//!
//! Exposes the airport resource of the travel Data API over REST:
//!
//! - `GET/POST/PUT/DELETE /airports/{id}` - Airport document CRUD
//! - `GET /airports/{id}/routes` - Routes touching an airport (by FAA code)
//! - `GET /airports/{id}/airlines` - Airlines serving an airport (by FAA code)
//! - `GET /airports/{id}/hotels/nearby/{distance}` - Geo-proximity hotel search
//! - `GET /health/live` / `GET /health/ready` - Kubernetes probes
//!
//! # Configuration
//!
//! - `DATA_API_ENDPOINT`, `DATA_API_USERNAME`, `DATA_API_PASSWORD` (required)
//! - `DATA_API_BUCKET`/`DATA_API_SCOPE`/`DATA_API_COLLECTION` - namespace overrides
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text

use std::env;
use std::net::SocketAddr;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, info};

use aerodata_lib::{AirlineRow, AirportDocument, Error as LibError, HotelSearchResponse};
use aerodata_service_shared::{
    health_live, health_ready, init_logging, ApiError, AppState, LoggingConfig,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service("airports");
    init_logging(&logging_config);

    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let state = AppState::from_env().map_err(|e| {
        error!(error = %e, "failed to load data api configuration");
        e
    })?;

    info!(
        endpoint = %state.client().config().endpoint,
        port = port,
        "starting airports service"
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}

/// Build the service router.
fn app(state: AppState) -> Router {
    Router::new()
        .route(
            "/airports/{id}",
            get(get_airport)
                .post(create_airport)
                .put(update_airport)
                .delete(delete_airport),
        )
        .route("/airports/{id}/routes", get(get_airport_routes))
        .route("/airports/{id}/airlines", get(get_airport_airlines))
        .route(
            "/airports/{id}/hotels/nearby/{distance}",
            get(get_hotels_near_airport),
        )
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Acknowledgment body returned after a delete.
#[derive(Debug, Serialize)]
struct DeleteAck {
    message: String,
}

async fn get_airport(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<AirportDocument>, ApiError> {
    let request_id = generate_request_id();
    info!(request_id = %request_id, id = %id, "handling get airport");

    state
        .client()
        .get_airport(&id)
        .await
        .map(Json)
        .map_err(|e| fail(&request_id, "get", e))
}

async fn create_airport(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(airport): Json<AirportDocument>,
) -> Result<Json<Value>, ApiError> {
    let request_id = generate_request_id();
    info!(request_id = %request_id, id = %id, "handling create airport");

    state
        .client()
        .create_airport(&id, &airport)
        .await
        .map(Json)
        .map_err(|e| fail(&request_id, "create", e))
}

async fn update_airport(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(airport): Json<AirportDocument>,
) -> Result<Json<Value>, ApiError> {
    let request_id = generate_request_id();
    info!(request_id = %request_id, id = %id, "handling update airport");

    state
        .client()
        .update_airport(&id, &airport)
        .await
        .map(Json)
        .map_err(|e| fail(&request_id, "update", e))
}

async fn delete_airport(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteAck>, ApiError> {
    let request_id = generate_request_id();
    info!(request_id = %request_id, id = %id, "handling delete airport");

    state
        .client()
        .delete_airport(&id)
        .await
        .map(|()| {
            Json(DeleteAck {
                message: format!("Airport document {id} deleted successfully."),
            })
        })
        .map_err(|e| fail(&request_id, "delete", e))
}

async fn get_airport_routes(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<Value>>, ApiError> {
    let request_id = generate_request_id();
    info!(request_id = %request_id, code = %code, "handling airport routes query");

    state
        .client()
        .routes_by_airport(&code)
        .await
        .map(Json)
        .map_err(|e| fail(&request_id, "routes", e))
}

async fn get_airport_airlines(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<AirlineRow>>, ApiError> {
    let request_id = generate_request_id();
    info!(request_id = %request_id, code = %code, "handling airport airlines query");

    state
        .client()
        .airlines_by_airport(&code)
        .await
        .map(Json)
        .map_err(|e| fail(&request_id, "airlines", e))
}

async fn get_hotels_near_airport(
    State(state): State<AppState>,
    Path((id, distance)): Path<(String, String)>,
) -> Result<Json<HotelSearchResponse>, ApiError> {
    let request_id = generate_request_id();
    info!(
        request_id = %request_id,
        id = %id,
        distance = %distance,
        "handling hotel search"
    );

    state
        .client()
        .hotels_near_airport(&id, &distance)
        .await
        .map(Json)
        .map_err(|e| fail(&request_id, "hotels", e))
}

fn fail(request_id: &str, operation: &str, error: LibError) -> ApiError {
    error!(
        request_id = %request_id,
        operation = operation,
        error = %error,
        code = error.code(),
        "airport request failed"
    );
    ApiError::from_lib_error(&error)
}

/// Generate a unique request ID for tracing.
fn generate_request_id() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();

    format!("req-{:x}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerodata_lib::DataApiConfig;
    use axum_test::TestServer;
    use serde_json::Value;

    fn test_server() -> TestServer {
        let state =
            AppState::from_config(DataApiConfig::new("api.example.com", "admin", "secret"))
                .unwrap();
        TestServer::new(app(state)).unwrap()
    }

    #[tokio::test]
    async fn health_live_reports_ok() {
        let server = test_server();
        let response = server.get("/health/live").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert!(body["service"].as_str().unwrap().starts_with("aerodata"));
    }

    #[tokio::test]
    async fn health_ready_reports_the_configured_endpoint() {
        let server = test_server();
        let response = server.get("/health/ready").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["endpoint"], "api.example.com");
    }

    #[tokio::test]
    async fn malformed_distances_are_rejected_without_an_upstream_call() {
        // The configured endpoint is unreachable, so a 400 (not a 500
        // transport error) proves validation ran before any request.
        let server = test_server();
        let response = server
            .get("/airports/airport_1254/hotels/nearby/banana")
            .await;
        response.assert_status_bad_request();

        let body: Value = response.json();
        assert_eq!(body["error"], "ValidationError");
        assert!(body["message"].as_str().unwrap().contains("banana"));
    }

    #[tokio::test]
    async fn unknown_paths_are_not_found() {
        let server = test_server();
        let response = server.get("/nope").await;
        response.assert_status_not_found();
    }

    #[test]
    fn request_ids_are_prefixed() {
        assert!(generate_request_id().starts_with("req-"));
    }
}
