//! AWS Lambda function for the airport resource.
//!
//! One function serves the whole resource behind API Gateway: document
//! CRUD on `/airports/{airportId}` plus the routes and airlines queries
//! on `/airports/{airportCode}/routes` and `/airports/{airportCode}/airlines`.

use lambda_runtime::{service_fn, Error as LambdaError, LambdaEvent};
use serde::Serialize;
use tracing::{error, info};

use aerodata_lambda_shared::{
    data_api_client, error_response, init_tracing, json_response, ApiGatewayRequest,
    ApiGatewayResponse,
};
use aerodata_lib::{AirportDocument, DataApiClient, Error as LibError};

/// Operations this function serves, resolved from method and path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Get,
    Create,
    Update,
    Delete,
    Routes,
    Airlines,
}

/// Resolve the requested operation from the proxy event.
pub fn resolve_operation(method: &str, path: &str) -> Option<Operation> {
    let method = method.to_ascii_uppercase();
    let path = path.trim_end_matches('/');

    if path.ends_with("/routes") {
        return (method == "GET").then_some(Operation::Routes);
    }
    if path.ends_with("/airlines") {
        return (method == "GET").then_some(Operation::Airlines);
    }

    match method.as_str() {
        "GET" => Some(Operation::Get),
        "POST" => Some(Operation::Create),
        "PUT" => Some(Operation::Update),
        "DELETE" => Some(Operation::Delete),
        _ => None,
    }
}

/// Acknowledgment body returned after a delete.
#[derive(Debug, Serialize)]
struct DeleteAck {
    message: String,
}

/// Entry point used by the Lambda runtime.
pub async fn run() -> Result<(), LambdaError> {
    init_tracing();
    lambda_runtime::run(service_fn(handler)).await
}

/// Lambda handler invoked per request.
pub async fn handler(
    event: LambdaEvent<ApiGatewayRequest>,
) -> Result<ApiGatewayResponse, LambdaError> {
    let request_id = event.context.request_id.clone();
    let request = event.payload;

    let client = match data_api_client() {
        Ok(client) => client,
        Err(e) => {
            error!(request_id = %request_id, error = %e, "data api client unavailable");
            return Ok(error_response(e));
        }
    };

    Ok(handle_request(client, &request, &request_id).await)
}

/// Core handler logic separated for reuse in tests.
pub async fn handle_request(
    client: &DataApiClient,
    request: &ApiGatewayRequest,
    request_id: &str,
) -> ApiGatewayResponse {
    let Some(operation) = resolve_operation(&request.http_method, &request.path) else {
        return error_response(&LibError::Validation {
            message: format!(
                "unsupported method {} for {}",
                request.http_method, request.path
            ),
        });
    };

    info!(
        request_id = %request_id,
        method = %request.http_method,
        path = %request.path,
        operation = ?operation,
        "handling airport request"
    );

    let result = match operation {
        Operation::Get => match required_param(request, "airportId") {
            Ok(key) => client
                .get_airport(key)
                .await
                .map(|airport| json_response(200, &airport)),
            Err(e) => Err(e),
        },
        Operation::Create => match (required_param(request, "airportId"), parse_body(request)) {
            (Ok(key), Ok(airport)) => client
                .create_airport(key, &airport)
                .await
                .map(|ack| json_response(200, &ack)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        },
        Operation::Update => match (required_param(request, "airportId"), parse_body(request)) {
            (Ok(key), Ok(airport)) => client
                .update_airport(key, &airport)
                .await
                .map(|ack| json_response(200, &ack)),
            (Err(e), _) | (_, Err(e)) => Err(e),
        },
        Operation::Delete => match required_param(request, "airportId") {
            Ok(key) => client.delete_airport(key).await.map(|()| {
                json_response(
                    200,
                    &DeleteAck {
                        message: format!("Airport document {key} deleted successfully."),
                    },
                )
            }),
            Err(e) => Err(e),
        },
        Operation::Routes => match required_param(request, "airportCode") {
            Ok(code) => client
                .routes_by_airport(code)
                .await
                .map(|routes| json_response(200, &routes)),
            Err(e) => Err(e),
        },
        Operation::Airlines => match required_param(request, "airportCode") {
            Ok(code) => client
                .airlines_by_airport(code)
                .await
                .map(|airlines| json_response(200, &airlines)),
            Err(e) => Err(e),
        },
    };

    result.unwrap_or_else(|e| {
        error!(request_id = %request_id, error = %e, code = e.code(), "airport request failed");
        error_response(&e)
    })
}

fn required_param<'a>(request: &'a ApiGatewayRequest, name: &str) -> Result<&'a str, LibError> {
    request
        .path_param(name)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| LibError::Validation {
            message: format!("{name} is required as a path parameter"),
        })
}

fn parse_body(request: &ApiGatewayRequest) -> Result<AirportDocument, LibError> {
    let body = request.body.as_deref().ok_or_else(|| LibError::Validation {
        message: "request body is required".to_string(),
    })?;
    serde_json::from_str(body).map_err(|e| LibError::Validation {
        message: format!("invalid JSON in request body: {e}"),
    })
}
