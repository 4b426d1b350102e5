//! AWS Lambda function for the geo-proximity hotel search.
//!
//! Serves `GET /airports/{airportId}/hotels/nearby/{distance}` behind
//! API Gateway: resolves the airport document, then queries the hotel
//! geo index around its coordinates.

use lambda_runtime::{service_fn, Error as LambdaError, LambdaEvent};
use tracing::{error, info};

use aerodata_lambda_shared::{
    data_api_client, error_response, init_tracing, json_response, ApiGatewayRequest,
    ApiGatewayResponse,
};
use aerodata_lib::{DataApiClient, Error as LibError};

/// Distance applied when the path omits one.
pub const DEFAULT_DISTANCE: &str = "5km";

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
    let (airport_id, distance) = match search_params(request) {
        Ok(params) => params,
        Err(e) => return error_response(&e),
    };

    info!(
        request_id = %request_id,
        airport_id = %airport_id,
        distance = %distance,
        "handling hotel search request"
    );

    match client.hotels_near_airport(airport_id, distance).await {
        Ok(result) => json_response(200, &result),
        Err(e) => {
            error!(request_id = %request_id, error = %e, code = e.code(), "hotel search failed");
            error_response(&e)
        }
    }
}

/// Extract the airport key and distance spec from the path parameters.
/// The distance falls back to [`DEFAULT_DISTANCE`] when omitted.
pub fn search_params(request: &ApiGatewayRequest) -> Result<(&str, &str), LibError> {
    let airport_id = request
        .path_param("airportId")
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| LibError::Validation {
            message: "airportId is required as a path parameter".to_string(),
        })?;

    let distance = request
        .path_param("distance")
        .filter(|value| !value.trim().is_empty())
        .unwrap_or(DEFAULT_DISTANCE);

    Ok((airport_id, distance))
}
