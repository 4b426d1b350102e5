//! Minimal API Gateway proxy event subset consumed by the handlers.

use std::collections::HashMap;

use serde::Deserialize;

/// An API Gateway proxy request.
///
/// Only the fields the handlers route on are modeled; everything else in
/// the event is ignored. `pathParameters` is `null` (not absent) for
/// parameterless routes, hence the nested `Option`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayRequest {
    #[serde(default)]
    pub http_method: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub path_parameters: Option<HashMap<String, String>>,
    #[serde(default)]
    pub body: Option<String>,
}

impl ApiGatewayRequest {
    /// Look up a path parameter by name.
    pub fn path_param(&self, name: &str) -> Option<&str> {
        self.path_parameters
            .as_ref()
            .and_then(|params| params.get(name))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_a_proxy_event() {
        let request: ApiGatewayRequest = serde_json::from_value(json!({
            "httpMethod": "GET",
            "path": "/airports/airport_1254",
            "pathParameters": { "airportId": "airport_1254" },
            "body": null,
            "headers": { "accept": "application/json" }
        }))
        .unwrap();

        assert_eq!(request.http_method, "GET");
        assert_eq!(request.path_param("airportId"), Some("airport_1254"));
        assert!(request.body.is_none());
    }

    #[test]
    fn tolerates_null_path_parameters() {
        let request: ApiGatewayRequest = serde_json::from_value(json!({
            "httpMethod": "GET",
            "path": "/airports",
            "pathParameters": null
        }))
        .unwrap();

        assert!(request.path_param("airportId").is_none());
    }
}
