//! API Gateway response construction and the canonical error envelope.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use aerodata_lib::Error;

/// The response shape API Gateway expects from a proxy integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiGatewayResponse {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Canonical error envelope: `{error, message}`, plus `detail` for
/// search failures that carry an operational hint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    pub fn from_error(error: &Error) -> Self {
        Self {
            error: error.code().to_string(),
            message: error.to_string(),
            detail: error.detail().map(str::to_string),
        }
    }
}

/// Build a JSON proxy response with the given status.
pub fn json_response(status_code: u16, body: &impl Serialize) -> ApiGatewayResponse {
    let body = serde_json::to_string(body).unwrap_or_else(|_| "{}".to_string());
    ApiGatewayResponse {
        status_code,
        headers: HashMap::from([(
            "content-type".to_string(),
            "application/json".to_string(),
        )]),
        body,
        is_base64_encoded: false,
    }
}

/// Map a library error to its outward status and envelope.
pub fn error_response(error: &Error) -> ApiGatewayResponse {
    json_response(error.outward_status(), &ErrorBody::from_error(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use aerodata_lib::{classify, OperationKind};
    use serde_json::{json, Value};

    #[test]
    fn json_response_sets_the_content_type() {
        let response = json_response(200, &json!({ "ok": true }));
        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers["content-type"], "application/json");
        assert!(!response.is_base64_encoded);
        assert_eq!(response.body, r#"{"ok":true}"#);
    }

    #[test]
    fn not_found_maps_to_404_with_the_envelope() {
        let error = classify(OperationKind::Get, 404, "document not found");
        let response = error_response(&error);
        assert_eq!(response.status_code, 404);

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "DocumentNotFound");
        assert_eq!(body["message"], "document not found");
        assert!(body.get("detail").is_none());
    }

    #[test]
    fn conflict_maps_to_409() {
        let error = classify(OperationKind::Create, 409, "");
        let response = error_response(&error);
        assert_eq!(response.status_code, 409);

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "Conflict");
        assert_eq!(body["message"], "document already exists");
    }

    #[test]
    fn search_index_failures_carry_the_detail_hint() {
        let error = classify(OperationKind::Search, 404, "index not found");
        let response = error_response(&error);
        assert_eq!(response.status_code, 500);

        let body: Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["error"], "IndexNotFound");
        assert!(body["detail"].as_str().unwrap().contains("hotel-geo-index"));
    }

    #[test]
    fn auth_failures_are_not_surfaced_outward() {
        let error = classify(OperationKind::Get, 403, "forbidden");
        let response = error_response(&error);
        assert_eq!(response.status_code, 500);
    }
}
