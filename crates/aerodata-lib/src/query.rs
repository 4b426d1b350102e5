//! Parameterized SQL++ statements for the route collection.
//!
//! Airport codes are always bound as positional arguments, never
//! interpolated into the statement text. Codes pass through unmodified;
//! callers own case handling.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::DataApiConfig;

/// Query service request body: a statement plus positional arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryRequest {
    pub statement: String,
    pub args: Vec<Value>,
}

/// Query service response; rows land in `results`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    #[serde(default)]
    pub results: Vec<Value>,
}

/// Distinct airlines flying into or out of an airport, by FAA code.
pub fn airlines_by_airport(config: &DataApiConfig, code: &str) -> QueryRequest {
    QueryRequest {
        statement: format!(
            "SELECT DISTINCT r.airline FROM `{}`.`{}`.route r \
             WHERE r.sourceairport = ? OR r.destinationairport = ? \
             ORDER BY r.airline",
            config.bucket, config.scope
        ),
        args: vec![Value::from(code), Value::from(code)],
    }
}

/// First ten routes touching an airport, by FAA code.
pub fn routes_by_airport(config: &DataApiConfig, code: &str) -> QueryRequest {
    QueryRequest {
        statement: format!(
            "SELECT r.* FROM `{}`.`{}`.route r \
             WHERE r.sourceairport = ? OR r.destinationairport = ? \
             ORDER BY r.sourceairport, r.destinationairport LIMIT 10",
            config.bucket, config.scope
        ),
        args: vec![Value::from(code), Value::from(code)],
    }
}
