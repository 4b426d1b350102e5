//! Canonical JSON error responses for the HTTP services.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use aerodata_lib::Error as LibError;

/// The `{error, message[, detail]}` envelope as an axum response.
///
/// The outward status is carried alongside the body and applied by
/// [`IntoResponse`]; it never appears in the JSON itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip)]
    status: u16,
}

impl ApiError {
    /// Map a library error to its outward status and envelope.
    pub fn from_lib_error(error: &LibError) -> Self {
        Self {
            error: error.code().to_string(),
            message: error.to_string(),
            detail: error.detail().map(str::to_string),
            status: error.outward_status(),
        }
    }

    /// A 400 validation envelope for host-level input checks.
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: "ValidationError".to_string(),
            message: message.into(),
            detail: None,
            status: 400,
        }
    }

    pub fn status(&self) -> u16 {
        self.status
    }
}

impl From<LibError> for ApiError {
    fn from(error: LibError) -> Self {
        Self::from_lib_error(&error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}
