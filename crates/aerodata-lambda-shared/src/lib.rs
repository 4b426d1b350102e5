//! Shared infrastructure for aerodata AWS Lambda functions.
//!
//! This crate provides common functionality used across the Lambda
//! handlers:
//!
//! - [`ApiGatewayRequest`]/[`ApiGatewayResponse`]: the API Gateway proxy
//!   event subset the handlers consume and the response shape they emit
//! - [`ErrorBody`]: the canonical `{error, message[, detail]}` envelope
//! - [`data_api_client`]: once-per-container Data API client
//! - [`init_tracing`]: JSON-formatted tracing for CloudWatch Logs

#![deny(warnings)]

mod event;
mod response;
mod runtime;
mod tracing_init;

pub use event::ApiGatewayRequest;
pub use response::{error_response, json_response, ApiGatewayResponse, ErrorBody};
pub use runtime::data_api_client;
pub use tracing_init::init_tracing;
