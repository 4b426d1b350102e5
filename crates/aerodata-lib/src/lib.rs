//! Aerodata library entry points.
//!
//! This crate exposes the data-access layer for the travel Data API:
//! configuration, Basic-auth header construction, endpoint resolution,
//! request execution, upstream error classification, parameterized route
//! queries, and the two-phase geo-proximity hotel search. Higher-level
//! consumers (Lambdas, HTTP services) should only depend on the types
//! exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod geo;
pub mod http;
pub mod model;
pub mod query;

pub use client::DataApiClient;
pub use config::DataApiConfig;
pub use error::{classify, Error, OperationKind, Result};
pub use geo::{Distance, DistanceUnit, HotelSearchResponse};
pub use http::UpstreamResponse;
pub use model::{AirlineRow, AirportDocument, GeoCoordinates};
