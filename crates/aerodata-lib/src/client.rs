//! High-level Data API client: document CRUD, route queries, and the
//! two-phase geo-proximity hotel search.

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info};

use crate::auth::basic_auth_header;
use crate::config::DataApiConfig;
use crate::endpoint::{document_url, fts_search_url, query_url};
use crate::error::{classify, Error, OperationKind, Result};
use crate::geo::{self, Distance, HotelSearchResponse, SearchResponse};
use crate::http::{build_client, execute, UpstreamResponse};
use crate::model::{AirlineRow, AirportDocument};
use crate::query::{self, QueryRequest, QueryResponse};

/// Client for the three Data API surfaces.
///
/// Holds the read-only configuration and the prebuilt Basic token; both
/// outbound calls of the hotel search path share one credential check.
/// Cheap to share by reference across concurrent requests; the client
/// carries no per-request state.
pub struct DataApiClient {
    http: reqwest::Client,
    config: DataApiConfig,
    auth_header: String,
}

impl DataApiClient {
    /// Build a client from an explicit configuration.
    pub fn new(config: DataApiConfig) -> Result<Self> {
        config.validate()?;
        let auth_header = basic_auth_header(&config.username, &config.password)?;
        Ok(Self {
            http: build_client()?,
            config,
            auth_header,
        })
    }

    /// Build a client from `DATA_API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::new(DataApiConfig::from_env()?)
    }

    pub fn config(&self) -> &DataApiConfig {
        &self.config
    }

    /// Fetch one airport document and attach its key as `id`.
    pub async fn get_airport(&self, key: &str) -> Result<AirportDocument> {
        let key = require_key(key)?;
        let url = document_url(&self.config, key);
        debug!(url = %url, "fetching airport document");

        let response = self.execute(Method::GET, &url, None::<&Value>).await?;
        if !response.is_success() {
            return Err(classify(OperationKind::Get, response.status, &response.body));
        }

        let mut airport: AirportDocument = decode(&response)?;
        airport.id = Some(key.to_string());
        Ok(airport)
    }

    /// Store a new airport document under `key`.
    ///
    /// Returns the upstream acknowledgment body, which is empty for the
    /// current backend but reserved for CAS metadata.
    pub async fn create_airport(&self, key: &str, airport: &AirportDocument) -> Result<Value> {
        let key = require_key(key)?;
        let url = document_url(&self.config, key);
        debug!(url = %url, "creating airport document");

        let response = self.execute(Method::POST, &url, Some(airport)).await?;
        if !response.is_success() {
            return Err(classify(OperationKind::Create, response.status, &response.body));
        }
        Ok(decode_or_empty(&response))
    }

    /// Replace the airport document stored under `key`.
    pub async fn update_airport(&self, key: &str, airport: &AirportDocument) -> Result<Value> {
        let key = require_key(key)?;
        let url = document_url(&self.config, key);
        debug!(url = %url, "updating airport document");

        let response = self.execute(Method::PUT, &url, Some(airport)).await?;
        if !response.is_success() {
            return Err(classify(OperationKind::Update, response.status, &response.body));
        }
        Ok(decode_or_empty(&response))
    }

    /// Delete the airport document stored under `key`.
    pub async fn delete_airport(&self, key: &str) -> Result<()> {
        let key = require_key(key)?;
        let url = document_url(&self.config, key);
        debug!(url = %url, "deleting airport document");

        let response = self.execute(Method::DELETE, &url, None::<&Value>).await?;
        if !response.is_success() {
            return Err(classify(OperationKind::Delete, response.status, &response.body));
        }
        Ok(())
    }

    /// Distinct airlines serving an airport, by FAA code.
    pub async fn airlines_by_airport(&self, code: &str) -> Result<Vec<AirlineRow>> {
        let code = require_code(code)?;
        let rows = self
            .run_query(&query::airlines_by_airport(&self.config, code))
            .await?;
        rows.into_iter()
            .map(|row| {
                serde_json::from_value(row).map_err(|e| Error::Internal {
                    status: 200,
                    message: format!("failed to decode airline row: {e}"),
                })
            })
            .collect()
    }

    /// Routes touching an airport, by FAA code. Route documents are
    /// free-form and returned as-is.
    pub async fn routes_by_airport(&self, code: &str) -> Result<Vec<Value>> {
        let code = require_code(code)?;
        self.run_query(&query::routes_by_airport(&self.config, code))
            .await
    }

    /// Two-phase geo search: resolve the airport, then query the hotel
    /// index around its coordinates.
    ///
    /// A missing airport propagates as `NotFound` and the index is never
    /// queried; zero hits is a success with an empty list.
    pub async fn hotels_near_airport(
        &self,
        key: &str,
        distance: &str,
    ) -> Result<HotelSearchResponse> {
        // Malformed distances are rejected before any network call.
        let distance: Distance = distance.parse()?;

        let airport = self.get_airport(key).await?;
        let location = geo::airport_location(&airport)?;

        let request = geo::geo_search_request(location, &distance);
        let url = fts_search_url(&self.config, geo::HOTEL_GEO_INDEX);
        info!(
            airport = %key,
            distance = %distance,
            lat = location.lat,
            lon = location.lon,
            "searching hotels near airport"
        );

        let response = self.execute(Method::POST, &url, Some(&request)).await?;
        if !response.is_success() {
            return Err(classify(OperationKind::Search, response.status, &response.body));
        }

        let search: SearchResponse = decode(&response)?;
        Ok(geo::assemble_search_response(
            &airport, location, &distance, search,
        ))
    }

    async fn run_query(&self, request: &QueryRequest) -> Result<Vec<Value>> {
        let url = query_url(&self.config);
        debug!(url = %url, statement = %request.statement, "executing query");

        let response = self.execute(Method::POST, &url, Some(request)).await?;
        if !response.is_success() {
            return Err(classify(OperationKind::Query, response.status, &response.body));
        }

        let parsed: QueryResponse = decode(&response)?;
        Ok(parsed.results)
    }

    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<UpstreamResponse> {
        execute(&self.http, method, url, &self.auth_header, body).await
    }
}

fn require_key(key: &str) -> Result<&str> {
    if key.trim().is_empty() {
        return Err(Error::Validation {
            message: "document key is required".to_string(),
        });
    }
    Ok(key)
}

fn require_code(code: &str) -> Result<&str> {
    if code.trim().is_empty() {
        return Err(Error::Validation {
            message: "airport code is required".to_string(),
        });
    }
    Ok(code)
}

fn decode<T: DeserializeOwned>(response: &UpstreamResponse) -> Result<T> {
    serde_json::from_str(&response.body).map_err(|e| Error::Internal {
        status: response.status,
        message: format!("failed to decode upstream response: {e}"),
    })
}

// Mutations may acknowledge with an empty body; treat that as `{}`.
fn decode_or_empty(response: &UpstreamResponse) -> Value {
    serde_json::from_str(&response.body).unwrap_or(Value::Object(Map::new()))
}
