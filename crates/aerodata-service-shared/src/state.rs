//! Application state for the HTTP microservices.

use std::sync::Arc;

use aerodata_lib::{DataApiClient, DataApiConfig, Result};

/// Shared application state for all axum handlers.
///
/// Cheaply cloneable (the client sits behind an `Arc`) and shared via
/// axum's `State` extractor. Built once at startup; a configuration
/// failure aborts startup rather than surfacing per request.
#[derive(Clone)]
pub struct AppState {
    client: Arc<DataApiClient>,
}

impl AppState {
    pub fn new(client: DataApiClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }

    /// Build state from `DATA_API_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(DataApiClient::from_env()?))
    }

    /// Build state from an explicit configuration.
    pub fn from_config(config: DataApiConfig) -> Result<Self> {
        Ok(Self::new(DataApiClient::new(config)?))
    }

    pub fn client(&self) -> &DataApiClient {
        &self.client
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_is_cheaply_cloneable() {
        let state = AppState::from_config(DataApiConfig::new("api.example.com", "admin", "secret"))
            .unwrap();
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.client, &clone.client));
    }

    #[test]
    fn empty_credentials_fail_construction() {
        let result = AppState::from_config(DataApiConfig::new("api.example.com", "", ""));
        assert!(result.is_err());
    }
}
