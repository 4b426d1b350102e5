//! Once-per-container initialization of the Data API client.
//!
//! A configuration failure is cached and surfaced as an error envelope on
//! every invocation instead of crash-looping the container.

use std::sync::OnceLock;

use tracing::{error, info};

use aerodata_lib::{DataApiClient, Error};

static CLIENT: OnceLock<Result<DataApiClient, Error>> = OnceLock::new();

/// Access the container-wide Data API client, initializing it from the
/// environment on first use.
pub fn data_api_client() -> Result<&'static DataApiClient, &'static Error> {
    CLIENT
        .get_or_init(|| {
            let client = DataApiClient::from_env();
            match &client {
                Ok(client) => {
                    info!(endpoint = %client.config().endpoint, "data api client initialized")
                }
                Err(e) => error!(error = %e, "data api client initialization failed"),
            }
            client
        })
        .as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;

    // The container-wide OnceLock makes the outcome order-dependent across
    // tests, so only the caching contract is asserted here: repeated calls
    // observe one initialization result.
    #[test]
    fn repeated_calls_share_one_initialization() {
        let first = data_api_client().err().map(|e| e.to_string());
        let second = data_api_client().err().map(|e| e.to_string());
        assert_eq!(first, second);
    }
}
