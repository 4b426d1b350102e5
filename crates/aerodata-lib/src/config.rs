//! Data API configuration.
//!
//! Configuration is read once at process start and passed explicitly into
//! the client; business logic never consults the environment directly.

use std::env;

use crate::error::{Error, Result};

const ENDPOINT_ENV: &str = "DATA_API_ENDPOINT";
const USERNAME_ENV: &str = "DATA_API_USERNAME";
const PASSWORD_ENV: &str = "DATA_API_PASSWORD";
const BUCKET_ENV: &str = "DATA_API_BUCKET";
const SCOPE_ENV: &str = "DATA_API_SCOPE";
const COLLECTION_ENV: &str = "DATA_API_COLLECTION";

const DEFAULT_BUCKET: &str = "travel-sample";
const DEFAULT_SCOPE: &str = "inventory";
const DEFAULT_COLLECTION: &str = "airport";

/// Immutable per-deployment configuration for the Data API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataApiConfig {
    /// Cluster endpoint host, with or without a scheme prefix.
    pub endpoint: String,
    pub username: String,
    pub password: String,
    pub bucket: String,
    pub scope: String,
    pub collection: String,
}

impl DataApiConfig {
    /// Build a configuration with the default travel-sample namespace.
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
            bucket: DEFAULT_BUCKET.to_string(),
            scope: DEFAULT_SCOPE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
        }
    }

    /// Read configuration from the environment.
    ///
    /// `DATA_API_ENDPOINT`, `DATA_API_USERNAME`, and `DATA_API_PASSWORD`
    /// are required; every missing variable is reported in one error.
    /// The bucket/scope/collection namespace may be overridden via
    /// `DATA_API_BUCKET`/`DATA_API_SCOPE`/`DATA_API_COLLECTION`.
    pub fn from_env() -> Result<Self> {
        let mut missing = Vec::new();
        let mut read_required = |name: &'static str| match env::var(name) {
            Ok(value) if !value.trim().is_empty() => value,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let endpoint = read_required(ENDPOINT_ENV);
        let username = read_required(USERNAME_ENV);
        let password = read_required(PASSWORD_ENV);

        if !missing.is_empty() {
            return Err(Error::Configuration {
                message: format!("{} environment variable is not set", missing.join(", ")),
            });
        }

        Ok(Self {
            endpoint,
            username,
            password,
            bucket: env::var(BUCKET_ENV).unwrap_or_else(|_| DEFAULT_BUCKET.to_string()),
            scope: env::var(SCOPE_ENV).unwrap_or_else(|_| DEFAULT_SCOPE.to_string()),
            collection: env::var(COLLECTION_ENV)
                .unwrap_or_else(|_| DEFAULT_COLLECTION.to_string()),
        })
    }

    /// Reject configurations with empty fields before any request is made.
    pub fn validate(&self) -> Result<()> {
        let mut empty = Vec::new();
        for (name, value) in [
            ("endpoint", &self.endpoint),
            ("username", &self.username),
            ("password", &self.password),
            ("bucket", &self.bucket),
            ("scope", &self.scope),
            ("collection", &self.collection),
        ] {
            if value.trim().is_empty() {
                empty.push(name);
            }
        }

        if empty.is_empty() {
            Ok(())
        } else {
            Err(Error::Configuration {
                message: format!("{} must not be empty", empty.join(", ")),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_applies_the_default_namespace() {
        let config = DataApiConfig::new("api.example.com", "admin", "secret");
        assert_eq!(config.bucket, "travel-sample");
        assert_eq!(config.scope, "inventory");
        assert_eq!(config.collection, "airport");
    }

    #[test]
    fn validate_accepts_a_complete_configuration() {
        let config = DataApiConfig::new("api.example.com", "admin", "secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_reports_every_empty_field() {
        let mut config = DataApiConfig::new("api.example.com", "", "");
        config.bucket = " ".to_string();
        let err = config.validate().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("username"));
        assert!(message.contains("password"));
        assert!(message.contains("bucket"));
        assert!(!message.contains("endpoint"));
    }
}
